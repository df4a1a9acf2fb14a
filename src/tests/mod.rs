#[cfg(test)]
pub mod common;

#[cfg(test)]
mod expiration_and_cache;
#[cfg(test)]
mod token_exchange;
