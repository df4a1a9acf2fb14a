pub mod oauth2;

pub use oauth2::{exchange, JWT_BEARER_GRANT_TYPE};
