pub mod builder;

pub use builder::{build, AssertionClaims, ASSERTION_TTL_SECONDS};
