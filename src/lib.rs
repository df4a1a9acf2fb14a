//! # Service Account Token Provider
//!
//! Provides functionality for issuing short-lived OAuth2 access tokens for a
//! service identity via the JWT-bearer grant flow: signing a bearer
//! assertion, exchanging it at the OAuth2 token endpoint, and caching the
//! result until expiry.
//!
//! Modules:
//! - `credentials` — service-account credential document
//! - `assertion` — signed bearer assertion (RS256 JWT) construction
//! - `exchange` — assertion-for-token exchange against the token endpoint
//! - `cache` — per-scope access-token cache
//! - `provider` — public entry point tying the above together

pub mod assertion;
pub mod cache;
pub mod credentials;
pub mod error;
pub mod exchange;
pub mod helpers;
pub mod provider;
pub mod tests;

pub use crate::credentials::service_account::ServiceAccountKey;
pub use crate::error::{Error, Result};
pub use crate::provider::TokenProvider;
