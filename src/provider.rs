use reqwest::Client;
use tracing::debug;

use crate::assertion;
use crate::cache::token::Token;
use crate::cache::token_cache::TokenCache;
use crate::credentials::service_account::ServiceAccountKey;
use crate::error::Result;
use crate::exchange;
use crate::helpers::time::now_i64;

/// Issues access tokens for a service identity, reusing a cached token while
/// it is still valid and minting a fresh one otherwise.
///
/// The credential fields are read-only after construction. The cache is
/// written only on a successful exchange, so a failed attempt leaves the
/// previous (possibly expired) entry in place and a subsequent call retries
/// from scratch.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    pub(crate) key: ServiceAccountKey,
    pub(crate) client: Client,
    pub(crate) cache: TokenCache,
}

impl TokenProvider {
    /// Build a provider from raw credential-document bytes.
    ///
    /// Fails with [`crate::Error::InvalidCredentialFormat`] when the bytes do
    /// not decode into the expected document shape.
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let key = ServiceAccountKey::from_slice(raw)?;
        Ok(Self::new(key))
    }

    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            client: Client::new(),
            cache: TokenCache::new(),
        }
    }

    /// Request an access token for `scope`, evaluated against the wall clock.
    pub async fn access_token(&self, scope: &str) -> Result<String> {
        self.access_token_at(scope, now_i64()).await
    }

    /// Request an access token for `scope` as of `now` (UNIX seconds).
    ///
    /// A valid cached token for the scope is returned without signing or any
    /// network call. Otherwise a fresh assertion is built, exchanged at the
    /// token endpoint, and the cache entry for the scope is replaced.
    pub async fn access_token_at(&self, scope: &str, now: i64) -> Result<String> {
        if let Some(token) = self.cache.get(scope, now).await {
            debug!(scope, "returning cached access token");
            return Ok(token.value);
        }

        let jwt = assertion::build(&self.key, scope, now)?;
        let (access_token, expires_in) =
            exchange::exchange(&self.client, &self.key.token_uri, &jwt).await?;

        // Written on the success path only. The lock is not held across the
        // exchange await, so concurrent refreshes race last-writer-wins.
        self.cache
            .set(scope, Token::new(access_token.clone(), now + expires_in))
            .await;
        debug!(scope, expires_at = now + expires_in, "access token cached");

        Ok(access_token)
    }
}
