use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::token::Token;

/// Scope-aware token cache: scope -> token.
///
/// Expiry is evaluated lazily at read time; there is no explicit
/// invalidation. Entries are only ever replaced by a newer token for the
/// same scope. The lock is never held across a network await, so concurrent
/// refreshes of the same scope race last-writer-wins.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<HashMap<String, Token>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Insert or replace the token for a scope
    pub async fn set(&self, scope: &str, token: Token) {
        let mut map = self.inner.write().await;
        map.insert(scope.to_string(), token);
    }

    /// Get the token for a scope if it exists and is not expired at `now`
    pub async fn get(&self, scope: &str, now: i64) -> Option<Token> {
        let map = self.inner.read().await;
        map.get(scope)
            .map(|token| token.clone())
            .filter(|t| t.is_valid_at(now))
    }
}
