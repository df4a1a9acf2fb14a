#[cfg(test)]
mod test {
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    use crate::cache::token::Token;
    use crate::provider::TokenProvider;
    use crate::tests::common::{init_test_logging, sample_key};

    const NOW: i64 = 1_700_000_000;

    /// A valid cached token short-circuits the call: no signing, no network.
    /// The credential carries an unusable key and an unreachable endpoint, so
    /// touching either collaborator would fail the test.
    #[tokio::test]
    async fn valid_cached_token_skips_signer_and_transport() {
        init_test_logging();

        let mut key = sample_key("http://127.0.0.1:1/token");
        key.private_key = "not a pem".to_string();
        let provider = TokenProvider::new(key);

        provider
            .cache
            .set("s", Token::new("cached-token".into(), NOW + 100))
            .await;

        let token = provider.access_token_at("s", NOW).await.unwrap();
        assert_eq!(token, "cached-token");
    }

    #[tokio::test]
    async fn expired_cached_token_triggers_exactly_one_exchange() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "access_token": "fresh", "expires_in": 3600 }));
        });

        let provider = TokenProvider::new(sample_key(&format!("{}/token", server.base_url())));
        provider
            .cache
            .set("s", Token::new("stale".into(), NOW - 10))
            .await;

        let token = provider.access_token_at("s", NOW).await.unwrap();
        assert_eq!(token, "fresh");
        assert_eq!(mock.hits_async().await, 1);
    }

    /// Two requests within the validity window return the same token and
    /// cost one network call in total.
    #[tokio::test]
    async fn repeated_request_within_window_is_idempotent() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "access_token": "abc", "expires_in": 3600 }));
        });

        let provider = TokenProvider::new(sample_key(&format!("{}/token", server.base_url())));

        let first = provider.access_token_at("s", NOW).await.unwrap();
        let second = provider.access_token_at("s", NOW + 1800).await.unwrap();

        assert_eq!(first, "abc");
        assert_eq!(first, second);
        assert_eq!(mock.hits_async().await, 1);
    }

    /// The cache is keyed by scope: a second scope mints its own token
    /// instead of reusing one minted for a prior scope.
    #[tokio::test]
    async fn scopes_get_independent_tokens() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "access_token": "abc", "expires_in": 3600 }));
        });

        let provider = TokenProvider::new(sample_key(&format!("{}/token", server.base_url())));

        provider.access_token_at("scope-a", NOW).await.unwrap();
        provider.access_token_at("scope-b", NOW).await.unwrap();
        assert_eq!(mock.hits_async().await, 2);

        // both entries now served from cache
        provider.access_token_at("scope-a", NOW + 10).await.unwrap();
        provider.access_token_at("scope-b", NOW + 10).await.unwrap();
        assert_eq!(mock.hits_async().await, 2);
    }
}
