use http::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Exchange a signed assertion for an access token via the OAuth2 JWT-bearer
/// grant. Single attempt, no retry, default transport timeouts only.
///
/// The HTTP status code is deliberately not inspected: only the payload
/// shape decides, so an error-shaped JSON body missing `access_token` is
/// reported as [`Error::MalformedResponse`] like any other malformed body.
///
/// Returns the bearer value and its lifetime in seconds.
pub async fn exchange(client: &Client, token_uri: &str, assertion: &str) -> Result<(String, i64)> {
    let url = Url::parse(token_uri)
        .map_err(|e| Error::InvalidEndpoint(format!("'{}': {}", token_uri, e)))?;

    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .form(&[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion)])
        .send()
        .await
        .map_err(|e| Error::TransportFailure(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| Error::TransportFailure(e.to_string()))?;
    if body.is_empty() {
        return Err(Error::TransportFailure("empty response body".to_string()));
    }

    let (access_token, expires_in) = parse_token_response(&body)?;
    debug!(expires_in, "access token exchanged successfully");
    Ok((access_token, expires_in))
}

/// Extract `access_token` and `expires_in` from a token-endpoint response
fn parse_token_response(body: &str) -> Result<(String, i64)> {
    let json: Value = serde_json::from_str(body).map_err(|e| {
        warn!("token endpoint body is not valid JSON: {}", e);
        Error::MalformedResponse(e.to_string())
    })?;

    let obj = json
        .as_object()
        .ok_or_else(|| Error::MalformedResponse("body is not a JSON object".to_string()))?;

    let access_token = obj
        .get("access_token")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::MalformedResponse("missing string field 'access_token'".to_string())
        })?;

    let expires_in = obj
        .get("expires_in")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            Error::MalformedResponse("missing numeric field 'expires_in'".to_string())
        })? as i64;

    Ok((access_token.to_owned(), expires_in))
}
