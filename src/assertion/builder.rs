use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::credentials::service_account::ServiceAccountKey;
use crate::error::{Error, Result};

/// Validity window of a signed assertion. Fixed, not configurable.
pub const ASSERTION_TTL_SECONDS: i64 = 3600;

/// Claims of the bearer assertion. Fixed, closed set of fields.
#[derive(Debug, Serialize)]
pub struct AssertionClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

/// Build and sign a time-bounded bearer assertion for `scope`.
///
/// The header carries the credential's key id so the verifier can locate the
/// matching public key; the signature is RS256 over the encoded header and
/// claims. A signing failure is never transient, so no retry happens here.
pub fn build(key: &ServiceAccountKey, scope: &str, now: i64) -> Result<String> {
    let claims = AssertionClaims {
        iss: &key.client_email,
        scope,
        aud: &key.token_uri,
        iat: now,
        exp: now + ASSERTION_TTL_SECONDS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(key.private_key_id.clone());

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| Error::AssertionBuildFailed(format!("unusable private key: {}", e)))?;

    jsonwebtoken::encode(&header, &claims, &encoding_key)
        .map_err(|e| Error::AssertionBuildFailed(e.to_string()))
}
