use thiserror::Error;

/// Failure kinds surfaced by the provider. Every failure keeps its specific
/// kind on the way to the caller; none are retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Credential bytes do not decode into the expected document shape.
    /// Fatal to construction; no partial provider is produced.
    #[error("invalid credential format: {0}")]
    InvalidCredentialFormat(String),

    /// Signing key unusable or the signature operation itself failed.
    #[error("failed to build signed assertion: {0}")]
    AssertionBuildFailed(String),

    /// Token endpoint URL could not be parsed.
    #[error("invalid token endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network-level failure, or the endpoint returned no body.
    #[error("token exchange transport failure: {0}")]
    TransportFailure(String),

    /// Response body present but not a JSON object with a string
    /// `access_token` and a numeric `expires_in`.
    #[error("malformed token endpoint response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
