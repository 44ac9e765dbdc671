//! Error taxonomy for store-client operations.

use thiserror::Error;
use turbine_api_types::ValidationError;

/// Errors surfaced by the store client. No operation retries internally;
/// callers decide whether a [`ApiError::Conflict`] warrants a
/// refresh-and-retry, and the resolver treats only [`ApiError::NotFound`]
/// (or a list miss) as recoverable.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection-level failure or timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response that carried no decodable error envelope.
    #[error("unexpected response ({status}): {body}")]
    UnexpectedStatus {
        status: u16,
        body: String,
    },

    /// Malformed JSON, envelope, or payload shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The requested resource does not exist.
    #[error("{collection} {key:?} not found")]
    NotFound {
        collection: &'static str,
        key: String,
    },

    /// The supplied checksum no longer matches the server's; the write
    /// was stale.
    #[error("checksum conflict on {collection} {key:?}: {message}")]
    Conflict {
        collection: &'static str,
        key: String,
        message: String,
    },

    /// Server-side semantic rejection (e.g. a dangling reference),
    /// surfaced verbatim.
    #[error("request rejected ({code}): {message}")]
    Validation {
        code: String,
        message: String,
    },

    /// Client-side validation failed before any request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The configured base URL could not be parsed or used as a base.
    #[error("invalid base url: {0}")]
    Config(String),
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl ApiError {
    /// True for the expected-absence case the resolver recovers from.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// True when a refresh-and-retry might succeed.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }
}
