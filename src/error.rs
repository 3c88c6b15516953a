//! Error types for building and sending partner API requests.
//!
//! Request construction has exactly one failure mode: a required field was
//! never supplied. Everything else in this enum belongs to preparing a call or
//! to the dispatcher that carries it.

use serde_json::Value;

/// SDK-wide error type.
///
/// # Error Categories
///
/// - **Construction Errors**: A required request field is absent
/// - **Lookup Errors**: An endpoint name does not exist in the catalogue
/// - **Preparation Errors**: URL or JSON conversion failed
/// - **Sealing Errors**: The client secret or a sealed payload is malformed
/// - **Remote Errors**: The platform answered with a non-success status
/// - **Dispatch Errors**: The external dispatcher failed before any answer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field was not set when building a request.
    ///
    /// Carries the wire name of the field, e.g. `"shop_id"`.
    #[error("\"{0}\" is required")]
    MissingField(&'static str),

    /// No endpoint with this name exists in the catalogue.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// The configured base URL and request path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Parameters could not be encoded, or a response body did not match its
    /// expected shape.
    ///
    /// This wraps any serde_json::Error using the `#[from]` attribute.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform answered with a non-2xx status.
    ///
    /// The body is kept as raw JSON because error payloads do not follow the
    /// endpoint's response shape.
    #[error("API returned status {status}")]
    Api { status: u16, body: Value },

    /// A payload could not be sealed or unsealed with the client secret.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The dispatcher could not complete the call (network, sealing, ...).
    #[error("Dispatch failed: {0}")]
    Dispatch(String),
}

impl Error {
    /// Name of the missing field, if this is a construction error.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Error::MissingField(field) => Some(field),
            _ => None,
        }
    }
}
