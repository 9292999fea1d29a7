//! Error types for resource operations.
//!
//! Every resource operation reports failures through one channel,
//! [`ApiError`]:
//!
//! - [`ApiError::Rejected`] - the envelope reported failure; the message is
//!   the envelope's `error` field, verbatim
//! - [`ApiError::Malformed`] - the body is not a usable envelope
//! - [`ApiError::Http`] - transport failure (connection, TLS, timeout)
//! - [`ApiError::Config`] - caller-supplied parameters were rejected before
//!   any network call
//!
//! # Example
//!
//! ```rust,ignore
//! use oneheart_api::ApiError;
//!
//! match client.spots().single::<serde_json::Value>("42", &[]).await {
//!     Ok(spot) => println!("Spot: {}", *spot),
//!     Err(ApiError::Rejected { message }) => println!("API said no: {message}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// The response body could not be decoded into an envelope or payload.
///
/// # Example
///
/// ```rust
/// use oneheart_api::MalformedResponseError;
///
/// let error = MalformedResponseError::MissingField { field: "status" };
/// assert_eq!(error.to_string(), "malformed response: missing 'status' field");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedResponseError {
    /// The body is not valid JSON.
    #[error("malformed response: invalid JSON ({reason})")]
    InvalidJson {
        /// Parser message.
        reason: String,
    },

    /// The body is JSON but not an object.
    #[error("malformed response: envelope is not a JSON object")]
    NotAnObject,

    /// The success flag field is absent.
    #[error("malformed response: missing '{field}' field")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field has an unexpected JSON type.
    #[error("malformed response: '{field}' must be {expected}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// The payload does not match the type the caller asked for.
    #[error("malformed response: unexpected payload ({reason})")]
    UnexpectedPayload {
        /// Deserializer message.
        reason: String,
    },
}

/// Error type for every resource operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The platform answered with a failure envelope.
    #[error("{message}")]
    Rejected {
        /// The envelope's `error` field.
        message: String,
    },

    /// The response could not be decoded.
    #[error(transparent)]
    Malformed(#[from] MalformedResponseError),

    /// The request could not be delivered.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request was rejected before sending.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the platform's error message for rejected requests.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_message_verbatim() {
        let error = ApiError::Rejected {
            message: "not found".to_string(),
        };
        assert_eq!(error.to_string(), "not found");
        assert_eq!(error.api_message(), Some("not found"));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: ApiError = ConfigError::ReservedParameter {
            key: "max".to_string(),
        }
        .into();

        assert!(matches!(error, ApiError::Config(_)));
        assert!(error.api_message().is_none());
        assert!(error.to_string().contains("max"));
    }

    #[test]
    fn test_malformed_error_conversion() {
        let error: ApiError = MalformedResponseError::NotAnObject.into();
        assert!(error.to_string().starts_with("malformed response"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ApiError>();
        assert_error::<MalformedResponseError>();
    }
}
