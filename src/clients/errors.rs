//! Transport error types for the One Heart API SDK.
//!
//! # Error Handling
//!
//! [`HttpError`] covers every failure that happens before a response body is
//! available: connection failures, TLS failures, timeouts. HTTP status codes
//! are not errors at this layer; the response envelope decides success.
//!
//! # Example
//!
//! ```rust,ignore
//! use oneheart_api::clients::HttpError;
//!
//! match client.request(&request).await {
//!     Ok(response) => println!("{} bytes", response.body.len()),
//!     Err(HttpError::Timeout(e)) => println!("Timed out: {e}"),
//!     Err(HttpError::Connect(e)) => println!("Cannot reach the API: {e}"),
//!     Err(e) => println!("Transport error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for transport failures.
///
/// Never retried automatically.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The connection could not be established (refused, DNS, TLS handshake).
    #[error("Connection error: {0}")]
    Connect(#[source] reqwest::Error),

    /// Any other network-level failure while sending or reading.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if this error is a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Network(err)
        }
    }
}
