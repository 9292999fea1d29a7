//! Error types for the One Heart API SDK.
//!
//! This module contains the configuration error type. It covers both
//! client configuration (base URLs, versions, timeouts) and caller-supplied
//! request parameters that conflict or are missing.
//!
//! # Error Handling
//!
//! A [`ConfigError`] is always raised before any network call is attempted.
//! Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use oneheart_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors raised while configuring the SDK or building a request.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A caller-supplied parameter collides with a key the SDK sets itself.
    #[error("Parameter '{key}' is reserved and cannot be used as a filter.")]
    ReservedParameter {
        /// The reserved key that was supplied.
        key: String,
    },

    /// The same parameter was supplied twice.
    #[error("Parameter '{key}' was supplied more than once.")]
    DuplicateParameter {
        /// The duplicated key.
        key: String,
    },

    /// A parameter key was empty.
    #[error("Parameter keys cannot be empty.")]
    EmptyParameter,

    /// A payload could not be flattened into form parameters.
    #[error("Unsupported payload: {reason}")]
    UnsupportedPayload {
        /// Why the payload was rejected.
        reason: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL (e.g., 'https://www.oneheart.fr/api/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v1' or 'beta'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A donation amount is not a plain decimal number.
    #[error("Invalid amount '{value}'. Expected digits with an optional fractional part (e.g., '12.50').")]
    InvalidAmount {
        /// The rejected amount.
        value: String,
    },

    /// Request timeout is invalid.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
