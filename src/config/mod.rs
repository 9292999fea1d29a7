//! Configuration types for the One Heart API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with the One Heart platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`OneheartConfig`]: The main configuration struct holding all SDK settings
//! - [`OneheartConfigBuilder`]: A builder for constructing [`OneheartConfig`] instances
//! - [`Credentials`] and [`ClientSecret`]: Basic auth credentials
//! - [`BaseUrl`]: A validated API base URL
//! - [`ApiVersion`]: The API version (base URL and envelope shape) to target
//!
//! # Example
//!
//! ```rust
//! use oneheart_api::{ApiVersion, OneheartConfig};
//! use std::time::Duration;
//!
//! let config = OneheartConfig::builder()
//!     .client_id("my@public.key")
//!     .client_secret("my_secret_key")
//!     .api_version(ApiVersion::Beta)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://www.oneheartcommunication.com/api-beta/");
//! ```

mod newtypes;
mod version;

pub use newtypes::{BaseUrl, ClientSecret, Credentials};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;
use crate::rest::EnvelopeShape;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the One Heart API SDK.
///
/// The base URL and envelope shape are resolved from the [`ApiVersion`]
/// when the configuration is built, unless explicitly overridden.
///
/// # Thread Safety
///
/// `OneheartConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OneheartConfig {
    credentials: Credentials,
    api_version: ApiVersion,
    base_url: BaseUrl,
    envelope: EnvelopeShape,
    timeout: Duration,
    debug: bool,
    user_agent_prefix: Option<String>,
}

impl OneheartConfig {
    /// Creates a new builder for constructing a `OneheartConfig`.
    #[must_use]
    pub fn builder() -> OneheartConfigBuilder {
        OneheartConfigBuilder::new()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the resolved base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the resolved envelope shape.
    #[must_use]
    pub const fn envelope(&self) -> EnvelopeShape {
        self.envelope
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether debug dumps are enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify OneheartConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OneheartConfig>();
};

/// Builder for constructing [`OneheartConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`. All other fields
/// have defaults.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `base_url`: taken from the API version
/// - `envelope`: taken from the API version
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `debug`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct OneheartConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    api_version: Option<ApiVersion>,
    base_url: Option<BaseUrl>,
    envelope: Option<EnvelopeShape>,
    timeout: Option<Duration>,
    debug: bool,
    user_agent_prefix: Option<String>,
}

impl OneheartConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the public client id (required).
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets both halves of the credentials at once.
    #[must_use]
    pub fn credentials(mut self, credentials: &Credentials) -> Self {
        self.client_id = Some(credentials.client_id().to_string());
        self.client_secret = Some(credentials.client_secret().as_ref().to_string());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the base URL of the API version.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Overrides the envelope shape of the API version.
    #[must_use]
    pub const fn envelope(mut self, envelope: EnvelopeShape) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables debug dumps of outgoing parameters and raw response bodies.
    ///
    /// Do not enable this in production: dumps include oauth tokens.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OneheartConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set, and [`ConfigError::InvalidTimeout`] for a
    /// zero timeout.
    pub fn build(self) -> Result<OneheartConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let api_version = self.api_version.unwrap_or_else(ApiVersion::latest);
        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => api_version.base_url()?,
        };
        let envelope = self.envelope.unwrap_or_else(|| api_version.envelope());

        Ok(OneheartConfig {
            credentials: Credentials::new(client_id, client_secret),
            api_version,
            base_url,
            envelope,
            timeout,
            debug: self.debug,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
