//! Newtype wrappers for configuration values.
//!
//! Credentials are deliberately not validated: a missing client id or secret
//! surfaces as an authentication failure from the platform. Base URLs are
//! validated on construction.

use crate::error::ConfigError;
use std::fmt;

/// The private half of an application's credentials.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use oneheart_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret");
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// assert_eq!(secret.as_ref(), "my-secret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Wraps a client secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// Application credentials sent as HTTP Basic auth on every request.
///
/// Immutable once constructed. There is no refresh or rotation.
///
/// # Example
///
/// ```rust
/// use oneheart_api::Credentials;
///
/// let credentials = Credentials::new("my@public.key", "my_secret_key");
/// assert_eq!(credentials.client_id(), "my@public.key");
/// assert!(!format!("{credentials:?}").contains("my_secret_key"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: ClientSecret,
}

impl Credentials {
    /// Creates credentials from a client id and secret.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: ClientSecret::new(client_secret),
        }
    }

    /// Returns the public client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }
}

/// A validated API base URL.
///
/// The URL must use the `http` or `https` scheme and name a host. It is
/// normalized to end with `/` so resource paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use oneheart_api::BaseUrl;
///
/// let url = BaseUrl::new("https://www.oneheart.fr/api").unwrap();
/// assert_eq!(url.as_ref(), "https://www.oneheart.fr/api/");
/// assert_eq!(url.join("spots"), "https://www.oneheart.fr/api/spots");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme, no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(invalid)?;

        let host_end = rest.find([':', '/']).unwrap_or(rest.len());
        if host_end == 0 || rest.contains(['?', '#', ' ']) {
            return Err(invalid());
        }

        if url.ends_with('/') {
            Ok(Self(url))
        } else {
            Ok(Self(format!("{url}/")))
        }
    }

    /// Appends a resource path to the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
