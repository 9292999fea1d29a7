//! The client facade.
//!
//! [`OneheartClient`] owns the transport and hands out one resource module
//! per platform collection. Every module shares the same [`HttpClient`].

use std::sync::Arc;

use crate::clients::{DiagnosticSink, HttpClient, NoopSink, TracingSink};
use crate::config::OneheartConfig;
use crate::rest::resources::{Insights, Users, Videos};
use crate::rest::{ApiError, ResourceModule};

/// Entry point of the SDK.
///
/// # Thread Safety
///
/// `OneheartClient` is `Send + Sync` and holds only immutable state, so it
/// can be shared across tasks (e.g. in an `Arc`) and called concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use oneheart_api::OneheartClient;
/// use oneheart_api::rest::SummaryOptions;
/// use serde_json::Value;
///
/// let client = OneheartClient::new("my@public.key", "my_secret_key", false)?;
///
/// let spots = client
///     .spots()
///     .summary::<Vec<Value>>(&SummaryOptions::new().fields(["id", "name"]))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct OneheartClient {
    config: OneheartConfig,
    http: Arc<HttpClient>,
    users: Users,
    spots: ResourceModule,
    videos: Videos,
    news: ResourceModule,
    events: ResourceModule,
    actions: ResourceModule,
    insights: Insights,
}

// Verify OneheartClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OneheartClient>();
};

impl OneheartClient {
    /// Creates a client for the latest API version.
    ///
    /// With `debug` on, raw requests and responses are dumped through
    /// [`TracingSink`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be created.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oneheart_api::OneheartClient;
    ///
    /// let client = OneheartClient::new("my@public.key", "my_secret_key", false).unwrap();
    /// assert_eq!(client.users().name(), "users");
    /// ```
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        debug: bool,
    ) -> Result<Self, ApiError> {
        let config = OneheartConfig::builder()
            .client_id(client_id)
            .client_secret(client_secret)
            .debug(debug)
            .build()?;

        Self::with_config(config)
    }

    /// Creates a client from a full configuration.
    ///
    /// Uses [`TracingSink`] when the configuration has debug on, and
    /// [`NoopSink`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be created.
    pub fn with_config(config: OneheartConfig) -> Result<Self, ApiError> {
        let sink: Arc<dyn DiagnosticSink> = if config.debug() {
            Arc::new(TracingSink)
        } else {
            Arc::new(NoopSink)
        };

        Self::with_diagnostics(config, sink)
    }

    /// Creates a client that reports dumps and warnings to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the HTTP client cannot be created.
    pub fn with_diagnostics(
        config: OneheartConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ApiError> {
        let http = Arc::new(HttpClient::new(&config, sink)?);
        let envelope = config.envelope();
        let module = |name: &'static str| ResourceModule::new(name, Arc::clone(&http), envelope);

        tracing::debug!(
            version = %config.api_version(),
            base_url = %config.base_url(),
            "Created One Heart API client"
        );

        Ok(Self {
            users: Users::new(module("users"), config.api_version().me_path()),
            spots: module("spots"),
            videos: Videos::new(module("videos")),
            news: module("news"),
            events: module("events"),
            actions: module("actions"),
            insights: Insights::new(module("insights")),
            config,
            http,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &OneheartConfig {
        &self.config
    }

    /// Returns the shared transport.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Users, including `me` and `donate`.
    #[must_use]
    pub const fn users(&self) -> &Users {
        &self.users
    }

    /// Spots.
    #[must_use]
    pub const fn spots(&self) -> &ResourceModule {
        &self.spots
    }

    /// Videos, including `watch`.
    #[must_use]
    pub const fn videos(&self) -> &Videos {
        &self.videos
    }

    /// News.
    #[must_use]
    pub const fn news(&self) -> &ResourceModule {
        &self.news
    }

    /// Events.
    #[must_use]
    pub const fn events(&self) -> &ResourceModule {
        &self.events
    }

    /// Actions.
    #[must_use]
    pub const fn actions(&self) -> &ResourceModule {
        &self.actions
    }

    /// Insights.
    #[must_use]
    pub const fn insights(&self) -> &Insights {
        &self.insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiVersion;
    use crate::rest::EnvelopeShape;

    #[test]
    fn test_new_wires_every_resource() {
        let client = OneheartClient::new("id", "secret", false).unwrap();

        assert_eq!(client.users().name(), "users");
        assert_eq!(client.spots().name(), "spots");
        assert_eq!(client.videos().name(), "videos");
        assert_eq!(client.news().name(), "news");
        assert_eq!(client.events().name(), "events");
        assert_eq!(client.actions().name(), "actions");
        assert!(!client.config().debug());
    }

    #[test]
    fn test_version_selects_envelope_and_me_path() {
        let v1 = OneheartClient::new("id", "secret", false).unwrap();
        assert_eq!(v1.spots().envelope(), EnvelopeShape::SuccessData);
        assert_eq!(v1.users().me_path(), "me");

        let config = OneheartConfig::builder()
            .client_id("id")
            .client_secret("secret")
            .api_version(ApiVersion::Beta)
            .build()
            .unwrap();
        let beta = OneheartClient::with_config(config).unwrap();
        assert_eq!(beta.spots().envelope(), EnvelopeShape::StatusDatas);
        assert_eq!(beta.users().me_path(), "users/me");
        assert_eq!(
            beta.http_client().base_url().as_ref(),
            "http://www.oneheartcommunication.com/api-beta/"
        );
    }

    #[test]
    fn test_debug_flag_reaches_transport() {
        let client = OneheartClient::new("id", "secret", true).unwrap();
        assert!(client.http_client().debug());
    }
}
