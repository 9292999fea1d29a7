//! HTTP client for One Heart API communication.
//!
//! This module provides the [`HttpClient`] type, the single transport
//! primitive every resource operation goes through.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::{DiagnosticSink, NoopSink};
use crate::config::{BaseUrl, Credentials, OneheartConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the One Heart API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - HTTP Basic auth with the client id and secret
/// - Query-string parameters for GET, form-encoded bodies otherwise
/// - The configured request timeout
/// - Debug dumps to the diagnostic sink when debug mode is on
///
/// Status codes are not interpreted and nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so concurrent
/// requests need no locking.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL resource paths are appended to.
    base_url: BaseUrl,
    /// Basic auth credentials.
    credentials: Credentials,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Whether request/response dumps are sent to the sink.
    debug: bool,
    /// Receiver for dumps and warnings.
    sink: Arc<dyn DiagnosticSink>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use oneheart_api::clients::{HttpClient, NoopSink};
    /// use oneheart_api::OneheartConfig;
    /// use std::sync::Arc;
    ///
    /// let config = OneheartConfig::builder()
    ///     .client_id("id")
    ///     .client_secret("secret")
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config, Arc::new(NoopSink)).unwrap();
    /// assert_eq!(client.base_url().as_ref(), "http://www.oneheart.fr/api/");
    /// ```
    pub fn new(config: &OneheartConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self, HttpError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Oneheart API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(HttpError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            credentials: config.credentials().clone(),
            default_headers,
            debug: config.debug(),
            sink,
        })
    }

    /// Creates a client with the default no-op sink.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::new`].
    pub fn with_defaults(config: &OneheartConfig) -> Result<Self, HttpError> {
        Self::new(config, Arc::new(NoopSink))
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns whether debug dumps are enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the diagnostic sink.
    #[must_use]
    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    /// Sends one request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for connection, TLS, and timeout failures.
    /// Non-2xx responses are returned as `Ok`.
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.base_url.join(&request.path);

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending request to One Heart API");
        if self.debug {
            self.sink.request(&url, request);
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = req_builder.basic_auth(
            self.credentials.client_id(),
            Some(self.credentials.client_secret().as_ref()),
        );

        if !request.query.is_empty() {
            req_builder = req_builder.query(request.query.as_pairs());
        }

        if request.http_method.sends_body() {
            req_builder = req_builder.form(request.params.as_pairs());
        } else if !request.params.is_empty() {
            req_builder = req_builder.query(request.params.as_pairs());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let body = res.bytes().await?.to_vec();

        tracing::debug!(status = code, path = %request.path, "Received response from One Heart API");
        if self.debug {
            self.sink.response(code, &body);
        }

        Ok(HttpResponse::new(code, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> OneheartConfig {
        OneheartConfig::builder()
            .client_id("test-id")
            .client_secret("test-secret")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_config_base_url() {
        let client = HttpClient::with_defaults(&create_test_config()).unwrap();
        assert_eq!(client.base_url().as_ref(), "http://www.oneheart.fr/api/");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::with_defaults(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Oneheart API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = OneheartConfig::builder()
            .client_id("test-id")
            .client_secret("test-secret")
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::with_defaults(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::with_defaults(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_debug_is_off_by_default() {
        let client = HttpClient::with_defaults(&create_test_config()).unwrap();
        assert!(!client.debug());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
