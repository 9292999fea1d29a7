//! HTTP request types for the One Heart API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the One Heart API.

use std::fmt;

use crate::clients::Params;
use crate::error::ConfigError;

/// HTTP methods supported by the One Heart API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if parameters travel in a form-encoded body.
    ///
    /// GET requests carry their parameters in the query string instead.
    #[must_use]
    pub const fn sends_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the One Heart API.
///
/// `query` always travels in the URL. `params` travel in the URL for GET
/// and as an `application/x-www-form-urlencoded` body otherwise.
///
/// Requests are built fresh for every call and hold no shared state.
///
/// # Example
///
/// ```rust
/// use oneheart_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "spots")
///     .query_param("oauth_token", "abc")
///     .param("name", "Test")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.target(), "spots?oauth_token=abc");
/// assert_eq!(request.params.get("name"), Some("Test"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base URL.
    pub path: String,
    /// Parameters that always belong in the URL.
    pub query: Params,
    /// Method-dependent parameters (query string for GET, body otherwise).
    pub params: Params,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Renders the path plus every parameter that travels in the URL.
    #[must_use]
    pub fn target(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(self.query.to_urlencoded());
        }
        if !self.http_method.sends_body() && !self.params.is_empty() {
            parts.push(self.params.to_urlencoded());
        }

        if parts.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, parts.join("&"))
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Parameters are collected in order; conflicts are reported by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    params: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter that always travels in the URL.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a method-dependent parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a parameter only when a value is present.
    #[must_use]
    pub fn param_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Appends every entry of an existing parameter set.
    #[must_use]
    pub fn params(mut self, params: &Params) -> Self {
        self.params.extend(
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateParameter`] if a key is used twice,
    /// including across `query` and a GET request's `params`, and
    /// [`ConfigError::EmptyParameter`] for an empty key.
    pub fn build(self) -> Result<HttpRequest, ConfigError> {
        let query = Params::try_from_pairs(self.query)?;
        let params = Params::try_from_pairs(self.params)?;

        if !self.http_method.sends_body() {
            if let Some(key) = params.keys().find(|key| query.contains_key(key)) {
                return Err(ConfigError::DuplicateParameter {
                    key: key.to_string(),
                });
            }
        }

        Ok(HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_only_get_keeps_params_in_url() {
        assert!(!HttpMethod::Get.sends_body());
        assert!(HttpMethod::Post.sends_body());
        assert!(HttpMethod::Put.sends_body());
        assert!(HttpMethod::Delete.sends_body());
    }

    #[test]
    fn test_get_target_includes_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "spots")
            .param("offset", "0")
            .param("max", "10")
            .build()
            .unwrap();

        assert_eq!(request.target(), "spots?offset=0&max=10");
    }

    #[test]
    fn test_post_target_excludes_body_params() {
        let request = HttpRequest::builder(HttpMethod::Post, "videos/3/watch")
            .param("unused", "1")
            .build()
            .unwrap();

        assert_eq!(request.target(), "videos/3/watch");
    }

    #[test]
    fn test_delete_keeps_its_verb() {
        let request = HttpRequest::builder(HttpMethod::Delete, "spots/4")
            .build()
            .unwrap();
        assert_eq!(request.http_method, HttpMethod::Delete);
    }

    #[test]
    fn test_param_opt_skips_none() {
        let request = HttpRequest::builder(HttpMethod::Get, "insights/")
            .param_opt("sort", None::<String>)
            .param_opt("group_by", Some("post.theme"))
            .build()
            .unwrap();

        assert!(!request.params.contains_key("sort"));
        assert_eq!(request.params.get("group_by"), Some("post.theme"));
    }

    #[test]
    fn test_build_rejects_duplicate_params() {
        let result = HttpRequest::builder(HttpMethod::Get, "spots")
            .param("max", "10")
            .param("max", "5")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::DuplicateParameter { key }) if key == "max"
        ));
    }

    #[test]
    fn test_build_rejects_get_param_shadowing_query() {
        let result = HttpRequest::builder(HttpMethod::Get, "me")
            .query_param("oauth_token", "a")
            .param("oauth_token", "b")
            .build();

        assert!(matches!(result, Err(ConfigError::DuplicateParameter { .. })));
    }

    #[test]
    fn test_post_body_may_reuse_query_key() {
        let result = HttpRequest::builder(HttpMethod::Post, "spots")
            .query_param("oauth_token", "a")
            .param("oauth_token", "b")
            .build();

        assert!(result.is_ok());
    }
}
