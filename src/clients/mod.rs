//! HTTP transport for One Heart API communication.
//!
//! This module provides the foundational layer for making authenticated
//! requests to the One Heart API. It sends one request per call and returns
//! the raw response without interpreting it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client (Basic auth, timeout, debug dumps)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Params`]: Ordered parameters with unique keys
//! - [`DiagnosticSink`]: Injected receiver for debug dumps and warnings
//! - [`HttpError`]: Transport failures
//!
//! # Wire Format
//!
//! GET requests carry every parameter in the query string. POST, PUT and
//! DELETE requests carry `params` as an `application/x-www-form-urlencoded`
//! body, while `query` (e.g. `oauth_token`) stays in the URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use oneheart_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::with_defaults(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "spots")
//!     .param("offset", "0")
//!     .param("max", "10")
//!     .build()?;
//!
//! let response = client.request(&request).await?;
//! ```

mod diagnostics;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;

pub use diagnostics::{DiagnosticSink, NoopSink, TracingSink};
pub use errors::HttpError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use params::Params;
