//! # One Heart API Rust SDK
//!
//! A Rust SDK for the One Heart platform REST API: users, spots, videos,
//! news, events, actions and insights.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`OneheartConfig`] and [`OneheartConfigBuilder`]
//! - HTTP Basic authentication with a client id and secret
//! - One client for every API version, parameterized by [`ApiVersion`] and
//!   its [`EnvelopeShape`]
//! - Generic `summary`, `single`, `submit` and `do_action` operations on
//!   every resource, plus `users.me`, `users.donate`, `videos.watch` and
//!   `insights.get`
//! - A single typed error channel, [`ApiError`], and non-fatal warnings
//!   delivered alongside results
//! - Injectable diagnostics via [`clients::DiagnosticSink`]
//!
//! ## Quick Start
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
//!
//! ## Listing and Fetching
//!
//! ```rust,ignore
//! use oneheart_api::OneheartClient;
//! use oneheart_api::rest::SummaryOptions;
//! use serde_json::Value;
//!
//! let client = OneheartClient::new("my@public.key", "my_secret_key", false)?;
//!
//! let options = SummaryOptions::new()
//!     .max(20)
//!     .fields(["id", "name", "theme"])
//!     .filter("theme", "Action sociale");
//! let spots = client.spots().summary::<Vec<Value>>(&options).await?;
//!
//! let video = client.videos().single::<Value>("17", &["title"]).await?;
//! let streams = client.videos().watch("17").await?;
//! ```
//!
//! ## Submitting
//!
//! ```rust,ignore
//! use oneheart_api::clients::Params;
//! use serde_json::Value;
//!
//! let payload = Params::try_from_pairs([
//!     ("name", "Test"),
//!     ("theme", "Action sociale"),
//!     ("latitude", "51.5130836"),
//!     ("longitude", "-0.1353069"),
//! ])?;
//! let spot = client.spots().submit::<Value>(&payload, "oauth_token").await?;
//! ```
//!
//! ## Insights and Warnings
//!
//! ```rust,ignore
//! use oneheart_api::rest::resources::{AggregatedRows, InsightsQuery};
//!
//! let query = InsightsQuery::new("oauth_token")
//!     .types(["video:widget"])
//!     .fields(["analytics.users", "post.theme"])
//!     .group_by("post.theme");
//!
//! let rows = client.insights().get::<AggregatedRows>(&query).await?;
//! if let Some(warning) = rows.warning() {
//!     eprintln!("partial insights: {warning}");
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: conflicting or missing parameters are rejected
//!   before any network call
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::OneheartClient;
pub use config::{
    ApiVersion, BaseUrl, ClientSecret, Credentials, OneheartConfig, OneheartConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types at crate root
pub use clients::{
    DiagnosticSink, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopSink,
    Params, TracingSink,
};

// Re-export resource types at crate root
pub use rest::resources::{Amount, Donation, Donor, InsightsQuery, StreamUrls};
pub use rest::{
    ApiError, ApiResult, EnvelopeShape, FieldSelection, MalformedResponseError, ResourceModule,
    ResourceResponse, SummaryOptions,
};
