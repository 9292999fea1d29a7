//! Resource layer for the One Heart API.
//!
//! This module turns raw transport calls into typed results:
//!
//! - **[`EnvelopeShape`]**: decodes the `status`/`datas` or `success`/`data`
//!   envelope into an [`ApiResult`]
//! - **[`request`]**: pure builders for summary, single, submit and action
//!   requests
//! - **[`ResourceModule`]**: the generic operations of one resource
//! - **[`ResourceResponse<T>`]**: decoded data plus the envelope's warning
//! - **[`ApiError`]**: the single error channel of every operation
//! - **[`resources`]**: users, videos and insights specializations
//!
//! # Example
//!
//! ```rust,ignore
//! use oneheart_api::rest::{ApiError, SummaryOptions};
//! use serde_json::Value;
//!
//! let options = SummaryOptions::new().offset(10).max(10).sort("-id");
//!
//! match client.events().summary::<Vec<Value>>(&options).await {
//!     Ok(events) => println!("{} events", events.len()),
//!     Err(ApiError::Rejected { message }) => eprintln!("rejected: {message}"),
//!     Err(e) => eprintln!("failed: {e}"),
//! }
//! ```

mod envelope;
mod errors;
mod resource;
mod response;

pub mod request;
pub mod resources;

pub use envelope::{ApiResult, EnvelopeShape};
pub use errors::{ApiError, MalformedResponseError};
pub use request::{FieldSelection, SummaryOptions};
pub use resource::{Entity, ResourceModule};
pub use response::ResourceResponse;
