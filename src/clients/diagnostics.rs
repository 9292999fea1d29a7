//! Diagnostic sinks.
//!
//! A [`DiagnosticSink`] receives debug dumps of outgoing requests and raw
//! response bodies (only when the client runs in debug mode) and envelope
//! warnings (always). The default sink discards everything.

use std::fmt;

use crate::clients::HttpRequest;

/// Receiver for request/response dumps and envelope warnings.
///
/// Implementations must be cheap and must not panic; they run inline on the
/// request path.
///
/// # Example
///
/// ```rust
/// use oneheart_api::clients::{DiagnosticSink, HttpRequest};
/// use std::sync::Mutex;
///
/// #[derive(Debug, Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl DiagnosticSink for Collect {
///     fn warning(&self, message: &str) {
///         self.0.lock().unwrap().push(message.to_string());
///     }
/// }
///
/// let sink = Collect::default();
/// sink.warning("partial data");
/// assert_eq!(sink.0.lock().unwrap().len(), 1);
/// ```
pub trait DiagnosticSink: Send + Sync + fmt::Debug {
    /// Called before a request is sent, in debug mode only.
    fn request(&self, url: &str, request: &HttpRequest) {
        let _ = (url, request);
    }

    /// Called with the raw body once a response arrives, in debug mode only.
    fn response(&self, status: u16, body: &[u8]) {
        let _ = (status, body);
    }

    /// Called whenever a response envelope carries a warning.
    fn warning(&self, message: &str) {
        let _ = message;
    }
}

/// A sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {}

/// A sink that forwards debug dumps to `tracing`.
///
/// Dumps are emitted at `debug` level under the `oneheart_api::debug`
/// target. Warnings are not repeated here: the client already logs them at
/// `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn request(&self, url: &str, request: &HttpRequest) {
        tracing::debug!(
            target: "oneheart_api::debug",
            method = %request.http_method,
            url,
            query = %request.query.to_urlencoded(),
            params = %request.params.to_urlencoded(),
            "outgoing request"
        );
    }

    fn response(&self, status: u16, body: &[u8]) {
        tracing::debug!(
            target: "oneheart_api::debug",
            status,
            body = %String::from_utf8_lossy(body),
            "raw response"
        );
    }
}
