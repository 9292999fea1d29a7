//! HTTP response types for the One Heart API SDK.
//!
//! An [`HttpResponse`] is the raw result of one round trip. The status code
//! and body are kept uninterpreted; decoding is the envelope codec's job.

/// A raw HTTP response from the One Heart API.
///
/// # Example
///
/// ```rust
/// use oneheart_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(502, b"<html>".to_vec());
/// assert_eq!(response.code, 502);
/// assert_eq!(response.body, b"<html>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, body: Vec<u8>) -> Self {
        Self { code, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_status_and_body_verbatim() {
        let response = HttpResponse::new(404, vec![b'o', b'k', 0xFF]);
        assert_eq!(response.code, 404);
        assert_eq!(response.body, vec![b'o', b'k', 0xFF]);
    }
}
