//! Response envelope codec.
//!
//! The platform wraps every payload in a JSON envelope. Two incompatible
//! shapes exist across API versions:
//!
//! | Shape                          | Flag      | Payload |
//! |--------------------------------|-----------|---------|
//! | [`EnvelopeShape::SuccessData`] | `success` | `data`  |
//! | [`EnvelopeShape::StatusDatas`] | `status`  | `datas` |
//!
//! Both carry an `error` message on failure and an optional `warning`.
//! The shape is fixed per API version and never guessed from the body.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::rest::{ApiError, MalformedResponseError};

const UNKNOWN_ERROR: &str = "request failed without an error message";

/// The envelope layout a deployment answers with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvelopeShape {
    /// `{ "status": bool, "datas": ..., "error": "..." }`
    StatusDatas,
    /// `{ "success": bool, "data": ..., "error": "...", "warning": "..." }`
    SuccessData,
}

impl EnvelopeShape {
    /// Name of the success flag field.
    #[must_use]
    pub const fn flag_field(self) -> &'static str {
        match self {
            Self::StatusDatas => "status",
            Self::SuccessData => "success",
        }
    }

    /// Name of the payload field.
    #[must_use]
    pub const fn data_field(self) -> &'static str {
        match self {
            Self::StatusDatas => "datas",
            Self::SuccessData => "data",
        }
    }

    /// Decodes a raw response body into a normalized [`ApiResult`].
    ///
    /// # Errors
    ///
    /// Returns [`MalformedResponseError`] if the body is not JSON, not an
    /// object, or lacks a boolean flag field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oneheart_api::EnvelopeShape;
    /// use serde_json::json;
    ///
    /// let result = EnvelopeShape::StatusDatas
    ///     .decode(br#"{"status":true,"datas":[{"id":1}]}"#)
    ///     .unwrap();
    ///
    /// assert!(result.ok);
    /// assert_eq!(result.data, Some(json!([{"id": 1}])));
    /// assert!(result.error.is_none());
    /// ```
    pub fn decode(self, body: &[u8]) -> Result<ApiResult, MalformedResponseError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| MalformedResponseError::InvalidJson {
                reason: e.to_string(),
            })?;

        let Value::Object(mut envelope) = value else {
            return Err(MalformedResponseError::NotAnObject);
        };

        let flag = self.flag_field();
        let ok = match envelope.get(flag) {
            Some(Value::Bool(ok)) => *ok,
            Some(_) => {
                return Err(MalformedResponseError::InvalidField {
                    field: flag,
                    expected: "a boolean",
                })
            }
            None => return Err(MalformedResponseError::MissingField { field: flag }),
        };

        let warning = take_message(&mut envelope, "warning");

        if !ok {
            let error = take_message(&mut envelope, "error").unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            return Ok(ApiResult {
                ok: false,
                data: None,
                error: Some(error),
                warning,
            });
        }

        let data = match envelope.remove(self.data_field()) {
            None | Some(Value::Null) => None,
            Some(data) => Some(data),
        };

        Ok(ApiResult {
            ok: true,
            data,
            error: None,
            warning,
        })
    }
}

/// A normalized envelope.
///
/// `ok == false` always comes with an `error` message and no `data`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResult<T = Value> {
    /// Whether the platform reported success.
    pub ok: bool,
    /// The payload, on success.
    pub data: Option<T>,
    /// The failure message, on failure.
    pub error: Option<String>,
    /// A non-fatal warning, independent of success.
    pub warning: Option<String>,
}

impl ApiResult {
    /// Converts the envelope into the payload or an [`ApiError`].
    ///
    /// A missing payload is deserialized from `null`, so `Option<T>` and
    /// [`Value`] accept it while collections reject it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the envelope's message when
    /// `ok` is `false`, or [`ApiError::Malformed`] if the payload does not
    /// match `T`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.ok {
            return Err(ApiError::Rejected {
                message: self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        serde_json::from_value(self.data.unwrap_or(Value::Null)).map_err(|e| {
            MalformedResponseError::UnexpectedPayload {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Removes a message field, stringifying non-string values.
fn take_message(envelope: &mut Map<String, Value>, field: &str) -> Option<String> {
    match envelope.remove(field)? {
        Value::Null => None,
        Value::String(message) => Some(message),
        other => Some(other.to_string()),
    }
}
