//! Ordered request parameters.
//!
//! [`Params`] keeps parameters in insertion order so the wire format is
//! reproducible, and refuses to let a key overwrite an earlier one.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;

/// An ordered set of string parameters with unique keys.
///
/// # Example
///
/// ```rust
/// use oneheart_api::clients::Params;
///
/// let mut params = Params::new();
/// params.insert("offset", "0").unwrap();
/// params.insert("max", "10").unwrap();
///
/// assert_eq!(params.get("max"), Some("10"));
/// assert!(params.insert("max", "20").is_err());
/// assert_eq!(params.to_urlencoded(), "offset=0&max=10");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyParameter`] for an empty key and
    /// [`ConfigError::DuplicateParameter`] if the key is already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyParameter);
        }
        if self.contains_key(&key) {
            return Err(ConfigError::DuplicateParameter { key });
        }
        self.0.push((key, value.into()));
        Ok(())
    }

    /// Builds a parameter set from key/value pairs, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first empty or duplicated key.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.insert(key, value)?;
        }
        Ok(params)
    }

    /// Flattens a serializable struct or map into parameters.
    ///
    /// Strings are kept as-is, numbers and booleans are stringified,
    /// `null` values are skipped and arrays of scalars are comma-joined.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedPayload`] if the value is not an
    /// object or contains nested objects.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oneheart_api::clients::Params;
    /// use serde_json::json;
    ///
    /// let params = Params::from_serialize(&json!({
    ///     "name": "Test",
    ///     "latitude": 51.5130836,
    ///     "keywords": ["key", "word"],
    ///     "label2": null,
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(params.get("keywords"), Some("key,word"));
    /// assert_eq!(params.get("latitude"), Some("51.5130836"));
    /// assert!(!params.contains_key("label2"));
    /// ```
    pub fn from_serialize<T: Serialize>(payload: &T) -> Result<Self, ConfigError> {
        let value =
            serde_json::to_value(payload).map_err(|e| ConfigError::UnsupportedPayload {
                reason: e.to_string(),
            })?;

        let Value::Object(map) = value else {
            return Err(ConfigError::UnsupportedPayload {
                reason: "payload must serialize to an object".to_string(),
            });
        };

        let mut params = Self::new();
        for (key, val) in map {
            let rendered = match val {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(items) => items
                    .iter()
                    .map(|item| scalar_to_string(&key, item))
                    .collect::<Result<Vec<_>, _>>()?
                    .join(","),
                Value::Object(_) => {
                    return Err(ConfigError::UnsupportedPayload {
                        reason: format!("field '{key}' is a nested object"),
                    })
                }
            };
            params.insert(key, rendered)?;
        }
        Ok(params)
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Returns the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the parameters as a percent-encoded query string.
    #[must_use]
    pub fn to_urlencoded(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ConfigError::UnsupportedPayload {
            reason: format!("field '{key}' contains a non-scalar array item"),
        }),
    }
}
