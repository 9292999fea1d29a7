//! The videos resource: the generic operations plus `watch`.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, HttpRequest};
use crate::rest::request::entry_path;
use crate::rest::{ApiError, ResourceModule, ResourceResponse};

/// The `videos` resource.
#[derive(Clone, Debug)]
pub struct Videos {
    module: ResourceModule,
}

impl Videos {
    /// Wraps a module named `videos`.
    #[must_use]
    pub const fn new(module: ResourceModule) -> Self {
        Self { module }
    }

    /// Requests stream URLs for video `id`: `POST videos/id/watch`, empty body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an empty id, otherwise the errors of
    /// [`ResourceModule::execute`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let streams = client.videos().watch("17").await?;
    /// if let Some(url) = streams.get("mp4_h264_aac_hq") {
    ///     println!("{url}");
    /// }
    /// ```
    pub async fn watch(&self, id: &str) -> Result<ResourceResponse<StreamUrls>, ApiError> {
        let path = format!("{}/watch", entry_path(self.module.name(), id)?);
        let request = HttpRequest::builder(HttpMethod::Post, path).build()?;
        self.module.execute(&request).await
    }
}

impl Deref for Videos {
    type Target = ResourceModule;

    fn deref(&self) -> &Self::Target {
        &self.module
    }
}

/// Stream URLs keyed by format, e.g. `mp4_h264_aac_hq`.
///
/// Formats keep the order the platform sent them in. A format whose URL is
/// `null` is not available and is left out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct StreamUrls(Vec<(String, String)>);

impl StreamUrls {
    /// Returns the URL for a format.
    #[must_use]
    pub fn get(&self, format: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, url)| url.as_str())
    }

    /// Returns the available format keys, in platform order.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the number of formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no stream is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the value and returns the `(format, url)` pairs.
    #[must_use]
    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }
}

impl TryFrom<Map<String, Value>> for StreamUrls {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut streams = Vec::with_capacity(map.len());
        for (format, url) in map {
            match url {
                Value::Null => {}
                Value::String(url) => streams.push((format, url)),
                other => {
                    return Err(format!("stream '{format}' has a non-string URL: {other}"));
                }
            }
        }
        Ok(Self(streams))
    }
}

impl From<StreamUrls> for Map<String, Value> {
    fn from(streams: StreamUrls) -> Self {
        streams
            .0
            .into_iter()
            .map(|(format, url)| (format, Value::String(url)))
            .collect()
    }
}
