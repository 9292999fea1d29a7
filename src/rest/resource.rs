//! The generic resource module.
//!
//! Every collection exposed by the platform (users, spots, videos, news,
//! events, actions) supports the same four operations. A [`ResourceModule`]
//! is constructed with its resource name and the shared transport, and each
//! operation follows the same pipeline:
//!
//! 1. build the request ([`crate::rest::request`]), failing before any
//!    network call on conflicting parameters
//! 2. send it through the [`HttpClient`]
//! 3. decode the envelope with the configured [`EnvelopeShape`]
//! 4. deliver any warning to the diagnostic sink
//! 5. return the payload, or [`ApiError::Rejected`] with the envelope's
//!    message
//!
//! # Example
//!
//! ```rust,ignore
//! use oneheart_api::rest::SummaryOptions;
//! use serde_json::Value;
//!
//! let spots = client
//!     .spots()
//!     .summary::<Vec<Value>>(&SummaryOptions::new().max(20).filter("theme", "Action sociale"))
//!     .await?;
//!
//! let spot = client.spots().single::<Value>("42", &["name", "latitude"]).await?;
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpRequest, Params};
use crate::rest::request::{self, FieldSelection, SummaryOptions};
use crate::rest::{ApiError, EnvelopeShape, ResourceResponse};

/// Default entity type returned when the caller does not model one.
pub type Entity = serde_json::Value;

/// Summary, single, submit and action operations for one resource.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone, Debug)]
pub struct ResourceModule {
    name: &'static str,
    http: Arc<HttpClient>,
    envelope: EnvelopeShape,
}

// Verify ResourceModule is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceModule>();
};

impl ResourceModule {
    /// Creates a module for the named resource.
    #[must_use]
    pub const fn new(name: &'static str, http: Arc<HttpClient>, envelope: EnvelopeShape) -> Self {
        Self {
            name,
            http,
            envelope,
        }
    }

    /// Returns the resource name, which is also its path.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the envelope shape responses are decoded with.
    #[must_use]
    pub const fn envelope(&self) -> EnvelopeShape {
        self.envelope
    }

    /// Lists entries: `GET resource?offset=..&max=..`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for reserved or repeated filter keys,
    /// without sending anything. Otherwise see [`execute`](Self::execute).
    pub async fn summary<T: DeserializeOwned>(
        &self,
        options: &SummaryOptions,
    ) -> Result<ResourceResponse<T>, ApiError> {
        let request = request::summary(self.name, options)?;
        self.execute(&request).await
    }

    /// Fetches one entry: `GET resource/id`.
    ///
    /// An empty `fields` slice lets the platform pick its default fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an empty id. Otherwise see
    /// [`execute`](Self::execute).
    pub async fn single<T: DeserializeOwned>(
        &self,
        id: &str,
        fields: &[&str],
    ) -> Result<ResourceResponse<T>, ApiError> {
        let request = request::single(self.name, id, &FieldSelection::from(fields))?;
        self.execute(&request).await
    }

    /// Creates an entry: `POST resource?oauth_token=..` with `payload` as the
    /// form body.
    ///
    /// Build the payload with [`Params::try_from_pairs`] or
    /// [`Params::from_serialize`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an empty token. Otherwise see
    /// [`execute`](Self::execute).
    pub async fn submit<T: DeserializeOwned>(
        &self,
        payload: &Params,
        oauth_token: &str,
    ) -> Result<ResourceResponse<T>, ApiError> {
        let request = request::submit(self.name, payload, oauth_token)?;
        self.execute(&request).await
    }

    /// Triggers an action on an entry: `POST resource/id/action?oauth_token=..`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an empty id, action or token.
    /// Otherwise see [`execute`](Self::execute).
    pub async fn do_action<T: DeserializeOwned>(
        &self,
        id: &str,
        action_id: &str,
        oauth_token: &str,
    ) -> Result<ResourceResponse<T>, ApiError> {
        let request = request::action(self.name, id, action_id, oauth_token)?;
        self.execute(&request).await
    }

    /// Sends a prebuilt request and decodes its envelope.
    ///
    /// A warning in the envelope is passed to the diagnostic sink, logged at
    /// `warn` level and kept on the returned [`ResourceResponse`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] if the request could not be delivered
    /// - [`ApiError::Malformed`] if the body is not a valid envelope or the
    ///   payload does not match `T`
    /// - [`ApiError::Rejected`] if the envelope reports failure
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
    ) -> Result<ResourceResponse<T>, ApiError> {
        let response = self.http.request(request).await?;
        let result = self.envelope.decode(&response.body)?;

        let warning = result.warning.clone();
        if let Some(message) = &warning {
            tracing::warn!(
                resource = self.name,
                path = %request.path,
                warning = %message,
                "One Heart API returned a warning"
            );
            self.http.sink().warning(message);
        }

        if !result.ok {
            tracing::debug!(
                resource = self.name,
                path = %request.path,
                status = response.code,
                "One Heart API rejected the request"
            );
        }

        let data = result.into_data()?;
        Ok(ResourceResponse::new(data, warning))
    }
}
