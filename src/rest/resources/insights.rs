//! The insights resource: aggregated platform statistics.

use serde::de::DeserializeOwned;

use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ConfigError;
use crate::rest::request::{required, FieldSelection};
use crate::rest::{ApiError, ResourceModule, ResourceResponse};

/// Path insights are fetched from.
pub const INSIGHTS_PATH: &str = "insights/";

/// Aggregated rows as returned by the platform.
pub type AggregatedRows = serde_json::Value;

/// Parameters of an insights query.
///
/// `types`, `fields` and `group_by` are required; `sort` is sent only when
/// set.
///
/// # Example
///
/// ```rust
/// use oneheart_api::rest::resources::InsightsQuery;
///
/// let query = InsightsQuery::new("oauth_token")
///     .types(["video:widget"])
///     .fields(["analytics.users", "post.theme"])
///     .group_by("post.theme");
///
/// let request = query.to_request().unwrap();
/// assert_eq!(request.path, "insights/");
/// assert_eq!(request.params.get("fields"), Some("analytics.users,post.theme"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InsightsQuery {
    oauth_token: String,
    types: FieldSelection,
    fields: FieldSelection,
    group_by: Option<String>,
    sort: Option<String>,
}

impl InsightsQuery {
    /// Starts a query authorized by `oauth_token`.
    #[must_use]
    pub fn new(oauth_token: impl Into<String>) -> Self {
        Self {
            oauth_token: oauth_token.into(),
            ..Self::default()
        }
    }

    /// Sets the content types to aggregate, e.g. `video:widget`.
    #[must_use]
    pub fn types(mut self, types: impl Into<FieldSelection>) -> Self {
        self.types = types.into();
        self
    }

    /// Sets the fields to return.
    #[must_use]
    pub fn fields(mut self, fields: impl Into<FieldSelection>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Sets the field rows are grouped by.
    #[must_use]
    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        let group_by = group_by.into();
        self.group_by = (!group_by.is_empty()).then_some(group_by);
        self
    }

    /// Sets the sort expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        let sort = sort.into();
        self.sort = (!sort.is_empty()).then_some(sort);
        self
    }

    /// Builds the GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the token, types,
    /// fields or `group_by` is missing.
    pub fn to_request(&self) -> Result<HttpRequest, ConfigError> {
        let oauth_token = required(&self.oauth_token, "oauth_token")?;
        let types = self
            .types
            .to_param()
            .ok_or(ConfigError::MissingRequiredField { field: "types" })?;
        let fields = self
            .fields
            .to_param()
            .ok_or(ConfigError::MissingRequiredField { field: "fields" })?;
        let group_by = self
            .group_by
            .as_deref()
            .ok_or(ConfigError::MissingRequiredField { field: "group_by" })?;

        HttpRequest::builder(HttpMethod::Get, INSIGHTS_PATH)
            .param("oauth_token", oauth_token)
            .param("types", types)
            .param("fields", fields)
            .param("group_by", group_by)
            .param_opt("sort", self.sort.as_deref())
            .build()
    }
}

/// The `insights` resource.
#[derive(Clone, Debug)]
pub struct Insights {
    module: ResourceModule,
}

impl Insights {
    /// Wraps a module named `insights`.
    #[must_use]
    pub const fn new(module: ResourceModule) -> Self {
        Self { module }
    }

    /// Runs an insights query.
    ///
    /// An envelope warning does not fail the call: it is delivered to the
    /// diagnostic sink and kept on the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] without sending anything if the query is
    /// incomplete, otherwise the errors of [`ResourceModule::execute`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        query: &InsightsQuery,
    ) -> Result<ResourceResponse<T>, ApiError> {
        let request = query.to_request()?;
        self.module.execute(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> InsightsQuery {
        InsightsQuery::new("tok")
            .types(["video:widget"])
            .fields(["analytics.users", "post.theme"])
            .group_by("post.theme")
    }

    #[test]
    fn test_request_parameters_in_order() {
        let request = complete().to_request().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(
            request.params.iter().collect::<Vec<_>>(),
            vec![
                ("oauth_token", "tok"),
                ("types", "video:widget"),
                ("fields", "analytics.users,post.theme"),
                ("group_by", "post.theme"),
            ]
        );
    }

    #[test]
    fn test_sort_only_when_given() {
        let request = complete().sort("-analytics.users").to_request().unwrap();
        assert_eq!(request.params.get("sort"), Some("-analytics.users"));
    }

    #[test]
    fn test_missing_group_by_is_rejected() {
        let query = InsightsQuery::new("tok")
            .types(["video:widget"])
            .fields(["post.theme"]);

        assert_eq!(
            query.to_request(),
            Err(ConfigError::MissingRequiredField { field: "group_by" })
        );
    }

    #[test]
    fn test_empty_types_are_rejected() {
        let query = complete().types(Vec::<String>::new());
        assert_eq!(
            query.to_request(),
            Err(ConfigError::MissingRequiredField { field: "types" })
        );
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let query = InsightsQuery {
            oauth_token: String::new(),
            ..complete()
        };
        assert!(query.to_request().is_err());
    }
}
