//! Request building for resource operations.
//!
//! These functions are pure: they turn a resource name and caller options
//! into an [`HttpRequest`] without touching the network, so every
//! parameter conflict is reported before anything is sent.
//!
//! | Operation  | Method | Path                       | Parameters                          |
//! |------------|--------|----------------------------|-------------------------------------|
//! | [`summary`]| GET    | `resource`                 | `offset`, `max`, `fields`?, `sort`?, filters |
//! | [`single`] | GET    | `resource/id`              | `fields`?                           |
//! | [`submit`] | POST   | `resource?oauth_token=...` | payload as body                     |
//! | [`action`] | POST   | `resource/id/action?oauth_token=...` | empty body                |
//!
//! # Example
//!
//! ```rust
//! use oneheart_api::rest::request::{self, SummaryOptions};
//!
//! let options = SummaryOptions::new()
//!     .max(10)
//!     .fields(["id", "name"])
//!     .sort("-name");
//!
//! let request = request::summary("spots", &options).unwrap();
//! assert_eq!(request.target(), "spots?offset=0&max=10&fields=id%2Cname&sort=-name");
//! ```

use std::borrow::Cow;

use crate::clients::{HttpMethod, HttpRequest, Params};
use crate::error::ConfigError;

/// Keys `summary` sets itself; filters may not use them.
pub const RESERVED_KEYS: &[&str] = &["offset", "max", "fields", "sort"];

/// Default `offset` for summaries.
pub const DEFAULT_OFFSET: u32 = 0;

/// Default `max` for summaries.
pub const DEFAULT_MAX: u32 = 10;

/// An ordered selection of field names, sent comma-joined.
///
/// Order is kept as given. Empty names and repeats are dropped.
///
/// # Example
///
/// ```rust
/// use oneheart_api::rest::request::FieldSelection;
///
/// let fields = FieldSelection::from(["username", "id", "username", ""]);
/// assert_eq!(fields.to_param().as_deref(), Some("username,id"));
/// assert!(FieldSelection::new().to_param().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection(Vec<String>);

impl FieldSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a field unless it is empty or already selected.
    pub fn push(&mut self, field: impl Into<String>) {
        let field = field.into();
        if !field.is_empty() && !self.0.contains(&field) {
            self.0.push(field);
        }
    }

    /// Returns `true` if no field is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the selected fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the comma-joined wire value, or `None` when empty.
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for field in iter {
            selection.push(field);
        }
        selection
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for FieldSelection {
    fn from(fields: [S; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldSelection {
    fn from(fields: Vec<S>) -> Self {
        fields.into_iter().collect()
    }
}

impl From<&[&str]> for FieldSelection {
    fn from(fields: &[&str]) -> Self {
        fields.iter().copied().collect()
    }
}

/// Options for a summary (list) request.
///
/// Defaults to `offset = 0`, `max = 10`, no fields, no sort, no filters.
/// The platform caps `max` at 50.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryOptions {
    offset: u32,
    max: u32,
    fields: FieldSelection,
    sort: Option<String>,
    filters: Vec<(String, String)>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            max: DEFAULT_MAX,
            fields: FieldSelection::new(),
            sort: None,
            filters: Vec::new(),
        }
    }
}

impl SummaryOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset of the first entry.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the maximum number of entries.
    #[must_use]
    pub const fn max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Sets the fields returned for each entry.
    #[must_use]
    pub fn fields(mut self, fields: impl Into<FieldSelection>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Sets the sort expression (e.g. `-id`, `name`). Empty means none.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        let sort = sort.into();
        self.sort = (!sort.is_empty()).then_some(sort);
        self
    }

    /// Adds a filter, sent as its own parameter after the built-in ones.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Returns the configured offset.
    #[must_use]
    pub const fn get_offset(&self) -> u32 {
        self.offset
    }

    /// Returns the configured maximum.
    #[must_use]
    pub const fn get_max(&self) -> u32 {
        self.max
    }
}

/// Builds a summary request: `GET resource`.
///
/// # Errors
///
/// Returns [`ConfigError::ReservedParameter`] if a filter uses one of
/// [`RESERVED_KEYS`], and [`ConfigError::DuplicateParameter`] if two
/// filters share a key.
pub fn summary(resource: &str, options: &SummaryOptions) -> Result<HttpRequest, ConfigError> {
    if let Some((key, _)) = options
        .filters
        .iter()
        .find(|(key, _)| RESERVED_KEYS.contains(&key.as_str()))
    {
        return Err(ConfigError::ReservedParameter { key: key.clone() });
    }

    let mut builder = HttpRequest::builder(HttpMethod::Get, resource)
        .param("offset", options.offset.to_string())
        .param("max", options.max.to_string())
        .param_opt("fields", options.fields.to_param())
        .param_opt("sort", options.sort.as_deref());

    for (key, value) in &options.filters {
        builder = builder.param(key.as_str(), value.as_str());
    }

    builder.build()
}

/// Builds a single-entry request: `GET resource/id`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] for an empty id.
pub fn single(resource: &str, id: &str, fields: &FieldSelection) -> Result<HttpRequest, ConfigError> {
    HttpRequest::builder(HttpMethod::Get, entry_path(resource, id)?)
        .param_opt("fields", fields.to_param())
        .build()
}

/// Builds a submit request: `POST resource?oauth_token=...` with the payload
/// as the form body.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] for an empty token.
pub fn submit(resource: &str, payload: &Params, oauth_token: &str) -> Result<HttpRequest, ConfigError> {
    HttpRequest::builder(HttpMethod::Post, resource)
        .query_param("oauth_token", required(oauth_token, "oauth_token")?)
        .params(payload)
        .build()
}

/// Builds an action request: `POST resource/id/action?oauth_token=...` with
/// an empty body.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] for an empty id, action id
/// or token.
pub fn action(
    resource: &str,
    id: &str,
    action_id: &str,
    oauth_token: &str,
) -> Result<HttpRequest, ConfigError> {
    let path = format!(
        "{}/{}",
        entry_path(resource, id)?,
        segment(required(action_id, "action_id")?)
    );

    HttpRequest::builder(HttpMethod::Post, path)
        .query_param("oauth_token", required(oauth_token, "oauth_token")?)
        .build()
}

/// Returns `resource/id` with the id percent-encoded.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequiredField`] for an empty id.
pub fn entry_path(resource: &str, id: &str) -> Result<String, ConfigError> {
    Ok(format!("{resource}/{}", segment(required(id, "id")?)))
}

pub(crate) fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::MissingRequiredField { field })
    } else {
        Ok(value)
    }
}

fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_defaults_only_offset_and_max() {
        let request = summary("users", &SummaryOptions::new()).unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "users");
        assert_eq!(
            request.params.iter().collect::<Vec<_>>(),
            vec![("offset", "0"), ("max", "10")]
        );
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_summary_all_options_in_order() {
        let options = SummaryOptions::new()
            .offset(20)
            .max(5)
            .fields(["name", "id"])
            .sort("-id")
            .filter("theme", "Action sociale")
            .filter("label1", "Recyclage");

        let request = summary("spots", &options).unwrap();

        assert_eq!(
            request.params.iter().collect::<Vec<_>>(),
            vec![
                ("offset", "20"),
                ("max", "5"),
                ("fields", "name,id"),
                ("sort", "-id"),
                ("theme", "Action sociale"),
                ("label1", "Recyclage"),
            ]
        );
    }

    #[test]
    fn test_summary_empty_fields_and_sort_are_omitted() {
        let options = SummaryOptions::new()
            .fields(Vec::<String>::new())
            .sort("");
        let request = summary("videos", &options).unwrap();

        assert!(!request.params.contains_key("fields"));
        assert!(!request.params.contains_key("sort"));
    }

    #[test]
    fn test_summary_rejects_reserved_filter_keys() {
        for key in RESERVED_KEYS {
            let options = SummaryOptions::new().filter(*key, "5");
            let result = summary("spots", &options);
            assert!(
                matches!(&result, Err(ConfigError::ReservedParameter { key: k }) if k == key),
                "{key} should be reserved"
            );
        }
    }

    #[test]
    fn test_summary_rejects_duplicate_filters() {
        let options = SummaryOptions::new()
            .filter("theme", "a")
            .filter("theme", "b");

        assert!(matches!(
            summary("spots", &options),
            Err(ConfigError::DuplicateParameter { key }) if key == "theme"
        ));
    }

    #[test]
    fn test_single_path_with_and_without_fields() {
        let plain = single("users", "211", &FieldSelection::new()).unwrap();
        let with_fields = single("users", "211", &FieldSelection::from(["username"])).unwrap();

        assert_eq!(plain.path, "users/211");
        assert_eq!(with_fields.path, "users/211");
        assert!(plain.params.is_empty());
        assert_eq!(with_fields.params.get("fields"), Some("username"));
    }

    #[test]
    fn test_single_encodes_id_segment() {
        let request = single("news", "a b/c", &FieldSelection::new()).unwrap();
        assert_eq!(request.path, "news/a%20b%2Fc");
    }

    #[test]
    fn test_single_rejects_empty_id() {
        assert!(matches!(
            single("news", "", &FieldSelection::new()),
            Err(ConfigError::MissingRequiredField { field: "id" })
        ));
    }

    #[test]
    fn test_submit_puts_token_in_url_and_payload_in_body() {
        let payload = Params::try_from_pairs([("name", "Test"), ("theme", "Action sociale")]).unwrap();
        let request = submit("spots", &payload, "71d3403myz").unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.target(), "spots?oauth_token=71d3403myz");
        assert_eq!(request.params, payload);
    }

    #[test]
    fn test_submit_requires_token() {
        assert!(matches!(
            submit("spots", &Params::new(), ""),
            Err(ConfigError::MissingRequiredField {
                field: "oauth_token"
            })
        ));
    }

    #[test]
    fn test_action_path_and_empty_body() {
        let request = action("events", "12", "participate", "tok").unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "events/12/participate");
        assert_eq!(request.target(), "events/12/participate?oauth_token=tok");
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_action_requires_action_id() {
        assert!(matches!(
            action("events", "12", "", "tok"),
            Err(ConfigError::MissingRequiredField { field: "action_id" })
        ));
    }

    #[test]
    fn test_field_selection_keeps_caller_order() {
        let fields: FieldSelection = vec!["z", "a", "m"].into();
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }
}
