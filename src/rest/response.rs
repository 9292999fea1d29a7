//! Response wrapper for resource operations.
//!
//! This module provides [`ResourceResponse<T>`], which pairs decoded data
//! with the envelope's optional warning. It implements `Deref` for
//! ergonomic access to the inner data:
//!
//! ```rust,ignore
//! let spots: ResourceResponse<Vec<Spot>> = client.spots().summary(&options).await?;
//!
//! for spot in spots.iter() {
//!     println!("#{}: {}", spot.id, spot.name);
//! }
//!
//! if let Some(warning) = spots.warning() {
//!     eprintln!("platform warning: {warning}");
//! }
//! ```

use std::ops::{Deref, DerefMut};

/// Decoded data plus the envelope's non-fatal warning.
///
/// # Example
///
/// ```rust
/// use oneheart_api::ResourceResponse;
///
/// let response = ResourceResponse::new(vec![1, 2, 3], Some("partial".to_string()));
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.warning(), Some("partial"));
/// assert_eq!(response.into_inner(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResponse<T> {
    data: T,
    warning: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new response.
    #[must_use]
    pub const fn new(data: T, warning: Option<String>) -> Self {
        Self { data, warning }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the response and returns the data and the warning.
    #[must_use]
    pub fn into_parts(self) -> (T, Option<String>) {
        (self.data, self.warning)
    }

    /// Returns the warning the platform attached, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Returns `true` if the platform attached a warning.
    #[must_use]
    pub const fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Transforms the inner data, keeping the warning.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResourceResponse<U> {
        ResourceResponse {
            data: f(self.data),
            warning: self.warning,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
