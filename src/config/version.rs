//! One Heart API version definitions.
//!
//! This module provides the [`ApiVersion`] enum. A version fixes three
//! things at construction time: the base URL, the response envelope shape,
//! and the path of the authenticated-user endpoint. None of these are
//! negotiated at runtime.

use crate::config::BaseUrl;
use crate::error::ConfigError;
use crate::rest::EnvelopeShape;
use std::fmt;
use std::str::FromStr;

const V1_BASE_URL: &str = "http://www.oneheart.fr/api/";
const BETA_BASE_URL: &str = "http://www.oneheartcommunication.com/api-beta/";

/// One Heart API version.
///
/// # Example
///
/// ```rust
/// use oneheart_api::{ApiVersion, EnvelopeShape};
///
/// let version: ApiVersion = "beta".parse().unwrap();
/// assert_eq!(version, ApiVersion::Beta);
/// assert_eq!(version.envelope(), EnvelopeShape::StatusDatas);
/// assert_eq!(version.me_path(), "users/me");
///
/// assert_eq!(ApiVersion::latest().to_string(), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The `api/` endpoint, answering with `success`/`data` envelopes.
    V1,
    /// The `api-beta/` endpoint, answering with `status`/`datas` envelopes.
    Beta,
    /// Any other deployment, described explicitly.
    Custom {
        /// Base URL resource paths are appended to.
        base_url: BaseUrl,
        /// Envelope shape the deployment answers with.
        envelope: EnvelopeShape,
    },
}

impl ApiVersion {
    /// Returns the version new clients target by default.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns the default base URL for this version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] only if a built-in URL
    /// constant is malformed.
    pub fn base_url(&self) -> Result<BaseUrl, ConfigError> {
        match self {
            Self::V1 => BaseUrl::new(V1_BASE_URL),
            Self::Beta => BaseUrl::new(BETA_BASE_URL),
            Self::Custom { base_url, .. } => Ok(base_url.clone()),
        }
    }

    /// Returns the envelope shape responses of this version use.
    #[must_use]
    pub const fn envelope(&self) -> EnvelopeShape {
        match self {
            Self::V1 => EnvelopeShape::SuccessData,
            Self::Beta => EnvelopeShape::StatusDatas,
            Self::Custom { envelope, .. } => *envelope,
        }
    }

    /// Returns the path of the endpoint describing the token's owner.
    #[must_use]
    pub const fn me_path(&self) -> &'static str {
        match self {
            Self::V1 => "me",
            Self::Beta | Self::Custom { .. } => "users/me",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::Beta => f.write_str("beta"),
            Self::Custom { base_url, .. } => write!(f, "custom({base_url})"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "api" => Ok(Self::V1),
            "beta" | "api-beta" => Ok(Self::Beta),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_v1() {
        assert_eq!(ApiVersion::latest(), ApiVersion::V1);
    }

    #[test]
    fn test_builtin_base_urls_are_valid() {
        assert_eq!(
            ApiVersion::V1.base_url().unwrap().as_ref(),
            "http://www.oneheart.fr/api/"
        );
        assert_eq!(
            ApiVersion::Beta.base_url().unwrap().as_ref(),
            "http://www.oneheartcommunication.com/api-beta/"
        );
    }

    #[test]
    fn test_envelope_shape_per_version() {
        assert_eq!(ApiVersion::V1.envelope(), EnvelopeShape::SuccessData);
        assert_eq!(ApiVersion::Beta.envelope(), EnvelopeShape::StatusDatas);
    }

    #[test]
    fn test_me_path_per_version() {
        assert_eq!(ApiVersion::V1.me_path(), "me");
        assert_eq!(ApiVersion::Beta.me_path(), "users/me");
    }

    #[test]
    fn test_custom_version_uses_given_values() {
        let version = ApiVersion::Custom {
            base_url: BaseUrl::new("http://localhost:9000/api").unwrap(),
            envelope: EnvelopeShape::StatusDatas,
        };
        assert_eq!(
            version.base_url().unwrap().as_ref(),
            "http://localhost:9000/api/"
        );
        assert_eq!(version.envelope(), EnvelopeShape::StatusDatas);
        assert_eq!(version.to_string(), "custom(http://localhost:9000/api/)");
    }

    #[test]
    fn test_parse_versions() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("BETA".parse::<ApiVersion>().unwrap(), ApiVersion::Beta);
        assert_eq!(" api-beta ".parse::<ApiVersion>().unwrap(), ApiVersion::Beta);
    }

    #[test]
    fn test_parse_rejects_unknown_version() {
        let result = "v9".parse::<ApiVersion>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { version }) if version == "v9"
        ));
    }

    #[test]
    fn test_display_round_trips_builtin_versions() {
        for version in [ApiVersion::V1, ApiVersion::Beta] {
            assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
        }
    }
}
