//! The users resource: the generic operations plus `me` and `donate`.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, HttpRequest};
use crate::error::ConfigError;
use crate::rest::request::{entry_path, required, FieldSelection};
use crate::rest::{ApiError, ResourceModule, ResourceResponse};

/// The `users` resource.
///
/// Dereferences to [`ResourceModule`] for `summary`, `single`, `submit` and
/// `do_action`.
#[derive(Clone, Debug)]
pub struct Users {
    module: ResourceModule,
    me_path: &'static str,
}

impl Users {
    /// Wraps a module named `users`. `me_path` depends on the API version.
    #[must_use]
    pub const fn new(module: ResourceModule, me_path: &'static str) -> Self {
        Self { module, me_path }
    }

    /// Returns the path the authenticated user is fetched from.
    #[must_use]
    pub const fn me_path(&self) -> &'static str {
        self.me_path
    }

    /// Fetches the user the OAuth token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an empty token, otherwise the errors
    /// of [`ResourceModule::execute`].
    pub async fn me<T: DeserializeOwned>(
        &self,
        oauth_token: &str,
        fields: &[&str],
    ) -> Result<ResourceResponse<T>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.me_path)
            .param("oauth_token", required(oauth_token, "oauth_token")?)
            .param_opt("fields", FieldSelection::from(fields).to_param())
            .build()?;

        self.module.execute(&request).await
    }

    /// Generates a payment page URL for a donation to user `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an empty id, otherwise the errors of
    /// [`ResourceModule::execute`]. A response without a `url` is reported
    /// as [`ApiError::Malformed`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let donation = client.users().donate("40", &donation).await?;
    /// println!("Pay here: {}", donation.url);
    /// ```
    pub async fn donate(
        &self,
        id: &str,
        donation: &Donation,
    ) -> Result<ResourceResponse<DonationResponse>, ApiError> {
        let path = format!("{}/donate", entry_path(self.module.name(), id)?);
        let request = donation
            .to_params()
            .into_iter()
            .fold(HttpRequest::builder(HttpMethod::Post, path), |builder, (key, value)| {
                builder.param(key, value)
            })
            .build()?;

        self.module.execute(&request).await
    }
}

impl Deref for Users {
    type Target = ResourceModule;

    fn deref(&self) -> &Self::Target {
        &self.module
    }
}

/// Identity and postal address of a donor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    /// Donor's first name.
    pub first_name: String,
    /// Donor's last name.
    pub last_name: String,
    /// Donor's email address.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Postal code.
    pub zip_code: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
}

/// A donation amount, kept as the exact decimal text sent on the wire.
///
/// Whole amounts convert from unsigned integers. Fractional amounts are
/// parsed with [`Amount::decimal`], which accepts digits with an optional
/// `.` and fractional digits. The text is never reformatted, so `0.30`
/// stays `0.30`.
///
/// # Example
///
/// ```rust
/// use oneheart_api::rest::resources::Amount;
///
/// assert_eq!(Amount::from(2_u32).as_str(), "2");
/// assert_eq!(Amount::decimal("0.30").unwrap().as_str(), "0.30");
/// assert!(Amount::decimal("1e3").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Amount(String);

impl Amount {
    /// Parses a decimal amount such as `12` or `12.50`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAmount`] for anything other than ASCII
    /// digits with at most one `.` between digit runs.
    pub fn decimal(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (value.as_str(), None),
        };
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if is_digits(whole) && fraction.map_or(true, is_digits) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidAmount { value })
        }
    }

    /// Returns the amount as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for Amount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decimal(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A donation request.
///
/// # Example
///
/// ```rust
/// use oneheart_api::rest::resources::{Donation, Donor};
///
/// let donor = Donor {
///     first_name: "Teddy".into(),
///     last_name: "Gandon".into(),
///     email: "teddy@example.com".into(),
///     address: "28 rue Jean Stas".into(),
///     zip_code: "1060".into(),
///     city: "Bruxelles".into(),
///     country: "Belgique".into(),
/// };
///
/// let donation = Donation::builder()
///     .donor(donor)
///     .amount(2_u32)
///     .currency("EUR")
///     .redirect_success("https://example.com/ok")
///     .redirect_fail("https://example.com/fail")
///     .redirect_cancel("https://example.com/cancel")
///     .monthly(true)
///     .build()
///     .unwrap();
///
/// assert!(donation.monthly());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Donation {
    donor: Donor,
    amount: Amount,
    currency: String,
    redirect_success: String,
    redirect_fail: String,
    redirect_cancel: String,
    ping_url: String,
    monthly: bool,
}

impl Donation {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> DonationBuilder {
        DonationBuilder::default()
    }

    /// Returns the donor.
    #[must_use]
    pub const fn donor(&self) -> &Donor {
        &self.donor
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns `true` for a recurring monthly donation.
    #[must_use]
    pub const fn monthly(&self) -> bool {
        self.monthly
    }

    /// Renders the wire parameters in their fixed order.
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let donor = &self.donor;
        vec![
            ("first_name", donor.first_name.clone()),
            ("last_name", donor.last_name.clone()),
            ("email", donor.email.clone()),
            ("address", donor.address.clone()),
            ("zip_code", donor.zip_code.clone()),
            ("city", donor.city.clone()),
            ("country", donor.country.clone()),
            ("amount", self.amount.as_str().to_string()),
            ("currency", self.currency.clone()),
            ("redirect_success", self.redirect_success.clone()),
            ("redirect_fail", self.redirect_fail.clone()),
            ("redirect_cancel", self.redirect_cancel.clone()),
            ("ping_url", self.ping_url.clone()),
            ("monthly", self.monthly.to_string()),
        ]
    }
}

/// Builder for [`Donation`].
///
/// `ping_url` defaults to empty and `monthly` to `false`.
#[derive(Debug, Default)]
pub struct DonationBuilder {
    donor: Option<Donor>,
    amount: Option<Amount>,
    currency: Option<String>,
    redirect_success: Option<String>,
    redirect_fail: Option<String>,
    redirect_cancel: Option<String>,
    ping_url: String,
    monthly: bool,
}

impl DonationBuilder {
    /// Sets the donor (required).
    #[must_use]
    pub fn donor(mut self, donor: Donor) -> Self {
        self.donor = Some(donor);
        self
    }

    /// Sets the amount (required).
    ///
    /// Takes a whole `u32`/`u64` or an [`Amount`] from [`Amount::decimal`].
    #[must_use]
    pub fn amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Sets the currency code, e.g. `EUR` (required).
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets where the donor lands after a successful payment (required).
    #[must_use]
    pub fn redirect_success(mut self, url: impl Into<String>) -> Self {
        self.redirect_success = Some(url.into());
        self
    }

    /// Sets where the donor lands after a failed payment (required).
    #[must_use]
    pub fn redirect_fail(mut self, url: impl Into<String>) -> Self {
        self.redirect_fail = Some(url.into());
        self
    }

    /// Sets where the donor lands after cancelling (required).
    #[must_use]
    pub fn redirect_cancel(mut self, url: impl Into<String>) -> Self {
        self.redirect_cancel = Some(url.into());
        self
    }

    /// Sets the URL the platform notifies once the payment completes.
    #[must_use]
    pub fn ping_url(mut self, url: impl Into<String>) -> Self {
        self.ping_url = url.into();
        self
    }

    /// Makes the donation recur monthly.
    #[must_use]
    pub const fn monthly(mut self, monthly: bool) -> Self {
        self.monthly = monthly;
        self
    }

    /// Builds the [`Donation`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] for the first required
    /// field that was not set.
    pub fn build(self) -> Result<Donation, ConfigError> {
        Ok(Donation {
            donor: self
                .donor
                .ok_or(ConfigError::MissingRequiredField { field: "donor" })?,
            amount: self
                .amount
                .ok_or(ConfigError::MissingRequiredField { field: "amount" })?,
            currency: self
                .currency
                .ok_or(ConfigError::MissingRequiredField { field: "currency" })?,
            redirect_success: self.redirect_success.ok_or(ConfigError::MissingRequiredField {
                field: "redirect_success",
            })?,
            redirect_fail: self.redirect_fail.ok_or(ConfigError::MissingRequiredField {
                field: "redirect_fail",
            })?,
            redirect_cancel: self.redirect_cancel.ok_or(ConfigError::MissingRequiredField {
                field: "redirect_cancel",
            })?,
            ping_url: self.ping_url,
            monthly: self.monthly,
        })
    }
}

/// Result of [`Users::donate`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DonationResponse {
    /// Payment page to send the donor to.
    pub url: String,
    /// Any other fields the platform returned.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
