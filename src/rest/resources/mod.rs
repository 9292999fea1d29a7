//! Resource specializations.
//!
//! Spots, news, events and actions are plain [`ResourceModule`]s. The
//! resources below add operations on top of the generic four:
//!
//! | Resource     | Extra operations                      |
//! |--------------|---------------------------------------|
//! | [`Users`]    | [`me`](Users::me), [`donate`](Users::donate) |
//! | [`Videos`]   | [`watch`](Videos::watch)              |
//! | [`Insights`] | [`get`](Insights::get) (no generic operations) |
//!
//! [`ResourceModule`]: crate::rest::ResourceModule

mod insights;
mod users;
mod videos;

pub use insights::{AggregatedRows, Insights, InsightsQuery, INSIGHTS_PATH};
pub use users::{Amount, Donation, DonationBuilder, DonationResponse, Donor, Users};
pub use videos::{StreamUrls, Videos};
