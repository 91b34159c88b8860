//! Bookable exam occasions, grouped into bundles by the service.
//! URL: https://fp.trafikverket.se/Boka/occasion-bundles

use super::{null_as_default, BookingSession, Envelope, Loose};
use crate::client::error::ClientError;
use crate::client::BookingClient;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccasionBundlesRequest {
    pub booking_session: BookingSession,
    pub occasion_bundle_query: OccasionBundleQuery,
}

/// Where and when to look for occasions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccasionBundleQuery {
    /// Occasions from this point on are returned
    pub start_date: DateTime<FixedOffset>,
    pub location_id: u64,
    pub language_id: u64,
    pub vehicle_type_id: u64,
    pub tachograph_type_id: u64,
    pub occasion_choice_id: u64,
    pub examination_type_id: u64,
}

pub type OccasionBundlesResponse = Envelope<Vec<OccasionBundle>>;

/// A group of occasions, usually one per day, with the price for the group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OccasionBundle {
    #[serde(deserialize_with = "null_as_default")]
    pub occasions: Vec<Occasion>,
    pub cost: String,
}

/// One bookable exam slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Occasion {
    pub examination_id: Loose,
    pub duration: Duration,
    pub examination_type_id: u64,
    pub location_id: u64,
    pub occasion_choice_id: u64,
    pub vehicle_type_id: u64,
    pub language_id: u64,
    pub tachograph_type_id: u64,
    /// Exam kind, e.g. "Körprov B"
    pub name: String,
    pub properties: Loose,
    /// Display date, e.g. "2020-01-01"
    pub date: String,
    /// Display time, e.g. "10:00"
    pub time: String,
    pub location_name: String,
    /// Price without currency, e.g. "800"
    pub cost: String,
    /// Currency text following the price, e.g. " kr"
    pub cost_text: String,
    pub increased_fee: bool,
    pub is_educator_booking: Loose,
    pub place_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub start: Option<DateTime<FixedOffset>>,
    pub end: Option<DateTime<FixedOffset>>,
}

/// Concatenate the occasions of every bundle, keeping the response order.
pub fn flatten_occasions(bundles: Vec<OccasionBundle>) -> Vec<Occasion> {
    bundles
        .into_iter()
        .flat_map(|bundle| bundle.occasions)
        .collect()
}

impl BookingClient {
    pub async fn occasion_bundles(
        &self,
        body: &OccasionBundlesRequest,
    ) -> Result<OccasionBundlesResponse, ClientError> {
        self.post("/occasion-bundles", body).await
    }

    /// Every occasion matching `body`, bundles flattened.
    pub async fn occasions(&self, body: &OccasionBundlesRequest) -> Result<Vec<Occasion>, ClientError> {
        Ok(flatten_occasions(self.occasion_bundles(body).await?.data))
    }
}
