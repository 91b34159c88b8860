//! What can be booked for a given person: exam locations, licence categories etc.
//! URL: https://fp.trafikverket.se/Boka/search-information

use super::licence_information::LicenceCategory;
use super::{null_as_default, BookingSession, Envelope};
use crate::client::error::ClientError;
use crate::client::BookingClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInformationRequest {
    pub booking_session: BookingSession,
}

pub type SearchInformationResponse = Envelope<SearchInformation>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInformation {
    pub can_book_licence: bool,
    pub licence_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub licence_categories: Vec<LicenceCategory>,
    /// Preselected location, 0 if none
    pub location_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
}

/// An exam site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub address: Address,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_address1: String,
    pub street_address2: String,
    pub zip_code: String,
    pub city: String,
    pub care_of: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl BookingClient {
    pub async fn search_information(
        &self,
        body: &SearchInformationRequest,
    ) -> Result<SearchInformationResponse, ClientError> {
        self.post("/search-information", body).await
    }

    /// Exam locations available to the person in `body`.
    pub async fn locations(&self, body: &SearchInformationRequest) -> Result<Vec<Location>, ClientError> {
        Ok(self.search_information(body).await?.data.locations)
    }
}
