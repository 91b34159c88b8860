//! Datastructures of the booking service, one module per endpoint.
//!
//! Field names follow the service's lowerCamelCase JSON. Missing fields decode
//! to the zero value of their type, like a plain JSON decode would.

pub mod licence_information;
pub mod occasion_bundles;
pub mod search_information;

use serde::{Deserialize, Deserializer, Serialize};

/// Every response is wrapped in this.
///
/// A `null` or absent `data` decodes to the zero value of `T`. The body
/// itself must still be an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawEnvelope<T>",
    bound(deserialize = "T: Deserialize<'de> + Default")
)]
pub struct Envelope<T> {
    pub data: T,
    pub status: i64,
    pub url: String,
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    status: i64,
    #[serde(default)]
    url: String,
}

impl<T: Default> From<RawEnvelope<T>> for Envelope<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        Self {
            data: raw.data.unwrap_or_default(),
            status: raw.status,
            url: raw.url,
        }
    }
}

/// Who is searching. Sent with every search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingSession {
    pub social_security_number: String,
    pub licence_id: u64,
    pub booking_mode_id: u64,
    pub ignore_debt: bool,
    pub examination_type_id: u64,
}

/// A field whose JSON type changes from response to response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// `null` decodes to the zero value, e.g. an empty list.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
