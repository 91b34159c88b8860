//! JSON output keeps the exported field names (`ID`, `LocationName`, ...),
//! which differ from the service's camelCase names used on the wire and in YAML.

use crate::interfaces::licence_information::{Licence, LicenceCategory};
use crate::interfaces::occasion_bundles::{Duration, Occasion};
use crate::interfaces::search_information::{Address, Coordinates, Location};
use crate::interfaces::Loose;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::io::Write;

/// A collection with an exported-name JSON rendering.
pub trait JsonView {
    fn write_json(&self, out: &mut dyn Write) -> serde_json::Result<()>;
}

fn write_all<V, I>(views: I, out: &mut dyn Write) -> serde_json::Result<()>
where
    V: Serialize,
    I: Iterator<Item = V>,
{
    serde_json::to_writer_pretty(out, &views.collect::<Vec<_>>())
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct LicenceCategoryJson<'a> {
    name: &'a str,
    licences: Vec<LicenceJson<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct LicenceJson<'a> {
    #[serde(rename = "ID")]
    id: u64,
    name: &'a str,
    description: &'a str,
    category: &'a str,
    icon: &'a str,
}

impl<'a> From<&'a LicenceCategory> for LicenceCategoryJson<'a> {
    fn from(category: &'a LicenceCategory) -> Self {
        Self {
            name: &category.name,
            licences: category.licences.iter().map(LicenceJson::from).collect(),
        }
    }
}

impl<'a> From<&'a Licence> for LicenceJson<'a> {
    fn from(licence: &'a Licence) -> Self {
        Self {
            id: licence.id,
            name: &licence.name,
            description: &licence.description,
            category: &licence.category,
            icon: &licence.icon,
        }
    }
}

impl JsonView for [LicenceCategory] {
    fn write_json(&self, out: &mut dyn Write) -> serde_json::Result<()> {
        write_all(self.iter().map(LicenceCategoryJson::from), out)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct LocationJson<'a> {
    #[serde(rename = "ID")]
    id: u64,
    name: &'a str,
    address: AddressJson<'a>,
    coordinates: CoordinatesJson,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AddressJson<'a> {
    street_address1: &'a str,
    street_address2: &'a str,
    zip_code: &'a str,
    city: &'a str,
    care_of: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CoordinatesJson {
    latitude: f64,
    longitude: f64,
}

impl<'a> From<&'a Address> for AddressJson<'a> {
    fn from(address: &'a Address) -> Self {
        Self {
            street_address1: &address.street_address1,
            street_address2: &address.street_address2,
            zip_code: &address.zip_code,
            city: &address.city,
            care_of: &address.care_of,
        }
    }
}

impl From<&Coordinates> for CoordinatesJson {
    fn from(coordinates: &Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

impl<'a> From<&'a Location> for LocationJson<'a> {
    fn from(location: &'a Location) -> Self {
        Self {
            id: location.id,
            name: &location.name,
            address: AddressJson::from(&location.address),
            coordinates: CoordinatesJson::from(&location.coordinates),
        }
    }
}

impl JsonView for [Location] {
    fn write_json(&self, out: &mut dyn Write) -> serde_json::Result<()> {
        write_all(self.iter().map(LocationJson::from), out)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OccasionJson<'a> {
    #[serde(rename = "ExaminationID")]
    examination_id: &'a Loose,
    duration: DurationJson,
    #[serde(rename = "ExaminationTypeID")]
    examination_type_id: u64,
    #[serde(rename = "LocationID")]
    location_id: u64,
    #[serde(rename = "OccasionChoiceID")]
    occasion_choice_id: u64,
    #[serde(rename = "VehicleTypeID")]
    vehicle_type_id: u64,
    #[serde(rename = "LanguageID")]
    language_id: u64,
    #[serde(rename = "TachographTypeID")]
    tachograph_type_id: u64,
    name: &'a str,
    properties: &'a Loose,
    date: &'a str,
    time: &'a str,
    location_name: &'a str,
    cost: &'a str,
    cost_text: &'a str,
    increased_fee: bool,
    is_educator_booking: &'a Loose,
    place_address: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DurationJson {
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
}

impl From<&Duration> for DurationJson {
    fn from(duration: &Duration) -> Self {
        Self {
            start: duration.start,
            end: duration.end,
        }
    }
}

impl<'a> From<&'a Occasion> for OccasionJson<'a> {
    fn from(occasion: &'a Occasion) -> Self {
        Self {
            examination_id: &occasion.examination_id,
            duration: DurationJson::from(&occasion.duration),
            examination_type_id: occasion.examination_type_id,
            location_id: occasion.location_id,
            occasion_choice_id: occasion.occasion_choice_id,
            vehicle_type_id: occasion.vehicle_type_id,
            language_id: occasion.language_id,
            tachograph_type_id: occasion.tachograph_type_id,
            name: &occasion.name,
            properties: &occasion.properties,
            date: &occasion.date,
            time: &occasion.time,
            location_name: &occasion.location_name,
            cost: &occasion.cost,
            cost_text: &occasion.cost_text,
            increased_fee: occasion.increased_fee,
            is_educator_booking: &occasion.is_educator_booking,
            place_address: &occasion.place_address,
        }
    }
}

impl JsonView for [Occasion] {
    fn write_json(&self, out: &mut dyn Write) -> serde_json::Result<()> {
        write_all(self.iter().map(OccasionJson::from), out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    fn written<T: JsonView + ?Sized>(items: &T) -> Value {
        let mut out = Vec::new();
        items.write_json(&mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn occasion_exported_names() {
        let occasion = Occasion {
            examination_id: Loose::Number(42.into()),
            name: "Körprov B".to_string(),
            location_name: "Sollentuna".to_string(),
            cost_text: " kr".to_string(),
            ..Default::default()
        };
        let value = written([occasion].as_slice());

        assert_eq!(
            keys(&value[0]),
            vec![
                "Cost",
                "CostText",
                "Date",
                "Duration",
                "ExaminationID",
                "ExaminationTypeID",
                "IncreasedFee",
                "IsEducatorBooking",
                "LanguageID",
                "LocationID",
                "LocationName",
                "Name",
                "OccasionChoiceID",
                "PlaceAddress",
                "Properties",
                "TachographTypeID",
                "Time",
                "VehicleTypeID",
            ]
        );
        assert_eq!(keys(&value[0]["Duration"]), vec!["End", "Start"]);
        assert_eq!(value[0]["ExaminationID"], 42);
        assert_eq!(value[0]["LocationName"], "Sollentuna");
        assert_eq!(value[0]["CostText"], " kr");
    }

    #[test]
    fn location_exported_names() {
        let location = Location {
            id: 1000140,
            address: Address {
                street_address1: "Kranvägen 2".to_string(),
                ..Default::default()
            },
            coordinates: Coordinates {
                latitude: 59.42,
                longitude: 17.95,
            },
            ..Default::default()
        };
        let value = written([location].as_slice());

        assert_eq!(keys(&value[0]), vec!["Address", "Coordinates", "ID", "Name"]);
        assert_eq!(
            keys(&value[0]["Address"]),
            vec!["CareOf", "City", "StreetAddress1", "StreetAddress2", "ZipCode"]
        );
        assert_eq!(value[0]["ID"], 1000140);
        assert_eq!(value[0]["Address"]["StreetAddress1"], "Kranvägen 2");
        assert_eq!(value[0]["Coordinates"]["Latitude"], 59.42);
    }

    #[test]
    fn licence_category_exported_names() {
        let category = LicenceCategory {
            name: "Bil".to_string(),
            licences: vec![Licence {
                id: 5,
                name: "B".to_string(),
                ..Default::default()
            }],
        };
        let value = written([category].as_slice());

        assert_eq!(keys(&value[0]), vec!["Licences", "Name"]);
        assert_eq!(
            keys(&value[0]["Licences"][0]),
            vec!["Category", "Description", "ID", "Icon", "Name"]
        );
        assert_eq!(value[0]["Licences"][0]["ID"], 5);
    }

    #[test]
    fn empty_collection_is_an_empty_array() {
        assert_eq!(written(Vec::<Occasion>::new().as_slice()), Value::Array(vec![]));
    }
}
