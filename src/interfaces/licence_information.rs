//! Licence types that exams can be booked for.
//! URL: https://fp.trafikverket.se/Boka/licence-information

use super::{null_as_default, Envelope};
use crate::client::error::ClientError;
use crate::client::BookingClient;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type LicenceInformationResponse = Envelope<LicenceInformation>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenceInformation {
    pub enable_social_security_number: bool,
    pub social_security_number: String,
    pub licence_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub licence_categories: Vec<LicenceCategory>,
}

/// A named group of licences, e.g. "Bil" holding B and BE.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenceCategory {
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub licences: Vec<Licence>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Licence {
    pub id: u64,
    /// e.g. "B"
    pub name: String,
    /// e.g. "Personbil"
    pub description: String,
    /// Category code of this licence, e.g. "B"
    pub category: String,
    pub icon: String,
}

impl BookingClient {
    /// The service takes no parameters here; the body is an empty object.
    pub async fn licence_information(&self) -> Result<LicenceInformationResponse, ClientError> {
        self.post("/licence-information", &json!({})).await
    }

    pub async fn licence_categories(&self) -> Result<Vec<LicenceCategory>, ClientError> {
        Ok(self.licence_information().await?.data.licence_categories)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::client::config::ClientConfig;
    use crate::client::transport::stub::StubTransport;

    const SINGLE_CATEGORY: &str = r#"{"data":{"licenceCategories":[{"name":"B","licences":[{"id":1,"name":"B","description":"Car","category":"B","icon":"b.png"}]}]},"status":200}"#;

    #[tokio::test]
    async fn licence_categories_from_single_category() {
        let stub = StubTransport::replying(200, SINGLE_CATEGORY);
        let client = BookingClient::with_transport(ClientConfig::default(), Box::new(stub.clone()));

        let categories = client.licence_categories().await.unwrap();

        assert_eq!(
            categories,
            vec![LicenceCategory {
                name: "B".to_string(),
                licences: vec![Licence {
                    id: 1,
                    name: "B".to_string(),
                    description: "Car".to_string(),
                    category: "B".to_string(),
                    icon: "b.png".to_string(),
                }],
            }]
        );
    }

    #[tokio::test]
    async fn posts_empty_object() {
        let stub = StubTransport::replying(200, SINGLE_CATEGORY);
        let client = BookingClient::with_transport(ClientConfig::default(), Box::new(stub.clone()));
        client.licence_information().await.unwrap();

        let requests = stub.take_requests();
        assert_eq!(requests[0].url().path(), "/Boka/licence-information");
        assert_eq!(
            requests[0].body().and_then(|body| body.as_bytes()),
            Some(&b"{}"[..])
        );
    }

    #[tokio::test]
    async fn keeps_other_licence_information_fields() {
        let stub = StubTransport::replying(
            200,
            r#"{"data":{"enableSocialSecurityNumber":true,"socialSecurityNumber":"","licenceId":5,"licenceCategories":null},"status":200,"url":"/Boka/licence-information"}"#,
        );
        let client = BookingClient::with_transport(ClientConfig::default(), Box::new(stub));

        let response = client.licence_information().await.unwrap();

        assert!(response.data.enable_social_security_number);
        assert_eq!(response.data.licence_id, 5);
        assert!(response.data.licence_categories.is_empty());
        assert_eq!(response.url, "/Boka/licence-information");
    }

    #[tokio::test]
    async fn null_or_missing_data_gives_no_categories() {
        for body in [r#"{"data":null,"status":200}"#, r#"{"status":200,"url":"/Boka/licence-information"}"#] {
            let stub = StubTransport::replying(200, body);
            let client = BookingClient::with_transport(ClientConfig::default(), Box::new(stub));

            assert!(client.licence_categories().await.unwrap().is_empty(), "{}", body);
        }
    }

    #[tokio::test]
    async fn bad_status_gives_no_categories() {
        let stub = StubTransport::replying(500, SINGLE_CATEGORY);
        let client = BookingClient::with_transport(ClientConfig::default(), Box::new(stub));

        let result = client.licence_categories().await;

        assert!(matches!(result, Err(ClientError::BadStatus(_))));
    }
}
