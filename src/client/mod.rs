pub mod config;
pub mod error;
pub mod request;
pub mod transport;

use crate::interfaces::Envelope;
use config::ClientConfig;
use error::ClientError;
use log::debug;
use request::build_request;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use transport::{HttpTransport, Transport};

/// Client for the exam booking service.
///
/// The endpoint specific calls live next to their datastructures in
/// [`crate::interfaces`].
pub struct BookingClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl BookingClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// POST `payload` to `resource` and decode the `{data, status, url}` envelope.
    pub async fn post<P, T>(&self, resource: &str, payload: &P) -> Result<Envelope<T>, ClientError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned + Serialize + Default,
    {
        let request = build_request(&self.config, Method::POST, resource, payload)?;
        let response = self.transport.execute(request).await?;

        if !response.status.is_success() {
            return Err(ClientError::BadStatus(response.status.to_string()));
        }

        let envelope: Envelope<T> =
            serde_json::from_slice(&response.body).map_err(ClientError::Decode)?;

        if let Ok(json) = serde_json::to_string(&envelope) {
            debug!("{}", json);
        }

        Ok(envelope)
    }
}
