use std::time::Duration;

/// The booking service host. Requests go to `BASE_URL` + `/Boka/<resource>`.
pub const BASE_URL: &str = "https://fp.trafikverket.se";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host, no trailing slash
    pub base_url: String,
    /// Budget for establishing the connection, TLS handshake included.
    pub connect_timeout: Duration,
    /// Budget for the whole request, from connecting to the last body byte.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// The booking page, e.g. `https://fp.trafikverket.se/Boka/`.
    ///
    /// Used both as the base for resource paths and as the `Referer` header.
    pub fn booking_url(&self) -> String {
        format!("{}/Boka/", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_budgets() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://fp.trafikverket.se");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn booking_url_ignores_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.booking_url(), "http://localhost:8080/Boka/");
        assert_eq!(
            ClientConfig::default().booking_url(),
            "https://fp.trafikverket.se/Boka/"
        );
    }
}
