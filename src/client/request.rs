use super::config::ClientConfig;
use super::error::ClientError;
use log::debug;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::{Method, Request, Url};
use serde::Serialize;

/// Build a request for `<base>/Boka/<resource>` carrying `payload` as JSON.
///
/// A leading `/` on `resource` is ignored, so `/occasion-bundles` and
/// `occasion-bundles` address the same endpoint.
pub fn build_request<P>(
    config: &ClientConfig,
    method: Method,
    resource: &str,
    payload: &P,
) -> Result<Request, ClientError>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_vec(payload).map_err(ClientError::Encode)?;

    let booking_url = config.booking_url();
    let url = Url::parse(&booking_url)
        .and_then(|base| base.join(resource.trim_start_matches('/')))
        .map_err(|e| ClientError::Build(format!("invalid url for {}: {}", resource, e)))?;

    let mut request = Request::new(method, url);
    let headers = request.headers_mut();
    headers.insert(ORIGIN, header_value(&config.base_url)?);
    headers.insert(REFERER, header_value(&booking_url)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    debug!("{} {}", request.method(), request.url());
    debug!("{}", String::from_utf8_lossy(&body));

    *request.body_mut() = Some(body.into());

    Ok(request)
}

fn header_value(value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::Build(format!("invalid header value {:?}: {}", value, e)))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn body_of(request: &Request) -> serde_json::Value {
        let bytes = request.body().and_then(|body| body.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn joins_resource_under_booking_path() {
        let config = ClientConfig::default();
        let request =
            build_request(&config, Method::POST, "/licence-information", &json!({})).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://fp.trafikverket.se/Boka/licence-information"
        );

        let without_slash =
            build_request(&config, Method::POST, "licence-information", &json!({})).unwrap();
        assert_eq!(without_slash.url(), request.url());
    }

    #[test]
    fn sets_fixed_headers() {
        let config = ClientConfig::default();
        let request =
            build_request(&config, Method::POST, "/search-information", &json!({})).unwrap();
        let headers = request.headers();

        assert_eq!(headers[ORIGIN], "https://fp.trafikverket.se");
        assert_eq!(headers[REFERER], "https://fp.trafikverket.se/Boka/");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn encodes_payload_as_json_body() {
        let config = ClientConfig::default();
        let payload = json!({"bookingSession": {"socialSecurityNumber": "199001011234"}});
        let request = build_request(&config, Method::POST, "/search-information", &payload).unwrap();

        assert_eq!(body_of(&request), payload);
    }

    #[test]
    fn empty_object_placeholder_is_sent_as_object() {
        let config = ClientConfig::default();
        let request =
            build_request(&config, Method::POST, "/licence-information", &json!({})).unwrap();

        assert_eq!(body_of(&request), json!({}));
    }

    #[test]
    fn base_url_with_trailing_slash_is_normalized() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..ClientConfig::default()
        };
        let request =
            build_request(&config, Method::POST, "/occasion-bundles", &json!({})).unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/Boka/occasion-bundles"
        );
    }

    #[test]
    fn unparsable_base_url_is_a_build_error() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        let err = build_request(&config, Method::POST, "/licence-information", &json!({}))
            .unwrap_err();

        assert!(matches!(err, ClientError::Build(_)));
    }

    #[test]
    fn unserializable_payload_is_an_encode_error() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let payload: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let err = build_request(
            &ClientConfig::default(),
            Method::POST,
            "/licence-information",
            &payload,
        )
        .unwrap_err();

        assert!(matches!(err, ClientError::Encode(_)));
    }
}
