use std::time::Duration;

use derive_builder::Builder;
use url::Url;

use crate::data::{Restaurant, RestaurantsResponse};
use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://uk.api.just-eat.io";

const POSTCODE_PATH: &str = "discovery/uk/restaurants/enriched/bypostcode";

#[derive(Builder, Debug, Clone)]
pub struct ClientConfig {
    #[builder(setter(into), default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Left unset, the HTTP client default applies.
    #[builder(setter(into, strip_option), default)]
    timeout: Option<Duration>,
}

pub struct RestaurantClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestaurantClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn endpoint(&self, postal_code: &str) -> Result<Url, ClientError> {
        build_postcode_url(&self.base_url, postal_code)
    }

    /// Issue a single GET for the given postal code and decode the restaurant list.
    ///
    /// No retry is attempted. A non-2xx answer is reported as [`ClientError::Status`]
    /// without looking at its body.
    pub async fn fetch_restaurants(&self, postal_code: &str) -> Result<Vec<Restaurant>, ClientError> {
        let url = self.endpoint(postal_code)?;
        tracing::debug!(%url, "requesting restaurants");

        let response = self.http.get(url.as_str()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // consumes the response, the connection goes back to the pool here
        let body = response.bytes().await?;
        let data: RestaurantsResponse = serde_json::from_slice(&body)?;

        tracing::debug!(count = data.restaurants.len(), "decoded restaurants");
        Ok(data.restaurants)
    }
}

/// Append the by-postcode path to `base`, percent-encoding the postal code
/// as a single path segment.
///
/// Empty and dot-only codes are refused: the url parser treats `.`/`..` (and their
/// `%2E` forms) as dot-segments and would move the request off the endpoint.
pub fn build_postcode_url(base: &Url, postal_code: &str) -> Result<Url, ClientError> {
    if postal_code.chars().all(|c| c == '.') {
        return Err(ClientError::InvalidPostalCode(postal_code.to_string()));
    }

    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/{POSTCODE_PATH}/{}",
        urlencoding::encode(postal_code)
    ));
    Ok(url)
}


#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // nothing listens on port 1
    let config = ClientConfigBuilder::default()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let client = RestaurantClient::new(config).unwrap();

    let err = client.fetch_restaurants("AB1").await.unwrap_err();
    assert!(err.is_network());
}
