//! HTTP client for the Census Bureau one-line-address geocoder.
//!
//! Wraps `reqwest` with the geocoder's fixed query layout and maps the
//! response to a single coordinate. One request per call, no retries.

use std::time::Duration;

use findstore_core::config::{DEFAULT_GEOCODER_BENCHMARK, DEFAULT_GEOCODER_URL};
use findstore_core::{encode_address, Coordinate, Geocoder, LocateError};
use percent_encoding::percent_decode_str;
use reqwest::{Client, StatusCode, Url};

use crate::error::GeocoderError;
use crate::types::GeocodeResponse;

/// Client for the Census one-line-address geocoding endpoint.
///
/// Use [`CensusGeocoder::new`] for production or
/// [`CensusGeocoder::with_base_url`] to point at a mock server in tests.
pub struct CensusGeocoder {
    client: Client,
    base_url: Url,
    benchmark: String,
}

impl CensusGeocoder {
    /// Creates a client pointed at the public Census geocoder.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocoderError> {
        Self::with_base_url(
            DEFAULT_GEOCODER_URL,
            DEFAULT_GEOCODER_BENCHMARK,
            timeout_secs,
            user_agent,
        )
    }

    /// Creates a client with a custom endpoint and benchmark.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocoderError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute URL.
    pub fn with_base_url(
        base_url: &str,
        benchmark: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocoderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let mut parsed = Url::parse(base_url).map_err(|e| GeocoderError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        // The query string is rebuilt per request.
        parsed.set_query(None);

        Ok(Self {
            client,
            base_url: parsed,
            benchmark: benchmark.to_string(),
        })
    }

    /// Resolves an already percent-encoded one-line address.
    ///
    /// # Errors
    ///
    /// - [`GeocoderError::Http`] on network failure.
    /// - [`GeocoderError::Unavailable`] on any status other than 200.
    /// - [`GeocoderError::Deserialize`] if the body is not JSON.
    /// - [`GeocoderError::NoMatch`] if there is no first address match with
    ///   both coordinates.
    /// - [`GeocoderError::Coordinate`] if the coordinates are not numeric.
    pub async fn locate(&self, encoded_address: &str) -> Result<Coordinate, GeocoderError> {
        let url = self.build_url(encoded_address);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "geocoder returned non-success status");
            return Err(GeocoderError::Unavailable {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let payload: GeocodeResponse =
            serde_json::from_str(&body).map_err(|source| GeocoderError::Deserialize {
                context: url.to_string(),
                source,
            })?;

        let Some((latitude, longitude)) = payload.first_coordinates() else {
            return Err(GeocoderError::NoMatch {
                address: percent_decode_str(encoded_address)
                    .decode_utf8_lossy()
                    .into_owned(),
            });
        };

        if let Some(matched) = payload.first_match().and_then(|m| m.matched_address.as_deref()) {
            tracing::debug!(matched, "geocoder matched address");
        }
        Ok(Coordinate::parse(&latitude, &longitude)?)
    }

    /// Builds the request URL around an address that is already encoded.
    ///
    /// The address is inserted verbatim so it is not encoded a second time.
    fn build_url(&self, encoded_address: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!(
            "address={encoded_address}&benchmark={}&format=json",
            encode_address(&self.benchmark)
        )));
        url
    }
}

impl Geocoder for CensusGeocoder {
    async fn geocode(&self, encoded_address: &str) -> Result<Coordinate, LocateError> {
        Ok(self.locate(encoded_address).await?)
    }
}
