use findstore_core::LocateError;
use thiserror::Error;

/// Errors returned by the Census geocoder client.
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with anything other than HTTP 200.
    #[error("received HTTP {status} from {url}")]
    Unavailable { status: u16, url: String },

    /// HTTP 200, but no coordinates at the first address match.
    #[error("could not parse address location for \"{address}\"")]
    NoMatch { address: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The matched coordinates are present but not numeric.
    #[error("invalid coordinate in geocoder response: {0}")]
    Coordinate(#[from] LocateError),

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl From<GeocoderError> for LocateError {
    fn from(err: GeocoderError) -> Self {
        match err {
            GeocoderError::Unavailable { status, .. } => LocateError::GeocodingUnavailable { status },
            GeocoderError::NoMatch { address } => LocateError::GeocodingNoMatch { address },
            GeocoderError::Coordinate(inner) => inner,
            other @ (GeocoderError::Http(_)
            | GeocoderError::Deserialize { .. }
            | GeocoderError::InvalidBaseUrl { .. }) => LocateError::GeocodingFailed {
                reason: other.to_string(),
            },
        }
    }
}
