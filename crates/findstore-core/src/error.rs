use thiserror::Error;

/// Failures that abort a nearest-store lookup.
///
/// Every variant is fatal: nothing is retried and no partial output is
/// rendered once one of these is returned.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The supplied zip code has no exact match in the gazetteer.
    #[error("zip not found: {zip}")]
    ZipNotFound { zip: String },

    /// The geocoding service answered with a non-success HTTP status.
    #[error("geocoding service unavailable: received HTTP {status}")]
    GeocodingUnavailable { status: u16 },

    /// The geocoding service answered successfully but without a usable match.
    #[error("could not parse address location for \"{address}\"")]
    GeocodingNoMatch { address: String },

    /// The geocoding request failed in transport or its body could not be decoded.
    #[error("geocoding request failed: {reason}")]
    GeocodingFailed { reason: String },

    /// The store catalog yielded zero records.
    #[error("no stores found in catalog")]
    EmptyCatalog,

    /// A latitude or longitude value is not a finite decimal number.
    #[error("malformed {field} value \"{value}\"")]
    MalformedNumericField { field: &'static str, value: String },

    /// A dataset file could not be opened or one of its rows could not be decoded.
    #[error("dataset error in {path}: {reason}")]
    Dataset { path: String, reason: String },

    #[error("failed to render result: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
