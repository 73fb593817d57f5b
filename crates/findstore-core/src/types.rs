//! Domain types shared by origin resolution, search, and rendering.

use serde::{Deserialize, Serialize};

use crate::error::LocateError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a coordinate from its decimal text form.
    ///
    /// Surrounding whitespace is ignored on both values.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::MalformedNumericField`] if either value is not a
    /// finite decimal number.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, LocateError> {
        Ok(Self {
            latitude: parse_degrees("latitude", latitude)?,
            longitude: parse_degrees("longitude", longitude)?,
        })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f64, LocateError> {
    let malformed = || LocateError::MalformedNumericField {
        field,
        value: raw.to_string(),
    };
    let value = raw.trim().parse::<f64>().map_err(|_| malformed())?;
    // "NaN" and "inf" parse as f64 but are never a position on the globe.
    if value.is_finite() {
        Ok(value)
    } else {
        Err(malformed())
    }
}

/// A store location as it appears in the catalog.
///
/// Deserializes from the catalog's header names and serializes under short
/// machine-readable keys. Field declaration order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename(serialize = "name", deserialize = "Store Name"))]
    pub name: String,
    #[serde(rename(serialize = "location", deserialize = "Store Location"))]
    pub location: String,
    #[serde(rename(serialize = "address", deserialize = "Address"))]
    pub address: String,
    #[serde(rename(serialize = "city", deserialize = "City"))]
    pub city: String,
    #[serde(rename(serialize = "state", deserialize = "State"))]
    pub state: String,
    #[serde(rename(serialize = "zip", deserialize = "Zip Code"))]
    pub zip: String,
    /// Kept as catalog text so rendering reproduces it verbatim.
    #[serde(rename(serialize = "latitude", deserialize = "Latitude"))]
    pub latitude: String,
    #[serde(rename(serialize = "longitude", deserialize = "Longitude"))]
    pub longitude: String,
    #[serde(rename(serialize = "county", deserialize = "County"))]
    pub county: String,
}

impl StoreRecord {
    /// Parses the store's catalog coordinate text.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::MalformedNumericField`] if either value is not a
    /// finite decimal number.
    pub fn coordinate(&self) -> Result<Coordinate, LocateError> {
        Coordinate::parse(&self.latitude, &self.longitude)
    }
}

/// One row of the zip code gazetteer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GazetteerRecord {
    #[serde(rename = "GEOID")]
    pub zip_code: String,
    #[serde(rename = "INTPTLAT", default)]
    pub latitude: String,
    #[serde(rename = "INTPTLONG", default)]
    pub longitude: String,
}

impl GazetteerRecord {
    /// Parses the row's representative coordinate, trimming padded values.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::MalformedNumericField`] if either value is not a
    /// finite decimal number.
    pub fn coordinate(&self) -> Result<Coordinate, LocateError> {
        Coordinate::parse(&self.latitude, &self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "km")]
    Kilometers,
}

impl DistanceUnit {
    /// Short label used in rendered output.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Structured,
}

/// Where the search starts from: exactly one of a zip code or an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginSpec {
    Zip(String),
    Address(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_parse_trims_whitespace() {
        let coord = Coordinate::parse("  37.79937 ", "-122.398409      ").unwrap();
        assert_eq!(coord, Coordinate::new(37.799_37, -122.398_409));
    }

    #[test]
    fn coordinate_parse_rejects_garbage_latitude() {
        let err = Coordinate::parse("north", "-77.0").unwrap_err();
        assert!(
            matches!(err, LocateError::MalformedNumericField { field: "latitude", ref value } if value == "north"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn coordinate_parse_rejects_non_finite_longitude() {
        let err = Coordinate::parse("38.0", "NaN").unwrap_err();
        assert!(matches!(
            err,
            LocateError::MalformedNumericField {
                field: "longitude",
                ..
            }
        ));
    }

    #[test]
    fn distance_unit_tags() {
        assert_eq!(DistanceUnit::Miles.tag(), "mi");
        assert_eq!(DistanceUnit::Kilometers.to_string(), "km");
        assert_eq!(DistanceUnit::default(), DistanceUnit::Miles);
    }
}
