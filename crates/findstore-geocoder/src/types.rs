//! Census geocoder response types.
//!
//! Only the path this crate reads is modelled:
//! `result.addressMatches[0].coordinates.{x,y}`. Everything on that path is
//! optional so a partial body reads as "no match" instead of a decode error.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub result: Option<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(rename = "addressMatches", default)]
    pub address_matches: Vec<AddressMatch>,
}

#[derive(Debug, Deserialize)]
pub struct AddressMatch {
    #[serde(rename = "matchedAddress", default)]
    pub matched_address: Option<String>,
    #[serde(default)]
    pub coordinates: Option<MatchCoordinates>,
}

/// `x` is longitude and `y` is latitude. The service sends numbers, but
/// strings are accepted too.
#[derive(Debug, Deserialize)]
pub struct MatchCoordinates {
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub y: Option<Value>,
}

impl GeocodeResponse {
    /// The first address match, if any.
    #[must_use]
    pub fn first_match(&self) -> Option<&AddressMatch> {
        self.result.as_ref()?.address_matches.first()
    }

    /// Latitude and longitude text of the first match, if both are present.
    #[must_use]
    pub fn first_coordinates(&self) -> Option<(String, String)> {
        let coords = self.first_match()?.coordinates.as_ref()?;
        Some((as_text(coords.y.as_ref()?)?, as_text(coords.x.as_ref()?)?))
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
