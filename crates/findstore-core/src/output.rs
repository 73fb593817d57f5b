//! Unit conversion and rendering of the nearest-store result.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::LocateError;
use crate::types::{DistanceUnit, OutputFormat, StoreRecord};

const KILOMETERS_PER_MILE: f64 = 1.609_344;
const DISTANCE_DECIMALS: u32 = 6;

/// The catalog record plus the derived distance fields, in serialized order.
///
/// Built fresh per render; the catalog record itself is never modified.
#[derive(Debug, Serialize)]
pub struct StoreMatch<'a> {
    #[serde(flatten)]
    pub store: &'a StoreRecord,
    pub distance: f64,
    pub units: DistanceUnit,
}

impl<'a> StoreMatch<'a> {
    /// Converts `distance_miles` into `unit` once and pairs it with the store.
    #[must_use]
    pub fn new(store: &'a StoreRecord, distance_miles: f64, unit: DistanceUnit) -> Self {
        Self {
            store,
            distance: convert_distance(distance_miles, unit),
            units: unit,
        }
    }

    fn to_text(&self) -> String {
        let s = self.store;
        format!(
            "{}\n{}\n{}\n{}, {} {}\n{}\nLatitude: {}\nLongitude: {}\nDistance: {} {}",
            s.name,
            s.location,
            s.address,
            s.city,
            s.state,
            s.zip,
            s.county,
            s.latitude,
            s.longitude,
            format_distance(self.distance),
            self.units,
        )
    }
}

/// Formats `value` with six decimals, rounding half away from zero.
///
/// Rounding starts from the shortest decimal text of `value` rather than its
/// exact binary expansion, so `0.0078125` prints as `0.007813`.
fn format_distance(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded = decimal.round_dp_with_strategy(
                DISTANCE_DECIMALS,
                RoundingStrategy::MidpointAwayFromZero,
            );
            rounded.rescale(DISTANCE_DECIMALS);
            rounded.to_string()
        }
        // Out of decimal range; fall back to float formatting.
        Err(_) => format!("{value:.6}"),
    }
}

/// Expresses a distance in miles in the requested unit.
#[must_use]
pub fn convert_distance(distance_miles: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Miles => distance_miles,
        DistanceUnit::Kilometers => distance_miles * KILOMETERS_PER_MILE,
    }
}

/// Renders the winning store in the requested unit and format.
///
/// # Errors
///
/// Returns [`LocateError::Render`] if JSON serialization fails.
pub fn render(
    store: &StoreRecord,
    distance_miles: f64,
    unit: DistanceUnit,
    format: OutputFormat,
) -> Result<String, LocateError> {
    let result = StoreMatch::new(store, distance_miles, unit);
    match format {
        OutputFormat::Text => Ok(result.to_text()),
        OutputFormat::Structured => Ok(serde_json::to_string(&result)?),
    }
}
