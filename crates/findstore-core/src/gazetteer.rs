//! Zip code to coordinate lookup.

use crate::error::LocateError;
use crate::types::{Coordinate, GazetteerRecord};

/// A source of zip code coordinates.
pub trait Gazetteer {
    /// Resolves a zip code to its representative coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::ZipNotFound`] when no record matches, or any
    /// error the underlying record source produces.
    fn lookup(&self, zip: &str) -> Result<Coordinate, LocateError>;
}

/// Scans `records` for the first whose zip equals `zip` exactly.
///
/// Matching is plain string equality: no padding, trimming, or numeric
/// validation of `zip`, so garbage input is simply never found. The scan stops
/// at the first match and never pulls later records from the iterator.
///
/// # Errors
///
/// - [`LocateError::ZipNotFound`] if the sequence ends without a match.
/// - [`LocateError::MalformedNumericField`] if the matching row's coordinate
///   text is not numeric.
/// - Any error yielded by the record source before the match.
pub fn lookup_zip<I, E>(zip: &str, records: I) -> Result<Coordinate, LocateError>
where
    I: IntoIterator<Item = Result<GazetteerRecord, E>>,
    LocateError: From<E>,
{
    let hit = records
        .into_iter()
        .map(|record| record.map_err(LocateError::from))
        .find(|record| record.as_ref().map_or(true, |r| r.zip_code == zip));

    match hit {
        Some(record) => {
            let coordinate = record?.coordinate()?;
            tracing::debug!(zip, %coordinate, "zip resolved from gazetteer");
            Ok(coordinate)
        }
        None => Err(LocateError::ZipNotFound {
            zip: zip.to_string(),
        }),
    }
}

/// In-memory gazetteer, mostly useful for tests and small embedded tables.
impl Gazetteer for [GazetteerRecord] {
    fn lookup(&self, zip: &str) -> Result<Coordinate, LocateError> {
        lookup_zip(zip, self.iter().cloned().map(Ok::<_, LocateError>))
    }
}

impl Gazetteer for Vec<GazetteerRecord> {
    fn lookup(&self, zip: &str) -> Result<Coordinate, LocateError> {
        self.as_slice().lookup(zip)
    }
}
