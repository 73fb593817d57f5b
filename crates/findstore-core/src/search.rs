//! Nearest-store search over a streamed catalog.

use crate::distance::distance_miles;
use crate::error::LocateError;
use crate::types::{Coordinate, StoreRecord};

/// The winning store and its distance from the origin in miles.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStore {
    pub store: StoreRecord,
    pub distance_miles: f64,
}

/// Finds the store closest to `origin` in a single pass over `stores`.
///
/// Only a strictly shorter distance replaces the current best, so among
/// equidistant stores the first one in catalog order wins.
///
/// # Errors
///
/// - [`LocateError::EmptyCatalog`] if `stores` yields no records.
/// - [`LocateError::MalformedNumericField`] if a store's coordinate text is
///   not numeric.
/// - Any error yielded by the record source.
pub fn find_nearest<I, E>(origin: Coordinate, stores: I) -> Result<NearestStore, LocateError>
where
    I: IntoIterator<Item = Result<StoreRecord, E>>,
    LocateError: From<E>,
{
    let (best, shortest, scanned) = stores.into_iter().try_fold(
        (None, f64::INFINITY, 0usize),
        |(best, shortest, scanned), store| {
            let store = store?;
            let distance = distance_miles(origin, store.coordinate()?);
            let (best, shortest) = if distance < shortest {
                (Some(store), distance)
            } else {
                (best, shortest)
            };
            Ok::<_, LocateError>((best, shortest, scanned + 1))
        },
    )?;

    let store = best.ok_or(LocateError::EmptyCatalog)?;
    tracing::debug!(
        store = %store.name,
        distance_miles = shortest,
        scanned,
        "nearest store selected"
    );
    Ok(NearestStore {
        store,
        distance_miles: shortest,
    })
}
