use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use findstore_core::StoreRecord;

use crate::error::DataError;
use crate::reader::Records;

/// The comma-delimited store catalog.
///
/// Columns are bound by exact header name (`Store Name`, `Store Location`,
/// `Address`, `City`, `State`, `Zip Code`, `Latitude`, `Longitude`,
/// `County`); their order in the file does not matter.
#[derive(Debug, Clone)]
pub struct StoreCatalog {
    path: PathBuf,
}

impl StoreCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the catalog and streams its rows in file order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Open`] if the file cannot be opened or its header
    /// row cannot be read. Row-level failures are yielded by the iterator.
    pub fn records(&self) -> Result<Records<StoreRecord>, DataError> {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(true).delimiter(b',');
        Records::open(&self.path, &builder)
    }
}
