use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use findstore_core::{lookup_zip, Coordinate, Gazetteer, GazetteerRecord, LocateError};

use crate::error::DataError;
use crate::reader::Records;

/// The tab-delimited ZCTA gazetteer (`GEOID`, `INTPTLAT`, `INTPTLONG`, ...).
///
/// The file is opened per lookup, so an address-only run never touches it.
#[derive(Debug, Clone)]
pub struct GazetteerFile {
    path: PathBuf,
}

impl GazetteerFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the gazetteer and streams its rows in file order.
    ///
    /// Header names are trimmed; the published file pads the last one. Rows
    /// may be short: a row missing its coordinate columns only fails a lookup
    /// when its zip is the one requested.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Open`] if the file cannot be opened or its header
    /// row cannot be read.
    pub fn records(&self) -> Result<Records<GazetteerRecord>, DataError> {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(true)
            .delimiter(b'\t')
            .trim(Trim::Headers)
            .flexible(true);
        Records::open(&self.path, &builder)
    }
}

impl Gazetteer for GazetteerFile {
    fn lookup(&self, zip: &str) -> Result<Coordinate, LocateError> {
        let records = self.records().inspect_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "gazetteer unavailable");
        })?;
        lookup_zip(zip, records)
    }
}
