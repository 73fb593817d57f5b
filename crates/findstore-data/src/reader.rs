use std::fs::File;
use std::path::Path;

use csv::{DeserializeRecordsIntoIter, ReaderBuilder};
use serde::de::DeserializeOwned;

use crate::error::DataError;

/// Lazily decoded rows of a delimited file, bound to columns by header name.
pub struct Records<T> {
    path: String,
    rows: DeserializeRecordsIntoIter<File, T>,
}

impl<T: DeserializeOwned> Records<T> {
    /// Opens `path` with `builder` and reads its header row.
    pub(crate) fn open(path: &Path, builder: &ReaderBuilder) -> Result<Self, DataError> {
        let path_str = path.display().to_string();
        let mut reader = builder
            .from_path(path)
            .map_err(|source| DataError::Open {
                path: path_str.clone(),
                source,
            })?;

        // Force the header row now so a bad header surfaces as an open error.
        reader.headers().map_err(|source| DataError::Open {
            path: path_str.clone(),
            source,
        })?;

        tracing::debug!(path = %path_str, "dataset opened");
        Ok(Self {
            path: path_str,
            rows: reader.into_deserialize(),
        })
    }
}

impl<T: DeserializeOwned> Iterator for Records<T> {
    type Item = Result<T, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| {
            row.map_err(|source| DataError::Row {
                path: self.path.clone(),
                source,
            })
        })
    }
}
