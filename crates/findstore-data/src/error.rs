use findstore_core::LocateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The file is missing, unreadable, or its header row cannot be decoded.
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A data row could not be decoded into the expected record shape.
    #[error("failed to read {path}: {source}")]
    Row {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl DataError {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            DataError::Open { path, .. } | DataError::Row { path, .. } => path,
        }
    }
}

impl From<DataError> for LocateError {
    fn from(err: DataError) -> Self {
        let path = err.path().to_string();
        let reason = match &err {
            DataError::Open { source, .. } | DataError::Row { source, .. } => source.to_string(),
        };
        LocateError::Dataset { path, reason }
    }
}
