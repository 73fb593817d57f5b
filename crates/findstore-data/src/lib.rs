//! Flat-file readers for the store catalog and the zip code gazetteer.
//!
//! Both readers stream rows lazily: nothing is buffered beyond the row being
//! decoded, so a zip lookup that matches early never reads the rest of the
//! gazetteer.

pub mod catalog;
pub mod error;
pub mod gazetteer;
mod reader;

pub use catalog::StoreCatalog;
pub use error::DataError;
pub use gazetteer::GazetteerFile;
pub use reader::Records;
