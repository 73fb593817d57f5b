pub mod client;
pub mod error;
pub mod types;

pub use client::CensusGeocoder;
pub use error::GeocoderError;
