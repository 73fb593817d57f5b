pub mod app_config;
pub mod config;
pub mod distance;
pub mod error;
pub mod gazetteer;
pub mod origin;
pub mod output;
pub mod search;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use distance::distance_miles;
pub use error::{ConfigError, LocateError};
pub use gazetteer::{lookup_zip, Gazetteer};
pub use origin::{encode_address, resolve_origin, Geocoder};
pub use output::{convert_distance, render, StoreMatch};
pub use search::{find_nearest, NearestStore};
pub use types::{
    Coordinate, DistanceUnit, GazetteerRecord, OriginSpec, OutputFormat, StoreRecord,
};
