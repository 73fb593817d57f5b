use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_GEOCODER_URL: &str =
    "https://geocoding.geo.census.gov/geocoder/locations/onelineaddress";
pub const DEFAULT_GEOCODER_BENCHMARK: &str = "Public_AR_Census2010";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// configuration.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let stores_path = PathBuf::from(non_empty(
        "FINDSTORE_STORES_PATH",
        "data/store-locations.csv",
    )?);
    let gazetteer_path = PathBuf::from(non_empty(
        "FINDSTORE_GAZETTEER_PATH",
        "data/2019_Gaz_zcta_national.txt",
    )?);
    let geocoder_url = non_empty("FINDSTORE_GEOCODER_URL", DEFAULT_GEOCODER_URL)?;
    let geocoder_benchmark = non_empty("FINDSTORE_GEOCODER_BENCHMARK", DEFAULT_GEOCODER_BENCHMARK)?;
    let request_timeout_secs = parse_u64("FINDSTORE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FINDSTORE_USER_AGENT", "findstore/0.1 (nearest-store)");
    let log_level = or_default("FINDSTORE_LOG_LEVEL", "warn");

    Ok(AppConfig {
        stores_path,
        gazetteer_path,
        geocoder_url,
        geocoder_benchmark,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
