use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Comma-delimited store catalog.
    pub stores_path: PathBuf,
    /// Tab-delimited zip code gazetteer.
    pub gazetteer_path: PathBuf,
    pub geocoder_url: String,
    pub geocoder_benchmark: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
