use std::path::{Path, PathBuf};

use findstore_core::{AppConfig, LocateError};
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::find::run_find;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../findstore-data/tests/fixtures")
        .join(name)
}

fn test_config(geocoder_url: &str) -> AppConfig {
    AppConfig {
        stores_path: fixture("store-locations.csv"),
        gazetteer_path: fixture("gazetteer.txt"),
        geocoder_url: geocoder_url.to_string(),
        geocoder_benchmark: "Public_AR_Census2010".to_string(),
        request_timeout_secs: 5,
        user_agent: "findstore-test/0.1".to_string(),
        log_level: "warn".to_string(),
    }
}

fn request(args: &[&str], config: &AppConfig) -> FindRequest {
    let mut argv = vec!["find-store"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)
        .expect("expected valid cli args")
        .into_request(config)
        .expect("expected a request")
}

#[test]
fn parses_zip_with_defaults() {
    let cli = Cli::try_parse_from(["find-store", "--zip", "94111"]).expect("expected valid cli args");
    assert_eq!(cli.zip.as_deref(), Some("94111"));
    assert!(cli.address.is_none());
    assert_eq!(cli.units, Units::Mi);
    assert_eq!(cli.output, Output::Text);
}

#[test]
fn parses_address_with_km_and_json() {
    let cli = Cli::try_parse_from([
        "find-store",
        "--address",
        "1600 Pennsylvania Ave NW, Washington, DC 20500",
        "--units",
        "km",
        "--output",
        "json",
    ])
    .expect("expected valid cli args");
    assert_eq!(
        cli.address.as_deref(),
        Some("1600 Pennsylvania Ave NW, Washington, DC 20500")
    );
    assert_eq!(cli.units, Units::Km);
    assert_eq!(cli.output, Output::Json);
}

#[test]
fn origin_is_required() {
    assert!(Cli::try_parse_from(["find-store"]).is_err());
    assert!(Cli::try_parse_from(["find-store", "--units", "km"]).is_err());
}

#[test]
fn zip_and_address_are_mutually_exclusive() {
    let result = Cli::try_parse_from(["find-store", "--zip", "94111", "--address", "somewhere"]);
    assert!(result.is_err());
}

#[test]
fn unknown_units_are_rejected() {
    let result = Cli::try_parse_from(["find-store", "--zip", "94111", "--units", "furlongs"]);
    assert!(result.is_err());
}

#[test]
fn request_maps_options_onto_core_types() {
    let config = test_config("http://127.0.0.1:1/geocode");
    let req = request(&["--zip", "94111", "--units", "km", "--output", "json"], &config);
    assert_eq!(req.origin, OriginSpec::Zip("94111".to_string()));
    assert_eq!(req.unit, DistanceUnit::Kilometers);
    assert_eq!(req.format, OutputFormat::Structured);
    assert_eq!(req.stores_path, config.stores_path);
    assert_eq!(req.gazetteer_path, config.gazetteer_path);
}

#[test]
fn request_path_flags_override_config() {
    let config = test_config("http://127.0.0.1:1/geocode");
    let req = request(
        &["--zip", "1", "--stores", "/tmp/s.csv", "--gazetteer", "/tmp/g.txt"],
        &config,
    );
    assert_eq!(req.stores_path, Path::new("/tmp/s.csv"));
    assert_eq!(req.gazetteer_path, Path::new("/tmp/g.txt"));
}

#[tokio::test]
async fn zip_search_renders_text() {
    // Port 1 is never contacted on the zip path.
    let config = test_config("http://127.0.0.1:1/geocode");
    let req = request(&["--zip", "94111"], &config);

    let out = run_find(&req, &config).await.expect("search should succeed");

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Embarcadero");
    assert_eq!(lines[4], "San Francisco County");
    assert!(lines[7].ends_with(" mi"), "got {}", lines[7]);
}

#[tokio::test]
async fn zip_search_renders_json_in_km() {
    let config = test_config("http://127.0.0.1:1/geocode");
    let req = request(&["--zip", "94111", "--units", "km", "--output", "json"], &config);

    let out = run_find(&req, &config).await.expect("search should succeed");

    let value: serde_json::Value = serde_json::from_str(&out).expect("output is JSON");
    assert_eq!(value["name"], "Embarcadero");
    assert_eq!(value["units"], "km");
    assert!(value["distance"].as_f64().is_some_and(|d| d > 0.0));
}

#[tokio::test]
async fn unknown_zip_fails_without_output() {
    let config = test_config("http://127.0.0.1:1/geocode");
    let req = request(&["--zip", "12345"], &config);

    let err = run_find(&req, &config).await.unwrap_err();

    assert!(
        matches!(err.downcast_ref::<LocateError>(), Some(LocateError::ZipNotFound { .. })),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn address_search_uses_geocoder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("address", "100 Front St, San Francisco, CA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "addressMatches": [
                    { "coordinates": { "x": -122.3985, "y": 37.7951 } }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&format!("{}/geocode", server.uri()));
    let req = request(&["--address", "100 Front St, San Francisco, CA"], &config);

    let out = run_find(&req, &config).await.expect("search should succeed");

    assert!(out.starts_with("Embarcadero\n"), "got {out}");
}

#[tokio::test]
async fn geocoder_outage_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = test_config(&format!("{}/geocode", server.uri()));
    let req = request(&["--address", "anywhere"], &config);

    let err = run_find(&req, &config).await.unwrap_err();

    assert!(
        matches!(
            err.downcast_ref::<LocateError>(),
            Some(LocateError::GeocodingUnavailable { status: 502 })
        ),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn empty_catalog_is_reported() {
    let mut config = test_config("http://127.0.0.1:1/geocode");
    config.stores_path = fixture("store-locations-empty.csv");
    let req = request(&["--zip", "94111"], &config);

    let err = run_find(&req, &config).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LocateError>(),
        Some(LocateError::EmptyCatalog)
    ));
}
