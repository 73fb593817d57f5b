//! The `find-store` pipeline: resolve the origin, scan the catalog, render.

use std::path::PathBuf;

use anyhow::Context;
use findstore_core::{
    find_nearest, render, resolve_origin, AppConfig, DistanceUnit, OriginSpec, OutputFormat,
};
use findstore_data::{GazetteerFile, StoreCatalog};
use findstore_geocoder::CensusGeocoder;

/// One invocation's worth of parsed options.
#[derive(Debug, Clone)]
pub(crate) struct FindRequest {
    pub(crate) origin: OriginSpec,
    pub(crate) unit: DistanceUnit,
    pub(crate) format: OutputFormat,
    pub(crate) stores_path: PathBuf,
    pub(crate) gazetteer_path: PathBuf,
}

/// Find the store closest to the requested origin and render it.
///
/// Returns the rendered text instead of printing it so that nothing reaches
/// stdout unless every step succeeded.
///
/// # Errors
///
/// Returns an error if the geocoder client cannot be built, the origin cannot
/// be resolved, the catalog cannot be read or is empty, or rendering fails.
pub(crate) async fn run_find(request: &FindRequest, config: &AppConfig) -> anyhow::Result<String> {
    let gazetteer = GazetteerFile::new(&request.gazetteer_path);
    let geocoder = CensusGeocoder::with_base_url(
        &config.geocoder_url,
        &config.geocoder_benchmark,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build geocoder client")?;

    let origin = resolve_origin(&request.origin, &gazetteer, &geocoder)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "origin resolution failed"))?;

    let stores = StoreCatalog::new(&request.stores_path)
        .records()
        .with_context(|| {
            format!(
                "failed to open store catalog {}",
                request.stores_path.display()
            )
        })?;
    let nearest = find_nearest(origin, stores)?;
    tracing::info!(
        store = %nearest.store.name,
        distance_miles = nearest.distance_miles,
        "closest store found"
    );

    let rendered = render(
        &nearest.store,
        nearest.distance_miles,
        request.unit,
        request.format,
    )?;
    Ok(rendered)
}
