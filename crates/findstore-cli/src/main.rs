mod find;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use findstore_core::{DistanceUnit, OriginSpec, OutputFormat};
use tracing_subscriber::EnvFilter;

use crate::find::FindRequest;

#[derive(Debug, Parser)]
#[command(name = "find-store")]
#[command(about = "Finds the closest store to the given zip or address")]
#[command(group(ArgGroup::new("origin").required(true).args(["zip", "address"])))]
struct Cli {
    /// Zip code for search
    #[arg(long)]
    zip: Option<String>,
    /// Address for search
    #[arg(long)]
    address: Option<String>,
    /// Distance units
    #[arg(long, value_enum, default_value_t = Units::Mi)]
    units: Units,
    /// Output format
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
    /// Store catalog CSV (overrides FINDSTORE_STORES_PATH)
    #[arg(long)]
    stores: Option<PathBuf>,
    /// Zip gazetteer TSV (overrides FINDSTORE_GAZETTEER_PATH)
    #[arg(long)]
    gazetteer: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Units {
    Mi,
    Km,
}

impl From<Units> for DistanceUnit {
    fn from(units: Units) -> Self {
        match units {
            Units::Mi => DistanceUnit::Miles,
            Units::Km => DistanceUnit::Kilometers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
}

impl From<Output> for OutputFormat {
    fn from(output: Output) -> Self {
        match output {
            Output::Text => OutputFormat::Text,
            Output::Json => OutputFormat::Structured,
        }
    }
}

impl Cli {
    /// Combines parsed arguments with configured dataset paths.
    fn into_request(self, config: &findstore_core::AppConfig) -> anyhow::Result<FindRequest> {
        let origin = match (self.zip, self.address) {
            (Some(zip), None) => OriginSpec::Zip(zip),
            (None, Some(address)) => OriginSpec::Address(address),
            // clap's "origin" group already enforces this
            _ => anyhow::bail!("exactly one of --zip or --address is required"),
        };

        Ok(FindRequest {
            origin,
            unit: self.units.into(),
            format: self.output.into(),
            stores_path: self.stores.unwrap_or_else(|| config.stores_path.clone()),
            gazetteer_path: self
                .gazetteer
                .unwrap_or_else(|| config.gazetteer_path.clone()),
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = findstore_core::load_app_config()?;

    // stdout carries only the result, so logs go to stderr.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let request = cli.into_request(&config)?;
    let rendered = find::run_find(&request, &config).await?;
    println!("{rendered}");

    Ok(())
}

#[cfg(test)]
mod tests;
