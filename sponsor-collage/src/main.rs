//! Logo collage builder.
//!
//! Reads every image in the source directory, shuffles them, lays them
//! out on a padded grid and writes a single PNG.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sponsor_collage_lib::cli::Args;
use sponsor_collage_lib::{CollageConfig, load_dotenv, run};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    load_dotenv();

    // Errors are reported here only, not again by the runtime.
    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Collage failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let config = CollageConfig::load(args)?;
    tracing::debug!(?config, "Configuration loaded");

    let summary = run(&config)?;

    if config.dry_run {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        tracing::info!(
            images = summary.image_count,
            skipped = summary.skipped.len(),
            seed = summary.seed,
            "Done"
        );
    }
    Ok(())
}
