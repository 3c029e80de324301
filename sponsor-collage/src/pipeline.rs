//! One collage run: list, shuffle, decode, lay out, render, write.

use std::path::{Path, PathBuf};

use anyhow::Context;
use collage_render::PaddingProvider;
use grid_layout::Layout;
use rand::Rng;
use serde::{Serialize, Serializer};
use tracing::info;

use crate::config::CollageConfig;
use crate::sources::{list_sources, load_images, seeded_rng, shuffle_sources};

/// What a run did, printed as JSON for dry runs.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub image_count: usize,
    /// Decoded sources, index-aligned with the layout placements.
    #[serde(serialize_with = "lossy_paths")]
    pub sources: Vec<PathBuf>,
    #[serde(serialize_with = "lossy_paths")]
    pub skipped: Vec<PathBuf>,
    pub layout: Layout,
    /// `None` for dry runs.
    #[serde(serialize_with = "lossy_path")]
    pub output: Option<PathBuf>,
}

// File names need not be UTF-8; the report replaces invalid bytes.
fn lossy_paths<S: Serializer>(paths: &[PathBuf], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|p| p.to_string_lossy()))
}

fn lossy_path<S: Serializer>(path: &Option<PathBuf>, serializer: S) -> Result<S::Ok, S::Error> {
    match path.as_deref().map(Path::to_string_lossy) {
        Some(p) => serializer.serialize_some(&p),
        None => serializer.serialize_none(),
    }
}

/// Run with the RNG and padding provider described by `config`.
pub fn run(config: &CollageConfig) -> anyhow::Result<RunSummary> {
    let (mut rng, seed) = seeded_rng(config.seed);
    info!(seed, "Shuffle seed");
    let padding = config.padding_provider();
    run_with(config, &mut rng, seed, padding.as_ref())
}

/// Run with an injected RNG and padding provider.
///
/// `seed` is only recorded in the summary.
pub fn run_with<R: Rng + ?Sized>(
    config: &CollageConfig,
    rng: &mut R,
    seed: u64,
    padding: &dyn PaddingProvider,
) -> anyhow::Result<RunSummary> {
    let mut paths = list_sources(&config.source_dir)?;
    shuffle_sources(&mut paths, rng);

    let loaded = load_images(&paths, config.on_decode_error)
        .with_context(|| format!("loading logos from {}", config.source_dir.display()))?;
    let layout = grid_layout::layout(loaded.images.len())?;
    info!(
        images = loaded.images.len(),
        width = layout.plan.width,
        height = layout.plan.height,
        remainder = layout.plan.remainder,
        "Layout planned"
    );

    let output = if config.dry_run {
        info!("Dry run, skipping render");
        None
    } else {
        let canvas = collage_render::render(&layout, &loaded.images, padding, config.cell_size)?;
        collage_render::write_png(&canvas, &config.output)?;
        Some(config.output.clone())
    };

    Ok(RunSummary {
        seed,
        image_count: loaded.images.len(),
        sources: loaded.paths,
        skipped: loaded.skipped,
        layout,
        output,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
