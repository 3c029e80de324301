//! Logo source directory: listing, ordering and decoding.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// What to do with a file that cannot be decoded as an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DecodePolicy {
    /// Stop the whole run.
    #[default]
    Abort,
    /// Log a warning and leave the file out of the collage.
    Skip,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("No decodable images found")]
    NoImages,
}

/// Decoded logos, in the order they will be placed.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub images: Vec<DynamicImage>,
    pub paths: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// List the regular files in `dir`, sorted by file name.
///
/// Subdirectories and dotfiles are ignored.
pub fn list_sources(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let list_err = |source: std::io::Error| SourceError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        let hidden = path
            .file_name()
            .is_some_and(|n| n.as_encoded_bytes().starts_with(b"."));
        if hidden || !path.is_file() {
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    debug!(dir = %dir.display(), count = paths.len(), "Listed logo sources");
    Ok(paths)
}

/// Shuffle `paths` in place using `rng`.
pub fn shuffle_sources<R: Rng + ?Sized>(paths: &mut [PathBuf], rng: &mut R) {
    paths.shuffle(rng);
}

/// Build the shuffle RNG, returning it with the seed actually used.
///
/// Without an explicit seed the current time is used, so the seed is
/// returned for logging and reproduction.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(time_seed);
    (StdRng::seed_from_u64(seed), seed)
}

fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

/// Decode every file in `paths`, in order.
pub fn load_images(paths: &[PathBuf], policy: DecodePolicy) -> Result<LoadedSources, SourceError> {
    let mut loaded = LoadedSources::default();

    for path in paths {
        match decode(path) {
            Ok(img) => {
                debug!(path = %path.display(), width = img.width(), height = img.height(), "Decoded logo");
                loaded.images.push(img);
                loaded.paths.push(path.clone());
            }
            Err(source) => match policy {
                DecodePolicy::Abort => {
                    return Err(SourceError::Decode {
                        path: path.clone(),
                        source,
                    });
                }
                DecodePolicy::Skip => {
                    warn!(path = %path.display(), error = %source, "Skipping undecodable logo");
                    loaded.skipped.push(path.clone());
                }
            },
        }
    }

    if loaded.images.is_empty() {
        return Err(SourceError::NoImages);
    }
    info!(
        loaded = loaded.images.len(),
        skipped = loaded.skipped.len(),
        "Logos loaded"
    );
    Ok(loaded)
}

/// Decode by content rather than extension.
fn decode(path: &Path) -> Result<DynamicImage, image::ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
