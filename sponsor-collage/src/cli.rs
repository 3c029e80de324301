//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::sources::DecodePolicy;

/// Assemble a directory of logos into a single grid collage.
///
/// Every value can also be set through a `COLLAGE_*` environment variable
/// (or a `.env` file); flags take precedence.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sponsor-collage", version)]
pub struct Args {
    /// Directory of logo images [env: COLLAGE_SOURCE_DIR, default: sponsors]
    pub source_dir: Option<PathBuf>,

    /// Output PNG path [env: COLLAGE_OUTPUT, default: out.png]
    pub output: Option<PathBuf>,

    /// Image drawn into empty cells [env: COLLAGE_PADDING_IMAGE]
    #[arg(long)]
    pub padding_image: Option<PathBuf>,

    /// Fill color for empty cells when no padding image is set (#rrggbb or #rrggbbaa)
    #[arg(long)]
    pub padding_color: Option<String>,

    /// Edge length of one grid cell in pixels (16-2048)
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Shuffle seed; a time-based seed is used when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to handle images that fail to decode
    #[arg(long, value_enum)]
    pub on_decode_error: Option<DecodePolicy>,

    /// Print the planned layout as JSON instead of rendering
    #[arg(long)]
    pub dry_run: bool,
}
