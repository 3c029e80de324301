//! Runtime configuration resolved from CLI flags, environment and defaults.

use std::path::PathBuf;

use clap::ValueEnum;
use collage_render::{FilePadding, PaddingProvider, SolidPadding};
use image::Rgba;

use super::ConfigError;
use super::defaults::{
    CELL_SIZE, DRY_RUN, ON_DECODE_ERROR, OUTPUT, PADDING_COLOR, PADDING_IMAGE, SEED, SOURCE_DIR,
    get_default,
};
use super::validation::{parse_hex_color, validate_setting};
use crate::cli::Args;
use crate::sources::DecodePolicy;

/// Everything one collage run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageConfig {
    pub source_dir: PathBuf,
    pub output: PathBuf,
    pub padding_image: Option<PathBuf>,
    pub padding_color: Rgba<u8>,
    pub cell_size: u32,
    pub seed: Option<u64>,
    pub on_decode_error: DecodePolicy,
    pub dry_run: bool,
}

/// The built-in defaults table with no flags and no environment.
impl Default for CollageConfig {
    fn default() -> Self {
        Self::load_with(&Args::default(), |_| None).expect("built-in defaults are valid")
    }
}

impl CollageConfig {
    /// Load configuration from CLI flags with process environment overrides.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        Self::load_with(args, |key| std::env::var(key).ok())
    }

    /// Load configuration using `env` to look up environment values.
    ///
    /// CLI flags win over the environment, which wins over defaults.
    /// Empty environment values count as unset.
    pub fn load_with<F>(args: &Args, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Result<String, ConfigError> {
            let value = env(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| get_default(key).unwrap_or_default().to_string());
            check(key, &value)?;
            Ok(value)
        };

        let source_dir = match &args.source_dir {
            Some(dir) => {
                check(SOURCE_DIR, &dir.to_string_lossy())?;
                dir.clone()
            }
            None => PathBuf::from(g(SOURCE_DIR)?),
        };

        let output = match &args.output {
            Some(path) => {
                check(OUTPUT, &path.to_string_lossy())?;
                path.clone()
            }
            None => PathBuf::from(g(OUTPUT)?),
        };

        let padding_image = match &args.padding_image {
            Some(path) => Some(path.clone()),
            None => Some(g(PADDING_IMAGE)?)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        };

        let padding_color = {
            let raw = match &args.padding_color {
                Some(c) => {
                    check(PADDING_COLOR, c)?;
                    c.clone()
                }
                None => g(PADDING_COLOR)?,
            };
            parse_hex_color(&raw).ok_or_else(|| invalid(PADDING_COLOR, "unparseable color"))?
        };

        let cell_size = match args.cell_size {
            Some(size) => {
                check(CELL_SIZE, &size.to_string())?;
                size
            }
            None => g(CELL_SIZE)?
                .parse()
                .map_err(|_| invalid(CELL_SIZE, "must be an integer"))?,
        };

        let seed = match args.seed {
            Some(seed) => Some(seed),
            None => {
                let raw = g(SEED)?;
                if raw.is_empty() {
                    None
                } else {
                    Some(raw.parse().map_err(|_| invalid(SEED, "must be an integer"))?)
                }
            }
        };

        let on_decode_error = match args.on_decode_error {
            Some(policy) => policy,
            None => DecodePolicy::from_str(&g(ON_DECODE_ERROR)?, false)
                .map_err(|e| invalid(ON_DECODE_ERROR, &e))?,
        };

        let dry_run = args.dry_run || g(DRY_RUN)? == "true";

        Ok(Self {
            source_dir,
            output,
            padding_image,
            padding_color,
            cell_size,
            seed,
            on_decode_error,
            dry_run,
        })
    }

    /// Padding provider for this run: the padding image if set, else a solid fill.
    pub fn padding_provider(&self) -> Box<dyn PaddingProvider> {
        match &self.padding_image {
            Some(path) => Box::new(FilePadding::new(path)),
            None => Box::new(SolidPadding::new(self.padding_color)),
        }
    }
}

fn check(key: &str, value: &str) -> Result<(), ConfigError> {
    validate_setting(key, value).map_err(|reason| invalid(key, &reason))
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
