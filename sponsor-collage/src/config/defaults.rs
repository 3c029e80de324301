//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const SOURCE_DIR: &str = "COLLAGE_SOURCE_DIR";
pub const OUTPUT: &str = "COLLAGE_OUTPUT";
pub const PADDING_IMAGE: &str = "COLLAGE_PADDING_IMAGE";
pub const PADDING_COLOR: &str = "COLLAGE_PADDING_COLOR";
pub const CELL_SIZE: &str = "COLLAGE_CELL_SIZE";
pub const SEED: &str = "COLLAGE_SEED";
pub const ON_DECODE_ERROR: &str = "COLLAGE_ON_DECODE_ERROR";
pub const DRY_RUN: &str = "COLLAGE_DRY_RUN";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (SOURCE_DIR, "sponsors", "Directory holding the logo images"),
    (OUTPUT, "out.png", "Path of the PNG collage to write"),
    (PADDING_IMAGE, "", "Image drawn into empty cells (solid color when empty)"),
    (PADDING_COLOR, "#ffffff", "Fill color for empty cells without a padding image"),
    (CELL_SIZE, "200", "Edge length of one grid cell in pixels"),
    (SEED, "", "Shuffle seed (time-based when empty)"),
    (ON_DECODE_ERROR, "abort", "What to do with undecodable images: abort or skip"),
    (DRY_RUN, "false", "Print the layout as JSON instead of rendering"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
