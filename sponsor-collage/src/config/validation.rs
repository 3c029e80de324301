//! Setting value validation.

use clap::ValueEnum;
use image::Rgba;
use regex::Regex;
use std::sync::LazyLock;

use super::defaults::{
    CELL_SIZE, DRY_RUN, ON_DECODE_ERROR, OUTPUT, PADDING_COLOR, SEED, SOURCE_DIR,
};
use crate::sources::DecodePolicy;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap());

/// Smallest and largest accepted cell edge in pixels.
pub const CELL_SIZE_RANGE: (u32, u32) = (16, 2048);

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        SOURCE_DIR => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        OUTPUT => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
            if !value.to_ascii_lowercase().ends_with(".png") {
                return Err("must be a .png path".into());
            }
        }
        PADDING_COLOR => {
            if !RE_HEX_COLOR.is_match(value) {
                return Err("must be #rrggbb or #rrggbbaa".into());
            }
        }
        CELL_SIZE => validate_int_range(value, CELL_SIZE_RANGE.0, CELL_SIZE_RANGE.1)?,
        SEED => {
            if !value.is_empty() {
                value
                    .parse::<u64>()
                    .map_err(|_| "must be an unsigned 64-bit integer")?;
            }
        }
        ON_DECODE_ERROR => {
            DecodePolicy::from_str(value, false).map_err(|_| "must be 'abort' or 'skip'")?;
        }
        DRY_RUN => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: u32, max: u32) -> Result<(), String> {
    let v: u32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

/// Parse a `#rrggbb` or `#rrggbbaa` color. Alpha defaults to opaque.
pub fn parse_hex_color(value: &str) -> Option<Rgba<u8>> {
    if !RE_HEX_COLOR.is_match(value) {
        return None;
    }
    let hex = &value[1..];
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}
