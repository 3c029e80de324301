use std::path::Path;

use collage_render::SolidPadding;
use grid_layout::{Cell, GridError};
use image::{GenericImageView, Rgba, RgbaImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use super::*;
use crate::sources::DecodePolicy;

const PAD: Rgba<u8> = Rgba([0, 255, 0, 255]);

fn logo_dir(count: usize) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..count {
        RgbaImage::from_pixel(8 + i as u32, 8, Rgba([i as u8 * 5, 0, 0, 255]))
            .save(dir.path().join(format!("logo-{i:02}.png")))
            .unwrap();
    }
    dir
}

fn config_for(dir: &Path, out: &Path) -> CollageConfig {
    CollageConfig {
        source_dir: dir.to_path_buf(),
        output: out.to_path_buf(),
        cell_size: 16,
        seed: Some(7),
        padding_color: PAD,
        ..CollageConfig::default()
    }
}

#[test]
fn renders_expected_canvas() {
    let logos = logo_dir(9);
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("out.png");

    let summary = run(&config_for(logos.path(), &out)).unwrap();
    assert_eq!(summary.seed, 7);
    assert_eq!(summary.image_count, 9);
    assert_eq!(summary.output.as_deref(), Some(out.as_path()));

    let img = image::open(&out).unwrap();
    assert_eq!(img.dimensions(), (5 * 16, 2 * 16));
    // remainder 1: right padding in the last cell
    let (x, y) = Cell::new(4, 1).origin(16);
    assert_eq!(img.to_rgba8().get_pixel(x + 8, y + 8), &PAD);
}

#[test]
fn seeded_runs_are_reproducible() {
    let logos = logo_dir(12);
    let mut config = config_for(logos.path(), Path::new("unused.png"));
    config.dry_run = true;

    let first = run(&config).unwrap();
    let second = run(&config).unwrap();
    assert_eq!(first.sources, second.sources);
}

#[test]
fn injected_rng_controls_order() {
    let logos = logo_dir(6);
    let mut config = config_for(logos.path(), Path::new("unused.png"));
    config.dry_run = true;

    let pad = SolidPadding::new(PAD);
    let a = run_with(&config, &mut StdRng::seed_from_u64(1), 1, &pad).unwrap();
    let b = run_with(&config, &mut StdRng::seed_from_u64(1), 1, &pad).unwrap();
    assert_eq!(a.sources, b.sources);
    assert_eq!(a.sources.len(), 6);
}

#[test]
fn dry_run_writes_nothing() {
    let logos = logo_dir(4);
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("out.png");
    let mut config = config_for(logos.path(), &out);
    config.dry_run = true;

    let summary = run(&config).unwrap();
    assert!(summary.output.is_none());
    assert!(!out.exists());
    assert_eq!(summary.layout.plan.width, 6);
    assert_eq!(summary.layout.padding.left, Some(Cell::new(0, 0)));

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["layout"]["plan"]["remainder"], 2);
    assert_eq!(json["layout"]["placements"][0]["cell"]["x"], 1);
    assert_eq!(json["seed"], 7);
}

#[test]
fn too_many_logos_is_a_defined_error() {
    let logos = logo_dir(31);
    let mut config = config_for(logos.path(), Path::new("unused.png"));
    config.dry_run = true;

    let err = run(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GridError>(),
        Some(&GridError::UnsupportedCount { count: 31, max: 30 })
    );
}

#[test]
fn empty_dir_fails() {
    let logos = tempfile::tempdir().unwrap();
    let config = config_for(logos.path(), Path::new("unused.png"));
    assert!(run(&config).is_err());
}

#[test]
fn missing_source_dir_fails() {
    let logos = tempfile::tempdir().unwrap();
    let config = config_for(&logos.path().join("missing"), Path::new("unused.png"));
    assert!(run(&config).is_err());
}

#[test]
fn skip_policy_reports_skipped() {
    let logos = logo_dir(3);
    std::fs::write(logos.path().join("broken.png"), b"nope").unwrap();
    let mut config = config_for(logos.path(), Path::new("unused.png"));
    config.dry_run = true;
    config.on_decode_error = DecodePolicy::Skip;

    let summary = run(&config).unwrap();
    assert_eq!(summary.image_count, 3);
    assert_eq!(summary.skipped.len(), 1);
}

#[test]
fn unwritable_output_fails() {
    let logos = logo_dir(2);
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("no-such-dir").join("out.png");

    assert!(run(&config_for(logos.path(), &out)).is_err());
}

#[cfg(unix)]
#[test]
fn dry_run_report_tolerates_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let logos = logo_dir(2);
    let odd = logos.path().join(OsStr::from_bytes(b"logo-\xff.png"));
    RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]))
        .save_with_format(&odd, image::ImageFormat::Png)
        .unwrap();
    let mut config = config_for(logos.path(), Path::new("unused.png"));
    config.dry_run = true;

    let summary = run(&config).unwrap();
    assert_eq!(summary.image_count, 3);

    let json = serde_json::to_value(&summary).unwrap();
    let names: Vec<&str> = json["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.iter().any(|n| n.ends_with("logo-\u{FFFD}.png")));
    assert!(json["output"].is_null());
}
