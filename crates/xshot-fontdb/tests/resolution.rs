//! Font resolution against real files on disk

use std::fs;
use std::path::Path;

use xshot_core::{FontFace, FontFamily, FontStyle};
use xshot_fontdb::{FontResolver, Platform};

const DEJAVU_SANS: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[test]
fn test_missing_candidates_fall_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = FontResolver::isolated()
        .with_font_file(FontFamily::Serif, dir.path().join("nope.ttf"))
        .with_assets_dir(dir.path());

    let handle = resolver.resolve(FontFamily::Serif, FontStyle::Italic, 18.0);
    assert!(handle.is_builtin());
    assert_eq!(resolver.loaded_count(), 0);
}

#[test]
fn test_corrupt_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("Inter-Regular.ttf");
    fs::write(&corrupt, b"definitely not a font").unwrap();

    let resolver = FontResolver::isolated().with_assets_dir(dir.path());
    assert!(resolver
        .candidates(FontFamily::Sans, FontStyle::Normal)
        .contains(&corrupt));

    // Resolving twice reads the broken file once and never fails
    for _ in 0..2 {
        let handle = resolver.resolve(FontFamily::Sans, FontStyle::Normal, 22.0);
        assert!(handle.is_builtin());
    }
    assert_eq!(resolver.loaded_count(), 0);
}

#[test]
fn test_scan_dirs_without_matches() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
    fs::write(dir.path().join("nested/deeper/readme.txt"), b"no fonts here").unwrap();

    let resolver = FontResolver::isolated().with_scan_dirs(vec![dir.path().to_path_buf()]);
    let handle = resolver.resolve(FontFamily::Minimal, FontStyle::Normal, 12.0);
    assert!(handle.is_builtin());
}

#[test]
fn test_scan_finds_bundled_name_in_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();
    // Right name, wrong contents: found by the scan, rejected by the loader
    fs::write(nested.join("Poppins-Regular.ttf"), b"garbage").unwrap();

    let resolver = FontResolver::isolated().with_scan_dirs(vec![dir.path().to_path_buf()]);
    let handle = resolver.resolve(FontFamily::Modern, FontStyle::Normal, 12.0);
    assert!(handle.is_builtin());
}

#[test]
fn test_real_system_font_loads_when_installed() {
    if !Path::new(DEJAVU_SANS).is_file() {
        eprintln!("skipping: {} not installed", DEJAVU_SANS);
        return;
    }

    let resolver = FontResolver::isolated().with_font_file(FontFamily::Sans, DEJAVU_SANS);
    let handle = resolver.resolve(FontFamily::Sans, FontStyle::Normal, 20.0);
    assert!(!handle.is_builtin());
    assert_eq!(handle.face().name(), "DejaVuSans.ttf");

    let metrics = handle.metrics();
    assert!(metrics.ascent > 0.0);
    assert!(metrics.descent > 0.0);

    let short = handle.measure("XShot");
    let long = handle.measure("Shot by XShot");
    assert!(long.width > short.width);
    assert_eq!(long.height, short.height);
    assert_eq!(resolver.loaded_count(), 1);
}

#[test]
fn test_platform_detection_is_stable() {
    assert_eq!(Platform::current(), Platform::current());
    assert!(!Platform::Linux.system_font_dirs().is_empty());
}
