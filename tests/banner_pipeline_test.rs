//! End-to-end tests for the banner export pipeline.
//!
//! These run the real pipeline against temp directories, using small
//! custom canvases so the pixel work stays cheap. Full-size preset
//! rendering is exercised by the ignored kit test.

use bannersmith::error::BannerError;
use bannersmith::output::{run, run_sizes};
use bannersmith::preset::{Preset, SizeSpec};
use bannersmith::request::{BannerRequest, ExifFields};
use image::{Rgba, RgbaImage};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const SMALL_SIZES: &[SizeSpec] = &[
    SizeSpec {
        label: "Card_160x84",
        width: 160,
        height: 84,
        text_shift: 0.0,
    },
    SizeSpec {
        label: "Story_90x160",
        width: 90,
        height: 160,
        text_shift: -0.08,
    },
];

fn write_test_logo(dir: &Path) -> PathBuf {
    let logo = RgbaImage::from_fn(40, 40, |x, _| {
        if x < 20 {
            Rgba([220, 40, 40, 255])
        } else {
            Rgba([40, 60, 220, 255])
        }
    });
    let path = dir.join("logo.png");
    logo.save(&path).unwrap();
    path
}

fn request(logo_path: PathBuf, outdir: PathBuf) -> BannerRequest {
    BannerRequest {
        preset: Preset::FinalKit,
        logo_path,
        title: "Conecta Libras".to_string(),
        subtitle: "Comunicação inclusiva sem barreiras".to_string(),
        logo_scale: 0.2,
        subtitle_gap: 1.6,
        text_shift: None,
        margin: 8,
        dark: false,
        palette_from_logo: true,
        allow_upscale_logo: true,
        jpg_quality: 92,
        title_fonts: vec![],
        subtitle_fonts: vec![],
        exif: ExifFields::default(),
        outdir,
        zip: false,
    }
}

fn dir_file_names(dir: &Path) -> HashSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_run_writes_png_and_jpg_per_size() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(write_test_logo(dir.path()), dir.path().join("out"));

    let summary = run_sizes(&req, SMALL_SIZES).unwrap();
    assert_eq!(summary.files.len(), SMALL_SIZES.len() * 2);
    assert!(summary.archive.is_none());

    let names = dir_file_names(&req.outdir);
    let expected: HashSet<String> = SMALL_SIZES
        .iter()
        .flat_map(|s| [format!("{}.png", s.label), format!("{}.jpg", s.label)])
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_outputs_decode_to_the_declared_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(write_test_logo(dir.path()), dir.path().join("out"));
    run_sizes(&req, SMALL_SIZES).unwrap();

    for spec in SMALL_SIZES {
        for ext in ["png", "jpg"] {
            let path = req.outdir.join(format!("{}.{}", spec.label, ext));
            let decoded = image::open(&path).unwrap();
            assert_eq!(
                (decoded.width(), decoded.height()),
                (spec.width, spec.height),
                "{}",
                path.display()
            );
        }
    }
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_test_logo(dir.path());

    let req_a = request(logo.clone(), dir.path().join("out_a"));
    let req_b = request(logo, dir.path().join("out_b"));
    run_sizes(&req_a, SMALL_SIZES).unwrap();
    run_sizes(&req_b, SMALL_SIZES).unwrap();

    for spec in SMALL_SIZES {
        let name = format!("{}.png", spec.label);
        let a = std::fs::read(req_a.outdir.join(&name)).unwrap();
        let b = std::fs::read(req_b.outdir.join(&name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", name);
    }
}

#[test]
fn test_zip_archive_matches_written_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut req = request(write_test_logo(dir.path()), dir.path().join("out"));
    req.zip = true;

    let summary = run_sizes(&req, SMALL_SIZES).unwrap();
    let archive_path = summary.archive.unwrap();
    assert_eq!(archive_path, req.outdir.join("final_kit.zip"));

    let file = std::fs::File::open(&archive_path).unwrap();
    let mut zip = zip::ZipArchive::new(file).unwrap();
    assert_eq!(zip.len(), summary.files.len());

    let entry_names: HashSet<String> = (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect();
    let written_names: HashSet<String> = summary
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entry_names, written_names);

    // Loose files are kept alongside the archive
    for path in &summary.files {
        assert!(path.exists());
    }
}

#[test]
fn test_exif_fields_present_when_supplied() {
    let dir = tempfile::tempdir().unwrap();
    let mut req = request(write_test_logo(dir.path()), dir.path().join("out"));
    req.exif = ExifFields {
        artist: Some("WSS Studio Art".to_string()),
        copyright: Some("© 2025 WSS Studio Art".to_string()),
        description: Some("Conecta Libras banner".to_string()),
    };

    run_sizes(&req, SMALL_SIZES).unwrap();

    for spec in SMALL_SIZES {
        let jpg = std::fs::read(req.outdir.join(format!("{}.jpg", spec.label))).unwrap();
        let parsed = exif::Reader::new()
            .read_from_container(&mut Cursor::new(&jpg))
            .unwrap();
        let artist = parsed
            .get_field(exif::Tag::Artist, exif::In::PRIMARY)
            .expect("Artist field missing");
        match &artist.value {
            exif::Value::Ascii(parts) => {
                assert_eq!(String::from_utf8_lossy(&parts[0]), "WSS Studio Art")
            }
            other => panic!("unexpected Artist value: {:?}", other),
        }
    }
}

#[test]
fn test_exif_absent_when_not_supplied() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(write_test_logo(dir.path()), dir.path().join("out"));
    run_sizes(&req, SMALL_SIZES).unwrap();

    let jpg = std::fs::read(req.outdir.join("Card_160x84.jpg")).unwrap();
    assert!(exif::Reader::new()
        .read_from_container(&mut Cursor::new(&jpg))
        .is_err());
}

#[test]
fn test_missing_logo_writes_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(
        dir.path().join("nonexistent.png"),
        dir.path().join("out"),
    );

    let err = run_sizes(&req, SMALL_SIZES).unwrap_err();
    assert!(matches!(err, BannerError::Asset(_)));

    // The directory itself may exist, but must be empty
    assert!(dir_file_names(&req.outdir).is_empty());
}

#[test]
fn test_dark_theme_produces_different_files() {
    let dir = tempfile::tempdir().unwrap();
    let logo = write_test_logo(dir.path());

    let light = request(logo.clone(), dir.path().join("light"));
    let mut dark = request(logo, dir.path().join("dark"));
    dark.dark = true;

    run_sizes(&light, SMALL_SIZES).unwrap();
    run_sizes(&dark, SMALL_SIZES).unwrap();

    let a = std::fs::read(light.outdir.join("Card_160x84.png")).unwrap();
    let b = std::fs::read(dark.outdir.join("Card_160x84.png")).unwrap();
    assert_ne!(a, b);
}

// Renders every final_kit size at full resolution, including the 4800x2520
// master; takes a while in debug builds.
#[test]
#[ignore]
fn test_final_kit_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut req = request(write_test_logo(dir.path()), dir.path().join("out"));
    req.zip = true;

    let summary = run(&req).unwrap();
    assert_eq!(summary.files.len(), Preset::FinalKit.sizes().len() * 2);

    let names = dir_file_names(&req.outdir);
    for spec in Preset::FinalKit.sizes() {
        assert!(names.contains(&format!("{}.png", spec.label)));
        assert!(names.contains(&format!("{}.jpg", spec.label)));
    }
    assert!(names.contains("final_kit.zip"));
}
