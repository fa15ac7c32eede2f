//! Immutable configuration for one generation run.

use crate::preset::Preset;
use std::path::PathBuf;

/// EXIF metadata fields to embed into JPG outputs.
///
/// PNG outputs never carry metadata; when every field is `None` the JPGs are
/// written without an EXIF segment at all.
#[derive(Debug, Clone, Default)]
pub struct ExifFields {
    pub artist: Option<String>,
    pub copyright: Option<String>,
    pub description: Option<String>,
}

impl ExifFields {
    pub fn is_empty(&self) -> bool {
        self.artist.is_none() && self.copyright.is_none() && self.description.is_none()
    }
}

/// The full configuration for one generation run.
///
/// Constructed once from CLI input and never mutated; every rendered banner
/// is a pure function of this request and a single `SizeSpec`.
#[derive(Debug, Clone)]
pub struct BannerRequest {
    pub preset: Preset,
    pub logo_path: PathBuf,
    pub title: String,
    pub subtitle: String,
    /// Logo size as a fraction of the shorter canvas edge, in (0, 1].
    pub logo_scale: f32,
    /// Gap between title and subtitle relative to the title line height.
    pub subtitle_gap: f32,
    /// Vertical shift override; `None` means each size's preset default.
    pub text_shift: Option<f32>,
    /// Outer margin in pixels.
    pub margin: u32,
    pub dark: bool,
    /// Derive the gradient endpoints from the logo palette.
    pub palette_from_logo: bool,
    /// Allow scaling the logo beyond its source size.
    pub allow_upscale_logo: bool,
    pub jpg_quality: u8,
    pub title_fonts: Vec<PathBuf>,
    pub subtitle_fonts: Vec<PathBuf>,
    pub exif: ExifFields,
    pub outdir: PathBuf,
    pub zip: bool,
}
