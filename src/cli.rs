//! Command-line surface of the banner generator.
//!
//! The flag names form a stable interface: the campaign's wrapper script
//! invokes this binary once per preset with shared parameters, so renaming
//! or repurposing a flag is a breaking change.

use crate::error::BannerError;
use crate::preset::Preset;
use crate::request::{BannerRequest, ExifFields};
use clap::Parser;
use std::path::PathBuf;

/// Generate the Conecta Libras social banners in batch
#[derive(Parser, Debug)]
#[command(name = "make_banner")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Size preset to export
    #[arg(long, value_enum)]
    pub preset: Preset,

    /// Path to the logo image (PNG/JPG)
    #[arg(long)]
    pub logo: PathBuf,

    /// Main title text
    #[arg(long, default_value = "Conecta Libras")]
    pub title: String,

    /// Subtitle text
    #[arg(long, default_value = "Comunicação inclusiva sem barreiras")]
    pub subtitle: String,

    /// Logo size as a fraction of the shorter canvas edge, in (0, 1]
    #[arg(long, default_value_t = 0.2)]
    pub logo_scale: f32,

    /// Gap between title and subtitle relative to the title line height
    #[arg(long, default_value_t = 1.35)]
    pub subtitle_gap: f32,

    /// Vertical shift of the content block as a fraction of canvas height
    /// (negative moves up); overrides the per-size preset default
    #[arg(long, allow_hyphen_values = true)]
    pub text_shift: Option<f32>,

    /// Output directory for the exported files (created if absent)
    #[arg(long)]
    pub outdir: PathBuf,

    /// Bundle the run's files into a ZIP archive inside the output directory
    #[arg(long)]
    pub zip: bool,

    /// Dark theme (darker gradient background)
    #[arg(long)]
    pub dark: bool,

    /// Outer margin in pixels
    #[arg(long, default_value_t = 36)]
    pub margin: u32,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 92)]
    pub jpg_quality: u8,

    /// Disable deriving the gradient colors from the logo palette
    #[arg(long)]
    pub no_palette_from_logo: bool,

    /// Never scale the logo beyond its source size
    #[arg(long)]
    pub no_upscale_logo: bool,

    /// Custom title font path(s); the first one that loads is used
    #[arg(long)]
    pub title_font: Vec<PathBuf>,

    /// Custom subtitle font path(s); the first one that loads is used
    #[arg(long)]
    pub subtitle_font: Vec<PathBuf>,

    /// EXIF Artist field for JPG outputs
    #[arg(long)]
    pub exif_artist: Option<String>,

    /// EXIF Copyright field for JPG outputs
    #[arg(long)]
    pub exif_copyright: Option<String>,

    /// EXIF ImageDescription field for JPG outputs
    #[arg(long)]
    pub exif_description: Option<String>,
}

impl Args {
    /// Validate the arguments and build the immutable run configuration.
    pub fn into_request(self) -> Result<BannerRequest, BannerError> {
        if !(self.logo_scale > 0.0 && self.logo_scale <= 1.0) {
            return Err(BannerError::config(format!(
                "--logo-scale must be within (0, 1], got {}",
                self.logo_scale
            )));
        }
        if self.subtitle_gap < 0.0 {
            return Err(BannerError::config(format!(
                "--subtitle-gap must not be negative, got {}",
                self.subtitle_gap
            )));
        }
        if self.jpg_quality == 0 || self.jpg_quality > 100 {
            return Err(BannerError::config(format!(
                "--jpg-quality must be within 1-100, got {}",
                self.jpg_quality
            )));
        }

        Ok(BannerRequest {
            preset: self.preset,
            logo_path: self.logo,
            title: self.title,
            subtitle: self.subtitle,
            logo_scale: self.logo_scale,
            subtitle_gap: self.subtitle_gap,
            text_shift: self.text_shift,
            margin: self.margin,
            dark: self.dark,
            palette_from_logo: !self.no_palette_from_logo,
            allow_upscale_logo: !self.no_upscale_logo,
            jpg_quality: self.jpg_quality,
            title_fonts: self.title_font,
            subtitle_fonts: self.subtitle_font,
            exif: ExifFields {
                artist: self.exif_artist,
                copyright: self.exif_copyright,
                description: self.exif_description,
            },
            outdir: self.outdir,
            zip: self.zip,
        })
    }
}
