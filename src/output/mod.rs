//! Run pipeline: render each preset size, write PNG + JPG, package.
//!
//! Sizes are processed one at a time in preset order. A failure aborts the
//! run at that point; files already written for earlier sizes are left in
//! place (no rollback).

pub mod archive;

use crate::encode::{build_exif, embed_exif_jpeg, encode_jpeg, encode_png};
use crate::error::BannerError;
use crate::preset::SizeSpec;
use crate::render::{render_banner, RenderContext};
use crate::request::BannerRequest;
use std::path::PathBuf;

pub use archive::write_archive;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Every image file written, in write order.
    pub files: Vec<PathBuf>,
    /// The archive, when `--zip` was requested.
    pub archive: Option<PathBuf>,
}

/// Execute a full run over the request's preset.
pub fn run(request: &BannerRequest) -> Result<RunSummary, BannerError> {
    run_sizes(request, request.preset.sizes())
}

/// Execute a run over an explicit size list.
///
/// `run` delegates here with the preset's table; tests use it with small
/// canvases to keep the pixel work cheap.
pub fn run_sizes(
    request: &BannerRequest,
    sizes: &[SizeSpec],
) -> Result<RunSummary, BannerError> {
    std::fs::create_dir_all(&request.outdir)?;

    // Fails fast on a bad logo, before any file is written.
    let ctx = RenderContext::prepare(request)?;

    let exif_payload = if request.exif.is_empty() {
        None
    } else {
        Some(build_exif(&request.exif)?)
    };

    let mut files = Vec::with_capacity(sizes.len() * 2);
    for size in sizes {
        let banner = render_banner(&ctx, request, size)?;

        let png_path = request.outdir.join(format!("{}.png", size.label));
        std::fs::write(&png_path, encode_png(&banner)?)?;
        tracing::info!(
            file = %png_path.display(),
            width = size.width,
            height = size.height,
            "Banner written"
        );
        files.push(png_path);

        let mut jpeg = encode_jpeg(&banner, request.jpg_quality)?;
        if let Some(payload) = &exif_payload {
            jpeg = embed_exif_jpeg(&jpeg, payload)?;
        }
        let jpg_path = request.outdir.join(format!("{}.jpg", size.label));
        std::fs::write(&jpg_path, jpeg)?;
        tracing::info!(
            file = %jpg_path.display(),
            width = size.width,
            height = size.height,
            "Banner written"
        );
        files.push(jpg_path);
    }

    let archive = if request.zip {
        let archive_path = request
            .outdir
            .join(format!("{}.zip", request.preset.as_str()));
        write_archive(&archive_path, &files)?;
        tracing::info!(
            archive = %archive_path.display(),
            entries = files.len(),
            "Outputs archived"
        );
        Some(archive_path)
    } else {
        None
    };

    Ok(RunSummary { files, archive })
}
