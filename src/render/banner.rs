//! Per-size banner assembly.
//!
//! Builds one composited banner for one preset entry: gradient background,
//! centered logo with a soft drop shadow, title below the logo, subtitle
//! below the title. The logo+text block is centered vertically and then
//! shifted by the size's text shift.

use crate::error::BannerError;
use crate::preset::SizeSpec;
use crate::render::compositor::{blend_layer, drop_shadow};
use crate::render::fonts::FontSet;
use crate::render::gradient::{
    make_background, DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START,
};
use crate::render::palette::derive_gradient;
use crate::render::scale::scale_logo;
use crate::render::text::{fit_size, line_height, render_line};
use crate::request::BannerRequest;
use image::io::Reader as ImageReader;
use image::RgbaImage;

/// Title size ceiling: 112px on the reference 1200px-wide canvas.
const TITLE_MAX_RATIO: f32 = 112.0 / 1200.0;
/// Title may not exceed this fraction of the canvas height.
const TITLE_MAX_HEIGHT_RATIO: f32 = 0.22;
const TITLE_MIN_SIZE: f32 = 32.0;
const SUBTITLE_MIN_SIZE: f32 = 18.0;
/// Subtitle ceiling relative to the fitted title size.
const SUBTITLE_RATIO: f32 = 0.35;
const TEXT_COLOR: [u8; 3] = [255, 255, 255];
const SHADOW_COLOR: [u8; 3] = [0, 0, 0];
/// Drop shadow translucency and blur for the logo.
const LOGO_SHADOW_ALPHA: u8 = 90;
const LOGO_SHADOW_SIGMA: f32 = 6.0;
const LOGO_SHADOW_OFFSET: i32 = 4;

/// Per-run immutable rendering state, shared across all sizes.
///
/// The logo is decoded once and the gradient endpoints are derived once;
/// every size then renders as a pure function of this context and its
/// `SizeSpec`.
#[derive(Debug)]
pub struct RenderContext {
    logo: RgbaImage,
    fonts: FontSet,
    gradient: ([u8; 3], [u8; 3]),
}

impl RenderContext {
    /// Decode the logo and resolve fonts and gradient endpoints.
    ///
    /// Fails fast on an unreadable or undecodable logo, before any size
    /// is rendered.
    pub fn prepare(request: &BannerRequest) -> Result<Self, BannerError> {
        let logo = ImageReader::open(&request.logo_path)
            .map_err(|e| {
                BannerError::asset(format!("{}: {}", request.logo_path.display(), e))
            })?
            .with_guessed_format()
            .map_err(|e| {
                BannerError::asset(format!("{}: {}", request.logo_path.display(), e))
            })?
            .decode()
            .map_err(|e| {
                BannerError::asset(format!("{}: {}", request.logo_path.display(), e))
            })?
            .to_rgba8();

        let fonts = FontSet::load(&request.title_fonts, &request.subtitle_fonts)?;

        let gradient = if request.palette_from_logo {
            match derive_gradient(&logo) {
                Some(pair) => {
                    tracing::debug!(start = ?pair.0, end = ?pair.1, "Gradient derived from logo");
                    pair
                }
                None => {
                    tracing::debug!("Logo palette unusable, keeping default gradient");
                    (DEFAULT_GRADIENT_START, DEFAULT_GRADIENT_END)
                }
            }
        } else {
            (DEFAULT_GRADIENT_START, DEFAULT_GRADIENT_END)
        };

        Ok(RenderContext {
            logo,
            fonts,
            gradient,
        })
    }
}

/// Render one banner for one preset entry.
pub fn render_banner(
    ctx: &RenderContext,
    request: &BannerRequest,
    size: &SizeSpec,
) -> Result<RgbaImage, BannerError> {
    let w = size.width;
    let h = size.height;
    let (start, end) = ctx.gradient;

    let mut canvas = make_background(w, h, start, end, request.dark);

    let logo = scale_logo(
        &ctx.logo,
        request.logo_scale,
        w,
        h,
        request.allow_upscale_logo,
    )?;

    // Fit text to the safe width
    let safe_w = w.saturating_sub(request.margin * 2).max(1);
    let title_max = (w as f32 * TITLE_MAX_RATIO)
        .min(h as f32 * TITLE_MAX_HEIGHT_RATIO)
        .max(TITLE_MIN_SIZE);
    let title_size = fit_size(
        &ctx.fonts.title,
        &request.title,
        safe_w,
        title_max,
        TITLE_MIN_SIZE,
    );
    let subtitle_max = (SUBTITLE_RATIO * title_size).max(28.0);
    let subtitle_size = fit_size(
        &ctx.fonts.subtitle,
        &request.subtitle,
        safe_w,
        subtitle_max,
        SUBTITLE_MIN_SIZE,
    );

    let title_img = render_line(&ctx.fonts.title, &request.title, title_size, TEXT_COLOR)?;
    let title_shadow = render_line(&ctx.fonts.title, &request.title, title_size, SHADOW_COLOR)?;
    let subtitle_img = render_line(
        &ctx.fonts.subtitle,
        &request.subtitle,
        subtitle_size,
        TEXT_COLOR,
    )?;
    let subtitle_shadow = render_line(
        &ctx.fonts.subtitle,
        &request.subtitle,
        subtitle_size,
        SHADOW_COLOR,
    )?;

    // Vertical layout: logo, then title a margin below, then the subtitle
    // at subtitle_gap title line heights below the title top.
    let title_line = line_height(&ctx.fonts.title, title_size);
    let subtitle_offset = (request.subtitle_gap * title_line).round() as i32;
    let block_h = logo.height() as i32
        + request.margin as i32
        + subtitle_offset
        + subtitle_img.height() as i32;

    let shift = request.text_shift.unwrap_or(size.text_shift);
    let mut block_top = (h as i32 - block_h) / 2;
    block_top += (shift * h as f32).round() as i32;

    let logo_x = (w as i32 - logo.width() as i32) / 2;
    let logo_y = block_top;
    let title_x = (w as i32 - title_img.width() as i32) / 2;
    let title_y = block_top + logo.height() as i32 + request.margin as i32;
    let subtitle_x = (w as i32 - subtitle_img.width() as i32) / 2;
    let subtitle_y = title_y + subtitle_offset;

    let shadow = drop_shadow(&logo, LOGO_SHADOW_ALPHA, LOGO_SHADOW_SIGMA);
    blend_layer(
        &mut canvas,
        &shadow,
        logo_x + LOGO_SHADOW_OFFSET,
        logo_y + LOGO_SHADOW_OFFSET,
    );
    blend_layer(&mut canvas, &logo, logo_x, logo_y);

    blend_layer(&mut canvas, &title_shadow, title_x + 2, title_y + 3);
    blend_layer(&mut canvas, &title_img, title_x, title_y);
    blend_layer(&mut canvas, &subtitle_shadow, subtitle_x + 1, subtitle_y + 2);
    blend_layer(&mut canvas, &subtitle_img, subtitle_x, subtitle_y);

    Ok(canvas)
}
