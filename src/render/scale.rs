//! Logo scaling.
//!
//! Resizes the decoded logo per canvas so its longer edge equals
//! `logo_scale × min(canvas_width, canvas_height)`, preserving aspect
//! ratio, using a Lanczos3 convolution.

use crate::error::BannerError;
use fast_image_resize::{FilterType, Image, PixelType, ResizeAlg, Resizer};
use image::RgbaImage;
use std::num::NonZeroU32;

/// Target dimensions for the logo on a given canvas.
///
/// Returns (width, height) with the longer edge equal to
/// `logo_scale × min(canvas_w, canvas_h)`, rounded; with `allow_upscale`
/// off, the longer edge is additionally clamped to the source size.
pub fn logo_target_size(
    src_width: u32,
    src_height: u32,
    logo_scale: f32,
    canvas_width: u32,
    canvas_height: u32,
    allow_upscale: bool,
) -> (u32, u32) {
    let src_long = src_width.max(src_height).max(1);
    let mut target_long = (logo_scale * canvas_width.min(canvas_height) as f32).round() as u32;
    target_long = target_long.max(1);
    if !allow_upscale {
        target_long = target_long.min(src_long);
    }

    let ratio = target_long as f32 / src_long as f32;
    if src_width >= src_height {
        let h = (src_height as f32 * ratio).round() as u32;
        (target_long, h.max(1))
    } else {
        let w = (src_width as f32 * ratio).round() as u32;
        (w.max(1), target_long)
    }
}

/// Resize the logo to fit a canvas, preserving aspect ratio.
pub fn scale_logo(
    logo: &RgbaImage,
    logo_scale: f32,
    canvas_width: u32,
    canvas_height: u32,
    allow_upscale: bool,
) -> Result<RgbaImage, BannerError> {
    let (target_w, target_h) = logo_target_size(
        logo.width(),
        logo.height(),
        logo_scale,
        canvas_width,
        canvas_height,
        allow_upscale,
    );

    if (target_w, target_h) == logo.dimensions() {
        return Ok(logo.clone());
    }

    resize_rgba(logo, target_w, target_h)
}

/// Lanczos3 resize of an RGBA buffer.
fn resize_rgba(img: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage, BannerError> {
    let src_width = NonZeroU32::new(img.width())
        .ok_or_else(|| BannerError::render("logo width is 0"))?;
    let src_height = NonZeroU32::new(img.height())
        .ok_or_else(|| BannerError::render("logo height is 0"))?;
    let dst_width = NonZeroU32::new(target_w)
        .ok_or_else(|| BannerError::render("target logo width is 0"))?;
    let dst_height = NonZeroU32::new(target_h)
        .ok_or_else(|| BannerError::render("target logo height is 0"))?;

    let src_image = Image::from_vec_u8(
        src_width,
        src_height,
        img.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(|e| BannerError::render(format!("failed to create resize source: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(&src_image.view(), &mut dst_image.view_mut())
        .map_err(|e| BannerError::render(format!("resize operation failed: {:?}", e)))?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| BannerError::render("failed to build resized logo buffer"))
}
