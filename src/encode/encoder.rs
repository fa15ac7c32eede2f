//! PNG and JPEG encoding.
//!
//! Every banner is written as PNG (lossless, RGBA) and JPEG (lossy, RGB).
//! JPEG has no alpha channel, so the RGBA canvas is flattened first; the
//! canvas is fully opaque by construction, making the flatten a plain
//! channel drop.

use crate::error::BannerError;
use image::RgbaImage;
use std::io::Cursor;

/// Encode a banner as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, BannerError> {
    use image::codecs::png::PngEncoder;
    use image::ImageEncoder as _;

    let mut output = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut output);

    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| BannerError::encode_failed("png", e.to_string()))?;

    Ok(output.into_inner())
}

/// Encode a banner as JPEG at the given quality (1-100, clamped).
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, BannerError> {
    use image::codecs::jpeg::JpegEncoder;
    use image::ImageEncoder as _;

    let rgb_data = rgba_to_rgb(image.as_raw());

    let mut output = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut output, quality.clamp(1, 100));

    encoder
        .write_image(
            &rgb_data,
            image.width(),
            image.height(),
            image::ColorType::Rgb8,
        )
        .map_err(|e| BannerError::encode_failed("jpeg", e.to_string()))?;

    Ok(output.into_inner())
}

/// Convert RGBA to RGB by discarding the alpha channel.
fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    let pixel_count = rgba.len() / 4;
    let mut rgb = Vec::with_capacity(pixel_count * 3);

    for chunk in rgba.chunks_exact(4) {
        rgb.push(chunk[0]);
        rgb.push(chunk[1]);
        rgb.push(chunk[2]);
    }

    rgb
}
