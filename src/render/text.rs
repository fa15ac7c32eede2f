//! Text line rasterization.
//!
//! Renders single lines of text to transparent RGBA images that the
//! compositor blends onto the banner, and measures text so layout can
//! shrink a line until it fits the safe width.

use crate::error::BannerError;
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

/// Padding added around measured text so antialiased edges are not clipped.
const MEASURE_PADDING: u32 = 2;

/// Calculate the dimensions of a rendered line.
///
/// Returns (width, height) in pixels, kerning included.
pub fn measure_line(font: &FontArc, text: &str, font_size: f32) -> (u32, u32) {
    let scale = PxScale::from(font_size);
    let scaled_font = font.as_scaled(scale);

    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);
        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }
        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    let height = scaled_font.height();
    (
        width.ceil() as u32 + MEASURE_PADDING,
        height.ceil() as u32 + MEASURE_PADDING,
    )
}

/// Line height (ascent to descent) for a face at a given size.
pub fn line_height(font: &FontArc, font_size: f32) -> f32 {
    font.as_scaled(PxScale::from(font_size)).height()
}

/// Shrink `max_size` in steps of 2 until the line fits `target_width`.
///
/// Never goes below `min_size`; a line that still overflows at the minimum
/// is rendered at the minimum and clipped by the canvas.
pub fn fit_size(font: &FontArc, text: &str, target_width: u32, max_size: f32, min_size: f32) -> f32 {
    let mut size = max_size.max(min_size);
    while size > min_size {
        let (width, _) = measure_line(font, text, size);
        if width <= target_width {
            return size;
        }
        size -= 2.0;
    }
    min_size
}

/// Render a line of text to a transparent RGBA image.
pub fn render_line(
    font: &FontArc,
    text: &str,
    font_size: f32,
    color: [u8; 3],
) -> Result<RgbaImage, BannerError> {
    if text.is_empty() {
        return Err(BannerError::render("cannot render empty text"));
    }

    let scale = PxScale::from(font_size);
    let scaled_font = font.as_scaled(scale);

    let (width, height) = measure_line(font, text, font_size);
    let mut image = RgbaImage::new(width.max(1), height.max(1));

    let baseline_y = scaled_font.ascent();
    let mut cursor_x = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);
        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;

                if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
                    let alpha = (coverage.clamp(0.0, 1.0) * 255.0) as u8;
                    let existing = image.get_pixel(x as u32, y as u32);
                    // Glyph outlines can overlap; keep the strongest coverage.
                    if alpha > existing[3] {
                        image.put_pixel(
                            x as u32,
                            y as u32,
                            Rgba([color[0], color[1], color[2], alpha]),
                        );
                    }
                }
            });
        }

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    Ok(image)
}
