//! Background gradient generation.
//!
//! Produces the banner background: a horizontal left-to-right gradient
//! between two RGB endpoints, a soft radial highlight in the upper-left
//! third for depth, and an optional 35% black overlay for the dark theme.
//!
//! The fill is a pure per-pixel function of the canvas coordinates, so
//! identical inputs always produce identical pixels.

use image::{Rgba, RgbaImage};

/// Default gradient endpoints (blue to purple).
pub const DEFAULT_GRADIENT_START: [u8; 3] = [34, 110, 255];
pub const DEFAULT_GRADIENT_END: [u8; 3] = [136, 58, 255];

/// Fraction of black mixed in when the dark theme is active.
const DARK_OVERLAY: f32 = 0.35;

/// Linear interpolation between two values.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two RGB colors.
fn lerp_color(c1: [u8; 3], c2: [u8; 3], t: f32) -> [u8; 3] {
    [
        lerp(c1[0] as f32, c2[0] as f32, t) as u8,
        lerp(c1[1] as f32, c2[1] as f32, t) as u8,
        lerp(c1[2] as f32, c2[2] as f32, t) as u8,
    ]
}

/// Render the background for one canvas size.
///
/// # Arguments
///
/// * `width`, `height` - Canvas dimensions in pixels
/// * `start`, `end` - Gradient endpoints, left and right
/// * `dark` - Apply the dark-theme overlay
pub fn make_background(
    width: u32,
    height: u32,
    start: [u8; 3],
    end: [u8; 3],
    dark: bool,
) -> RgbaImage {
    let w = width.max(1);
    let h = height.max(1);

    // Radial highlight centered in the upper-left third
    let cx = w as f32 * 0.2;
    let cy = h as f32 * 0.3;
    let max_r = (w as f32).hypot(h as f32) * 0.6;

    let mut image = RgbaImage::new(w, h);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let t = if w > 1 { x as f32 / (w - 1) as f32 } else { 0.0 };
        let mut color = lerp_color(start, end, t);

        // Quadratic falloff from the highlight center
        let d = (x as f32 - cx).hypot(y as f32 - cy);
        let a = (1.0 - d / max_r).clamp(0.0, 1.0).powi(2);
        color = [
            lerp(color[0] as f32, 255.0, a) as u8,
            lerp(color[1] as f32, 255.0, a) as u8,
            lerp(color[2] as f32, 255.0, a) as u8,
        ];

        if dark {
            color = [
                lerp(color[0] as f32, 0.0, DARK_OVERLAY) as u8,
                lerp(color[1] as f32, 0.0, DARK_OVERLAY) as u8,
                lerp(color[2] as f32, 0.0, DARK_OVERLAY) as u8,
            ];
        }

        *pixel = Rgba([color[0], color[1], color[2], 255]);
    }

    image
}
