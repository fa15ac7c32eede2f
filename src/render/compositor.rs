//! Layer compositing onto the banner canvas.
//!
//! Alpha blending of RGBA layers (logo, text lines, shadows) onto the
//! canvas, with clipping at the canvas edges. The canvas is opaque by
//! construction (the gradient fill writes alpha 255 everywhere), so the
//! blend runs in the integer domain against an opaque destination.

use image::{imageops, Rgba, RgbaImage};

/// Blend a layer onto the target at (x, y), clipping to the target bounds.
///
/// Coordinates may be negative or run past the edge; only the visible
/// region is touched. The target must be opaque.
pub fn blend_layer(target: &mut RgbaImage, layer: &RgbaImage, x: i32, y: i32) {
    let target_width = target.width() as i32;
    let target_height = target.height() as i32;
    let layer_width = layer.width() as i32;
    let layer_height = layer.height() as i32;

    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = (x + layer_width).min(target_width);
    let y_end = (y + layer_height).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let lx = (tx - x) as u32;
            let ly = (ty - y) as u32;

            let fg = *layer.get_pixel(lx, ly);
            let bg = *target.get_pixel(tx as u32, ty as u32);
            target.put_pixel(tx as u32, ty as u32, blend_over_opaque(bg, fg));
        }
    }
}

/// Composite `foreground` over an opaque `background` pixel.
///
/// Fixed-point "over" with rounding: `out = (fg·a + bg·(255−a) + 127) / 255`.
/// The result is always opaque.
fn blend_over_opaque(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let a = foreground[3] as u32;
    match a {
        0 => background,
        255 => Rgba([foreground[0], foreground[1], foreground[2], 255]),
        _ => {
            let inv = 255 - a;
            let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * inv + 127) / 255) as u8;
            Rgba([
                mix(foreground[0], background[0]),
                mix(foreground[1], background[1]),
                mix(foreground[2], background[2]),
                255,
            ])
        }
    }
}

/// Build a soft drop shadow from a layer's alpha silhouette.
///
/// The silhouette is filled with black at `alpha`, then Gaussian-blurred.
pub fn drop_shadow(layer: &RgbaImage, alpha: u8, blur_sigma: f32) -> RgbaImage {
    let silhouette = RgbaImage::from_fn(layer.width(), layer.height(), |x, y| {
        let src = layer.get_pixel(x, y);
        let a = (src[3] as u32 * alpha as u32 / 255) as u8;
        Rgba([0, 0, 0, a])
    });
    imageops::blur(&silhouette, blur_sigma)
}
