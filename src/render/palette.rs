//! Gradient color derivation from the logo palette.
//!
//! Picks two distinct dominant colors from the logo to use as gradient
//! endpoints, so the background harmonizes with the brand artwork. Near-gray
//! and near-black/white candidates are discarded; from the survivors the
//! most distant pair wins, with the cooler color placed on the left.
//!
//! Returns `None` when no usable pair exists (monochrome or fully
//! transparent logos), in which case the caller keeps the default palette.

use image::imageops;
use image::RgbaImage;
use std::collections::HashMap;

/// Channel spread below which a color counts as gray.
const GRAY_THRESHOLD: u8 = 12;
/// Channel sums outside this range count as near-black / near-white.
const SUM_MIN: u32 = 80;
const SUM_MAX: u32 = 720;
/// How many dominant buckets to consider.
const PALETTE_SIZE: usize = 8;

fn color_distance(c1: [u8; 3], c2: [u8; 3]) -> f32 {
    let dr = c1[0] as f32 - c2[0] as f32;
    let dg = c1[1] as f32 - c2[1] as f32;
    let db = c1[2] as f32 - c2[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

fn is_grayish(c: [u8; 3]) -> bool {
    let max = c[0].max(c[1]).max(c[2]);
    let min = c[0].min(c[1]).min(c[2]);
    max - min < GRAY_THRESHOLD
}

/// Red-minus-blue heuristic; higher is warmer.
fn warmness(c: [u8; 3]) -> i32 {
    c[0] as i32 - c[2] as i32
}

/// Derive gradient endpoints from the logo's dominant colors.
pub fn derive_gradient(logo: &RgbaImage) -> Option<([u8; 3], [u8; 3])> {
    if logo.width() == 0 || logo.height() == 0 {
        return None;
    }

    // Downsample for speed; the palette does not need full resolution.
    let thumb = imageops::thumbnail(logo, 128, 128);

    // Coarse histogram: 4 bits per channel, averaging the colors that land
    // in each bucket. Transparent pixels are composited over white first so
    // alpha edges do not poison the palette.
    let mut buckets: HashMap<(u8, u8, u8), (u64, [u64; 3])> = HashMap::new();
    for pixel in thumb.pixels() {
        let a = pixel[3] as u32;
        let over_white = |c: u8| -> u8 { ((c as u32 * a + 255 * (255 - a)) / 255) as u8 };
        let rgb = [over_white(pixel[0]), over_white(pixel[1]), over_white(pixel[2])];

        let key = (rgb[0] >> 4, rgb[1] >> 4, rgb[2] >> 4);
        let entry = buckets.entry(key).or_insert((0, [0; 3]));
        entry.0 += 1;
        entry.1[0] += rgb[0] as u64;
        entry.1[1] += rgb[1] as u64;
        entry.1[2] += rgb[2] as u64;
    }

    // Dominant buckets first; ties broken by key so the order is stable.
    let mut ranked: Vec<((u8, u8, u8), (u64, [u64; 3]))> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.0.cmp(&b.0)));

    let candidates: Vec<[u8; 3]> = ranked
        .iter()
        .take(PALETTE_SIZE)
        .map(|(_, (count, sums))| {
            [
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
            ]
        })
        .filter(|c| {
            let sum = c[0] as u32 + c[1] as u32 + c[2] as u32;
            !is_grayish(*c) && sum >= SUM_MIN && sum <= SUM_MAX
        })
        .collect();

    if candidates.len() < 2 {
        return None;
    }

    let mut best_pair = (candidates[0], candidates[1]);
    let mut best_d = -1.0f32;
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let d = color_distance(candidates[i], candidates[j]);
            if d > best_d {
                best_d = d;
                best_pair = (candidates[i], candidates[j]);
            }
        }
    }

    let (c1, c2) = best_pair;
    if warmness(c1) <= warmness(c2) {
        Some((c1, c2))
    } else {
        Some((c2, c1))
    }
}
