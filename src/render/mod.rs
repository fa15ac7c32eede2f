//! Banner rendering.
//!
//! Everything between the decoded inputs and a finished RGBA canvas:
//!
//! - **gradient** - background fill with radial highlight and dark theme
//! - **palette** - gradient endpoint derivation from the logo's colors
//! - **fonts** - embedded DejaVu faces plus user font overrides
//! - **text** - glyph rasterization, measurement and fit-to-width
//! - **scale** - Lanczos3 logo resizing with the longer-edge rule
//! - **compositor** - alpha blending of layers onto the canvas
//! - **banner** - per-size assembly of the above
//!
//! Rendering is deterministic: no randomness and no time-dependent state,
//! so identical inputs produce identical pixels across runs.

pub mod banner;
pub mod compositor;
pub mod fonts;
pub mod gradient;
pub mod palette;
pub mod scale;
pub mod text;

// Re-export the main entry points
pub use banner::{render_banner, RenderContext};
pub use compositor::{blend_layer, drop_shadow};
pub use fonts::FontSet;
pub use gradient::{make_background, DEFAULT_GRADIENT_END, DEFAULT_GRADIENT_START};
pub use palette::derive_gradient;
pub use scale::scale_logo;
pub use text::{fit_size, line_height, measure_line, render_line};
