//! Font loading and resolution.
//!
//! Ships embedded DejaVu faces (OFL licensed) so the tool renders the same
//! everywhere with no system font dependency: the bold face for titles and
//! the regular face for subtitles. Users can point at their own TTF/OTF
//! files; the first path that loads wins, otherwise the embedded face is
//! used.

use crate::error::BannerError;
use ab_glyph::FontArc;
use std::path::PathBuf;

const TITLE_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");
const SUBTITLE_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");

/// The two faces used on a banner.
#[derive(Clone, Debug)]
pub struct FontSet {
    pub title: FontArc,
    pub subtitle: FontArc,
}

impl FontSet {
    /// Load fonts for a run, honoring user-supplied override paths.
    pub fn load(
        title_paths: &[PathBuf],
        subtitle_paths: &[PathBuf],
    ) -> Result<FontSet, BannerError> {
        Ok(FontSet {
            title: resolve_font(title_paths, TITLE_FONT_DATA)?,
            subtitle: resolve_font(subtitle_paths, SUBTITLE_FONT_DATA)?,
        })
    }
}

/// Pick the first usable font from `paths`, falling back to the embedded face.
fn resolve_font(paths: &[PathBuf], embedded: &'static [u8]) -> Result<FontArc, BannerError> {
    for path in paths {
        match std::fs::read(path) {
            Ok(data) => match FontArc::try_from_vec(data) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "Loaded user font");
                    return Ok(font);
                }
                Err(_) => {
                    tracing::warn!(path = %path.display(), "Skipping unparsable font file");
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable font file");
            }
        }
    }

    FontArc::try_from_slice(embedded)
        .map_err(|_| BannerError::render("embedded font data is invalid"))
}
