//! Size presets for banner export.
//!
//! The preset table is the single source of truth for the supported output
//! sizes. Each entry carries the label used for file naming and a default
//! vertical text shift for the tall story formats where a dead-centered
//! block sits too low once the platform UI overlays are taken into account.
//!
//! `final_kit` is the curated subset shipped to the campaign; every one of
//! its labels also appears in `all_social`.

use clap::ValueEnum;

/// One target canvas size within a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    /// Human-readable label, used as the output file stem.
    pub label: &'static str,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Default vertical shift of the content block as a fraction of canvas
    /// height (negative moves up). Overridden by `--text-shift`.
    pub text_shift: f32,
}

const fn size(label: &'static str, width: u32, height: u32, text_shift: f32) -> SizeSpec {
    SizeSpec {
        label,
        width,
        height,
        text_shift,
    }
}

/// The complete list of social-network dimensions.
pub const ALL_SOCIAL: &[SizeSpec] = &[
    // Masters
    size("Master_4800x2520", 4800, 2520, 0.0),
    size("Master_2400x1260", 2400, 1260, 0.0),
    // Instagram
    size("IG_1080x1080", 1080, 1080, 0.0),
    size("IG_1080x1350", 1080, 1350, -0.02),
    size("IG_1080x1920", 1080, 1920, -0.08), // Stories/Reels
    // Facebook
    size("FacebookPost_1200x1200", 1200, 1200, 0.0),
    size("FacebookEvent_1200x628", 1200, 628, 0.0),
    size("FacebookCover_1640x924", 1640, 924, 0.0),
    // LinkedIn
    size("LinkedIn_1200x627", 1200, 627, 0.0),
    size("LinkedInCover_1584x396", 1584, 396, 0.0),
    // Twitter/X
    size("Twitter_1600x900", 1600, 900, 0.0),
    size("TwitterHeader_1500x500", 1500, 500, 0.0),
    // YouTube
    size("YouTube_1280x720", 1280, 720, 0.0),
    size("YouTubeBanner_2560x1440", 2560, 1440, 0.0),
    size("YouTubeSafe_2048x1152", 2048, 1152, 0.0),
    // Pinterest
    size("Pinterest_1000x1500", 1000, 1500, -0.02),
    size("PinterestSquare_1000x1000", 1000, 1000, 0.0),
    // TikTok / Stories generic
    size("TikTok_1080x1920", 1080, 1920, -0.08),
    // Open Graph generic
    size("OG_1200x630", 1200, 630, 0.0),
];

/// Curated formats shipped as the final kit.
pub const FINAL_KIT: &[SizeSpec] = &[
    size("Master_4800x2520", 4800, 2520, 0.0),
    size("Master_2400x1260", 2400, 1260, 0.0),
    size("IG_1080x1350", 1080, 1350, -0.02),
    size("IG_1080x1080", 1080, 1080, 0.0),
    size("IG_1080x1920", 1080, 1920, -0.08),
    size("LinkedIn_1200x627", 1200, 627, 0.0),
    size("LinkedInCover_1584x396", 1584, 396, 0.0),
    size("Twitter_1600x900", 1600, 900, 0.0),
    size("TwitterHeader_1500x500", 1500, 500, 0.0),
    size("FacebookPost_1200x1200", 1200, 1200, 0.0),
    size("FacebookCover_1640x924", 1640, 924, 0.0),
    size("YouTube_1280x720", 1280, 720, 0.0),
    size("YouTubeBanner_2560x1440", 2560, 1440, 0.0),
    size("YouTubeSafe_2048x1152", 2048, 1152, 0.0),
    size("OG_1200x630", 1200, 630, 0.0),
];

/// Named size preset selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Complete list of social-network dimensions
    #[value(name = "all_social")]
    AllSocial,
    /// Curated subset shipped as the final kit
    #[value(name = "final_kit")]
    FinalKit,
}

impl Preset {
    /// Resolve the preset to its ordered list of target sizes.
    pub fn sizes(self) -> &'static [SizeSpec] {
        match self {
            Preset::AllSocial => ALL_SOCIAL,
            Preset::FinalKit => FINAL_KIT,
        }
    }

    /// Name used for the archive file and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::AllSocial => "all_social",
            Preset::FinalKit => "final_kit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_preset_sizes_counts() {
        assert_eq!(Preset::AllSocial.sizes().len(), 19);
        assert_eq!(Preset::FinalKit.sizes().len(), 15);
    }

    #[test]
    fn test_labels_are_unique_within_each_preset() {
        for preset in [Preset::AllSocial, Preset::FinalKit] {
            let labels: HashSet<&str> = preset.sizes().iter().map(|s| s.label).collect();
            assert_eq!(labels.len(), preset.sizes().len());
        }
    }

    #[test]
    fn test_final_kit_is_subset_of_all_social() {
        let all: HashSet<&str> = ALL_SOCIAL.iter().map(|s| s.label).collect();
        for spec in FINAL_KIT {
            assert!(all.contains(spec.label), "{} missing from all_social", spec.label);
        }
    }

    #[test]
    fn test_labels_match_dimensions() {
        // Every label encodes its WxH suffix; keep the table honest.
        for spec in ALL_SOCIAL.iter().chain(FINAL_KIT.iter()) {
            let suffix = format!("{}x{}", spec.width, spec.height);
            assert!(
                spec.label.ends_with(&suffix),
                "label {} does not match {}",
                spec.label,
                suffix
            );
        }
    }

    #[test]
    fn test_text_shift_only_on_tall_formats() {
        for spec in ALL_SOCIAL {
            if spec.text_shift != 0.0 {
                assert!(spec.height > spec.width, "{} shifted but not tall", spec.label);
            }
        }
    }

    #[test]
    fn test_preset_as_str() {
        assert_eq!(Preset::AllSocial.as_str(), "all_social");
        assert_eq!(Preset::FinalKit.as_str(), "final_kit");
    }
}
