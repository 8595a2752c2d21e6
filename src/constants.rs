// SPDX-License-Identifier: GPL-3.0-only

//! Capture constants and the resolution catalog

use serde::{Deserialize, Serialize};

/// Fixed video encoder bitrate in bits per second.
///
/// The capture backend encodes at this rate regardless of the selected
/// resolution; the size estimate scales it by a per-tier multiplier instead.
pub const VIDEO_BITRATE_BPS: u64 = 4_000_000;

/// Video codec requested from the capture backend.
pub const VIDEO_CODEC: &str = "h265";

/// Default compression factor for still photos (0.0 = smallest, 1.0 = best).
pub const PHOTO_QUALITY: f64 = 0.5;

/// Resolution presets offered by the capture screen
///
/// The catalog is fixed: selection is always one of these three entries,
/// never an arbitrary width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolutionTier {
    /// SD 480p (640x480, default)
    #[default]
    Sd480,
    /// HD 720p (1280x720)
    Hd720,
    /// Full HD 1080p (1920x1080)
    FullHd1080,
}

impl ResolutionTier {
    /// All tiers for UI iteration, ordered smallest to largest
    pub const ALL: [ResolutionTier; 3] = [
        ResolutionTier::Sd480,
        ResolutionTier::Hd720,
        ResolutionTier::FullHd1080,
    ];

    /// Display label for the tier
    pub fn label(&self) -> &'static str {
        match self {
            ResolutionTier::Sd480 => "480p",
            ResolutionTier::Hd720 => "720p",
            ResolutionTier::FullHd1080 => "1080p",
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        match self {
            ResolutionTier::Sd480 => 640,
            ResolutionTier::Hd720 => 1280,
            ResolutionTier::FullHd1080 => 1920,
        }
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        match self {
            ResolutionTier::Sd480 => 480,
            ResolutionTier::Hd720 => 720,
            ResolutionTier::FullHd1080 => 1080,
        }
    }

    /// Size multiplier applied to the fixed bitrate when estimating the
    /// file size of a recording at this tier
    pub fn size_multiplier(&self) -> u32 {
        match self {
            ResolutionTier::Sd480 => 1,
            ResolutionTier::Hd720 => 2,
            ResolutionTier::FullHd1080 => 3,
        }
    }

    /// Look a tier up by its display label ("480p", "720p", "1080p")
    pub fn from_label(label: &str) -> Option<ResolutionTier> {
        ResolutionTier::ALL
            .into_iter()
            .find(|tier| tier.label() == label)
    }
}

impl std::fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_tiers() {
        assert_eq!(ResolutionTier::ALL.len(), 3);
    }

    #[test]
    fn test_labels_round_trip() {
        for tier in ResolutionTier::ALL {
            assert_eq!(ResolutionTier::from_label(tier.label()), Some(tier));
        }
        assert_eq!(ResolutionTier::from_label("4k"), None);
        assert_eq!(ResolutionTier::from_label(""), None);
    }

    #[test]
    fn test_tiers_ordered_by_size() {
        let mut prev_width = 0;
        let mut prev_multiplier = 0;
        for tier in ResolutionTier::ALL {
            assert!(tier.width() > prev_width);
            assert!(tier.size_multiplier() > prev_multiplier);
            prev_width = tier.width();
            prev_multiplier = tier.size_multiplier();
        }
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(
            (ResolutionTier::Sd480.width(), ResolutionTier::Sd480.height()),
            (640, 480)
        );
        assert_eq!(
            (ResolutionTier::Hd720.width(), ResolutionTier::Hd720.height()),
            (1280, 720)
        );
        assert_eq!(
            (
                ResolutionTier::FullHd1080.width(),
                ResolutionTier::FullHd1080.height()
            ),
            (1920, 1080)
        );
    }
}
