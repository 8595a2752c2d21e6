// SPDX-License-Identifier: GPL-3.0-only

//! Recording size estimation
//!
//! Estimates the file size of a finished recording from the codec bitrate,
//! the selected resolution tier, and the realized duration. The model is
//! deliberately simple: the fixed bitrate is scaled by a per-tier multiplier
//! and by the duration. It feeds the acknowledgment dialog after a recording
//! finishes and makes no claim of container-level accuracy.

use crate::constants::ResolutionTier;
use crate::errors::EstimateError;
use std::fmt;

/// Estimated file size for a finished recording.
///
/// Full precision is retained here; rounding happens only for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeEstimate {
    /// Estimated size in megabytes
    pub megabytes: f64,
}

impl SizeEstimate {
    /// Size rounded to two decimal places for dialog text
    pub fn display_megabytes(&self) -> f64 {
        (self.megabytes * 100.0).round() / 100.0
    }
}

impl fmt::Display for SizeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} MB", self.megabytes)
    }
}

/// Estimate the size of a recording in megabytes.
///
/// `megabytes = (bitrate_bps / 1_000_000) * multiplier(tier) * duration / 8`
///
/// The tier is label-keyed so that callers outside the catalog fail with
/// [`EstimateError::InvalidTier`] instead of silently producing a number;
/// negative and non-finite durations are rejected. Deterministic and free of
/// side effects.
pub fn estimate_video_size(
    tier_label: &str,
    bitrate_bps: u64,
    duration_secs: f64,
) -> Result<SizeEstimate, EstimateError> {
    let Some(tier) = ResolutionTier::from_label(tier_label) else {
        return Err(EstimateError::InvalidTier(tier_label.to_string()));
    };
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(EstimateError::InvalidDuration(duration_secs));
    }

    let bitrate_mbps = bitrate_bps as f64 / 1_000_000.0;
    let megabytes = bitrate_mbps * f64::from(tier.size_multiplier()) * duration_secs / 8.0;

    Ok(SizeEstimate { megabytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VIDEO_BITRATE_BPS;

    #[test]
    fn test_known_estimate() {
        // 4 Mbps * 2 (720p) * 60 s / 8 = 60 MB
        let estimate = estimate_video_size("720p", VIDEO_BITRATE_BPS, 60.0).unwrap();
        assert_eq!(estimate.megabytes, 60.0);
    }

    #[test]
    fn test_invalid_tier_rejected() {
        let err = estimate_video_size("2160p", VIDEO_BITRATE_BPS, 10.0).unwrap_err();
        assert_eq!(err, EstimateError::InvalidTier("2160p".to_string()));
    }
}
