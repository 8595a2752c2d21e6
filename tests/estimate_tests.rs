// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the size estimator

use camera_view::constants::VIDEO_BITRATE_BPS;
use camera_view::errors::EstimateError;
use camera_view::estimate_video_size;

#[test]
fn test_known_sizes() {
    // 4 Mbps * 2 (720p) * 60 s / 8 = 60 MB
    let estimate = estimate_video_size("720p", VIDEO_BITRATE_BPS, 60.0).unwrap();
    assert_eq!(estimate.megabytes, 60.0);

    // 4 Mbps * 3 (1080p) * 10 s / 8 = 15 MB
    let estimate = estimate_video_size("1080p", VIDEO_BITRATE_BPS, 10.0).unwrap();
    assert_eq!(estimate.megabytes, 15.0);
}

#[test]
fn test_zero_duration_is_zero_megabytes() {
    let estimate = estimate_video_size("480p", VIDEO_BITRATE_BPS, 0.0).unwrap();
    assert_eq!(estimate.megabytes, 0.0);
}

#[test]
fn test_deterministic() {
    let a = estimate_video_size("1080p", VIDEO_BITRATE_BPS, 12.34).unwrap();
    let b = estimate_video_size("1080p", VIDEO_BITRATE_BPS, 12.34).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_monotonic_in_duration() {
    for label in ["480p", "720p", "1080p"] {
        let mut prev = -1.0;
        for step in 0..200 {
            let duration = step as f64 * 0.5;
            let estimate = estimate_video_size(label, VIDEO_BITRATE_BPS, duration).unwrap();
            assert!(
                estimate.megabytes >= prev,
                "estimate for {} must not decrease with duration",
                label
            );
            prev = estimate.megabytes;
        }
    }
}

#[test]
fn test_unknown_tier_rejected() {
    let err = estimate_video_size("4k", VIDEO_BITRATE_BPS, 10.0).unwrap_err();
    assert_eq!(err, EstimateError::InvalidTier("4k".to_string()));

    let err = estimate_video_size("", VIDEO_BITRATE_BPS, 10.0).unwrap_err();
    assert_eq!(err, EstimateError::InvalidTier(String::new()));
}

#[test]
fn test_bad_durations_rejected() {
    assert!(matches!(
        estimate_video_size("720p", VIDEO_BITRATE_BPS, -1.0),
        Err(EstimateError::InvalidDuration(_))
    ));
    assert!(matches!(
        estimate_video_size("720p", VIDEO_BITRATE_BPS, f64::NAN),
        Err(EstimateError::InvalidDuration(_))
    ));
    assert!(matches!(
        estimate_video_size("720p", VIDEO_BITRATE_BPS, f64::INFINITY),
        Err(EstimateError::InvalidDuration(_))
    ));
}

#[test]
fn test_display_rounding_keeps_full_precision() {
    // 4 Mbps * 1 (480p) * 1.234 s / 8 = 0.617 MB
    let estimate = estimate_video_size("480p", VIDEO_BITRATE_BPS, 1.234).unwrap();
    assert_eq!(estimate.megabytes, 0.617);
    assert_eq!(estimate.display_megabytes(), 0.62);
}

#[test]
fn test_display_format() {
    let estimate = estimate_video_size("720p", VIDEO_BITRATE_BPS, 60.0).unwrap();
    assert_eq!(format!("{}", estimate), "60.00 MB");
}
