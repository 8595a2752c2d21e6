// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use camera_view::{Config, ResolutionTier};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.default_resolution,
        ResolutionTier::Sd480,
        "Default resolution should be the smallest tier"
    );
    assert_eq!(
        config.photo_quality, 0.5,
        "Default photo quality should match the capture constant"
    );
}

#[test]
fn test_config_json_round_trip() {
    let config = Config {
        default_resolution: ResolutionTier::FullHd1080,
        photo_quality: 0.8,
    };

    let raw = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, config);
}
