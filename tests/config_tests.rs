use motion_comfort::{ConfigError, MotionConfig, MotionConfigPatch};

#[test]
fn defaults_match_documented_values_and_validate() {
    let config = MotionConfig::default();
    assert_eq!(config.linear_threshold, 10.0);
    assert_eq!(config.angular_threshold, 2.0);
    assert_eq!(config.weight_linear, 0.4);
    assert_eq!(config.weight_angular, 0.6);
    assert_eq!(config.min_fov, 60.0);
    assert_eq!(config.max_fov, 75.0);
    assert_eq!(config.vignette_max_intensity, 0.7);
    assert_eq!(config.transition_speed, 5.0);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_patch_is_a_no_op() {
    let mut config = MotionConfig::default();
    config.apply(MotionConfigPatch::default());
    assert_eq!(config, MotionConfig::default());
}

#[test]
fn partial_patch_merges_only_named_fields() {
    let mut config = MotionConfig::default();
    config.apply(MotionConfigPatch {
        linear_threshold: Some(25.0),
        vignette_max_intensity: Some(0.3),
        ..Default::default()
    });
    assert_eq!(config.linear_threshold, 25.0);
    assert_eq!(config.vignette_max_intensity, 0.3);
    // Everything else untouched.
    assert_eq!(config.angular_threshold, 2.0);
    assert_eq!(config.weight_linear, 0.4);
    assert_eq!(config.min_fov, 60.0);
    assert_eq!(config.max_fov, 75.0);
    assert_eq!(config.transition_speed, 5.0);
}

#[test]
fn validate_rejects_each_range_violation() {
    let base = MotionConfig::default();

    let bad = MotionConfig { linear_threshold: 0.0, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::LinearThreshold(_))));

    let bad = MotionConfig { angular_threshold: -2.0, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::AngularThreshold(_))));

    let bad = MotionConfig { weight_linear: 1.5, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::WeightLinear(_))));

    let bad = MotionConfig { weight_angular: -0.1, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::WeightAngular(_))));

    let bad = MotionConfig { min_fov: 80.0, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::FovBounds { .. })));

    let bad = MotionConfig { min_fov: 75.0, ..base };
    assert!(
        matches!(bad.validate(), Err(ConfigError::FovBounds { .. })),
        "min == max must be rejected"
    );

    let bad = MotionConfig { vignette_max_intensity: 1.2, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::VignetteMaxIntensity(_))));

    let bad = MotionConfig { transition_speed: 0.0, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::TransitionSpeed(_))));
}

#[test]
fn validate_rejects_non_finite_fields() {
    let base = MotionConfig::default();

    let bad = MotionConfig { linear_threshold: f32::NAN, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::LinearThreshold(_))));

    let bad = MotionConfig { weight_angular: f32::NAN, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::WeightAngular(_))));

    let bad = MotionConfig { max_fov: f32::INFINITY, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::FovBounds { .. })));

    let bad = MotionConfig { transition_speed: f32::INFINITY, ..base };
    assert!(matches!(bad.validate(), Err(ConfigError::TransitionSpeed(_))));
}

#[test]
fn validation_errors_name_the_offending_value() {
    let bad = MotionConfig { linear_threshold: -3.0, ..MotionConfig::default() };
    let message = bad.validate().unwrap_err().to_string();
    assert!(message.contains("linear_threshold"), "got: {message}");
    assert!(message.contains("-3"), "got: {message}");
}
