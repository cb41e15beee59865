//! Runtime-tunable configuration for the comfort pipeline.
//!
//! Components each own a plain `Copy` snapshot of [`MotionConfig`]; updates
//! arrive as a [`MotionConfigPatch`] merged field-wise and take effect on the
//! next frame update. Range validation belongs to the configuration source
//! (settings panel, file loader) via [`MotionConfig::validate`]; the
//! per-frame path assumes valid input and performs no checks.

use thiserror::Error;

/// Tunable parameters shared by the analyzer and both effect mappers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Linear speed (units/s) at which the linear contribution saturates.
    pub linear_threshold: f32,
    /// Rotation rate (rad/s) at which the angular contribution saturates.
    pub angular_threshold: f32,
    /// Influence of linear speed on the combined intensity, in [0, 1].
    pub weight_linear: f32,
    /// Influence of angular speed on the combined intensity, in [0, 1].
    pub weight_angular: f32,
    /// Narrowest field of view in degrees, reached at full intensity.
    pub min_fov: f32,
    /// Widest field of view in degrees, used when stationary.
    pub max_fov: f32,
    /// Maximum edge darkening applied by the vignette, in [0, 1].
    pub vignette_max_intensity: f32,
    /// Exponential smoothing rate (1/s) shared by intensity and FOV transitions.
    pub transition_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            linear_threshold: 10.0,
            angular_threshold: 2.0, // about 114 deg/s
            weight_linear: 0.4,
            weight_angular: 0.6,
            min_fov: 60.0,
            max_fov: 75.0,
            vignette_max_intensity: 0.7,
            transition_speed: 5.0,
        }
    }
}

impl MotionConfig {
    /// Merge the present fields of `patch` into this snapshot.
    pub fn apply(&mut self, patch: MotionConfigPatch) {
        if let Some(v) = patch.linear_threshold {
            self.linear_threshold = v;
        }
        if let Some(v) = patch.angular_threshold {
            self.angular_threshold = v;
        }
        if let Some(v) = patch.weight_linear {
            self.weight_linear = v;
        }
        if let Some(v) = patch.weight_angular {
            self.weight_angular = v;
        }
        if let Some(v) = patch.min_fov {
            self.min_fov = v;
        }
        if let Some(v) = patch.max_fov {
            self.max_fov = v;
        }
        if let Some(v) = patch.vignette_max_intensity {
            self.vignette_max_intensity = v;
        }
        if let Some(v) = patch.transition_speed {
            self.transition_speed = v;
        }
    }

    /// Range-check every field. Meant for the configuration boundary; a
    /// snapshot that passes here keeps all per-frame arithmetic finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.linear_threshold.is_finite() && self.linear_threshold > 0.0) {
            return Err(ConfigError::LinearThreshold(self.linear_threshold));
        }
        if !(self.angular_threshold.is_finite() && self.angular_threshold > 0.0) {
            return Err(ConfigError::AngularThreshold(self.angular_threshold));
        }
        if !(0.0..=1.0).contains(&self.weight_linear) {
            return Err(ConfigError::WeightLinear(self.weight_linear));
        }
        if !(0.0..=1.0).contains(&self.weight_angular) {
            return Err(ConfigError::WeightAngular(self.weight_angular));
        }
        if !(self.min_fov.is_finite() && self.max_fov.is_finite() && self.min_fov < self.max_fov) {
            return Err(ConfigError::FovBounds {
                min: self.min_fov,
                max: self.max_fov,
            });
        }
        if !(0.0..=1.0).contains(&self.vignette_max_intensity) {
            return Err(ConfigError::VignetteMaxIntensity(self.vignette_max_intensity));
        }
        if !(self.transition_speed.is_finite() && self.transition_speed > 0.0) {
            return Err(ConfigError::TransitionSpeed(self.transition_speed));
        }
        Ok(())
    }
}

/// Partial config update; only fields that are `Some` are merged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionConfigPatch {
    pub linear_threshold: Option<f32>,
    pub angular_threshold: Option<f32>,
    pub weight_linear: Option<f32>,
    pub weight_angular: Option<f32>,
    pub min_fov: Option<f32>,
    pub max_fov: Option<f32>,
    pub vignette_max_intensity: Option<f32>,
    pub transition_speed: Option<f32>,
}

/// A config field outside its documented range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("linear_threshold must be finite and positive, got {0}")]
    LinearThreshold(f32),
    #[error("angular_threshold must be finite and positive, got {0}")]
    AngularThreshold(f32),
    #[error("weight_linear must be in [0, 1], got {0}")]
    WeightLinear(f32),
    #[error("weight_angular must be in [0, 1], got {0}")]
    WeightAngular(f32),
    #[error("fov bounds must satisfy min < max, got min {min} / max {max}")]
    FovBounds { min: f32, max: f32 },
    #[error("vignette_max_intensity must be in [0, 1], got {0}")]
    VignetteMaxIntensity(f32),
    #[error("transition_speed must be finite and positive, got {0}")]
    TransitionSpeed(f32),
}
