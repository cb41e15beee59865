//! Motion-adaptive field of view.

use crate::config::{MotionConfig, MotionConfigPatch};
use crate::constants::FOV_APPLY_THRESHOLD;
use crate::smoothing::{lerp, smoothing_factor};

/// Narrows the camera FOV as motion intensity rises. Holds no state beyond
/// its config; the current FOV lives with the camera owner.
#[derive(Clone, Debug)]
pub struct AdaptiveFov {
    config: MotionConfig,
}

impl AdaptiveFov {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    /// Compute the next FOV in degrees. Intensity 0 maps to `max_fov`
    /// (widest, calm), intensity 1 to `min_fov` (narrowest).
    pub fn update(&self, current_fov: f32, motion_intensity: f32, dt_sec: f32) -> f32 {
        let target_fov = lerp(self.config.max_fov, self.config.min_fov, motion_intensity);
        let alpha = smoothing_factor(self.config.transition_speed, dt_sec);
        lerp(current_fov, target_fov, alpha)
    }

    /// Whether the step from `current_fov` to `new_fov` is large enough to be
    /// worth rebuilding the projection matrix.
    #[inline]
    pub fn should_apply(current_fov: f32, new_fov: f32) -> bool {
        (new_fov - current_fov).abs() > FOV_APPLY_THRESHOLD
    }

    /// Merge a partial config update.
    pub fn set_config(&mut self, patch: MotionConfigPatch) {
        self.config.apply(patch);
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }
}
