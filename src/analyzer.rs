//! Per-frame motion intensity estimation.
//!
//! The analyzer owns the previous-frame pose and the smoothed intensity;
//! nothing else mutates them. It is driven once per rendered frame by the
//! host loop with the observer's current world pose.

use glam::{Quat, Vec3};

use crate::config::{MotionConfig, MotionConfigPatch};
use crate::constants::DELTA_TIME_EPSILON;
use crate::smoothing::{lerp, smoothing_factor};

/// Derives a smoothed discomfort intensity in [0, 1] from observed pose deltas.
#[derive(Clone, Debug)]
pub struct MotionAnalyzer {
    config: MotionConfig,
    prev_position: Vec3,
    prev_orientation: Quat,
    motion_intensity: f32,
    initialized: bool,
}

impl MotionAnalyzer {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            prev_position: Vec3::ZERO,
            prev_orientation: Quat::IDENTITY,
            motion_intensity: 0.0,
            initialized: false,
        }
    }

    /// Record a baseline pose so the first real update does not see a jump.
    /// Resets the smoothed intensity to zero.
    pub fn initialize(&mut self, position: Vec3, orientation: Quat) {
        self.prev_position = position;
        self.prev_orientation = orientation;
        self.motion_intensity = 0.0;
        self.initialized = true;
    }

    /// Advance the intensity estimate from the current pose. Call once per frame.
    ///
    /// The first call records the pose and returns without computing; a
    /// `dt_sec` at or below [`DELTA_TIME_EPSILON`] leaves all state unchanged.
    pub fn update(&mut self, position: Vec3, orientation: Quat, dt_sec: f32) {
        if !self.initialized {
            self.initialize(position, orientation);
            return;
        }
        if dt_sec <= DELTA_TIME_EPSILON {
            return;
        }

        let linear_speed = position.distance(self.prev_position) / dt_sec;
        // angle_between measures through |dot|, so q and -q count as the same rotation
        let angular_speed = self.prev_orientation.angle_between(orientation) / dt_sec;

        let normalized_linear = (linear_speed / self.config.linear_threshold).clamp(0.0, 1.0);
        let normalized_angular = (angular_speed / self.config.angular_threshold).clamp(0.0, 1.0);

        let raw_intensity = (normalized_linear * self.config.weight_linear
            + normalized_angular * self.config.weight_angular)
            .clamp(0.0, 1.0);

        let alpha = smoothing_factor(self.config.transition_speed, dt_sec);
        self.motion_intensity = lerp(self.motion_intensity, raw_intensity, alpha);

        self.prev_position = position;
        self.prev_orientation = orientation;
    }

    /// Current smoothed intensity in [0, 1]. Valid at any time, not only
    /// right after an update.
    #[inline]
    pub fn motion_intensity(&self) -> f32 {
        self.motion_intensity
    }

    /// Merge a partial config update. Analyzer state is left untouched.
    pub fn set_config(&mut self, patch: MotionConfigPatch) {
        self.config.apply(patch);
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }
}
