//! Vignette mapping and the post-pass shader contract.
//!
//! The mapper turns the smoothed motion intensity into the uniform values the
//! compositor feeds to `shaders/vignette.wgsl`. The masking math itself runs
//! in the shader; this side's responsibility ends at producing the values.

use crate::config::{MotionConfig, MotionConfigPatch};
use crate::constants::{VIGNETTE_BASE_RADIUS, VIGNETTE_FEATHER, VIGNETTE_RADIUS_SHRINK};

/// Shader-facing vignette values for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VignetteParams {
    /// Darkening strength in [0, 1]; 0 disables the mask entirely.
    pub intensity: f32,
    /// UV distance from screen center where darkening reaches full strength.
    pub radius: f32,
}

/// Uniform block matching the layout in `shaders/vignette.wgsl`.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VignetteUniforms {
    pub intensity: f32,
    pub radius: f32,
    pub feather: f32,
    pub _pad: f32,
}

impl VignetteParams {
    /// Pack for upload, with the session's static feather width.
    pub fn to_uniforms(self, feather: f32) -> VignetteUniforms {
        VignetteUniforms {
            intensity: self.intensity,
            radius: self.radius,
            feather,
            _pad: 0.0,
        }
    }
}

/// Maps smoothed motion intensity to vignette parameters. The intensity is
/// already smoothed by the analyzer, so no further smoothing happens here.
#[derive(Clone, Debug)]
pub struct VignetteMapper {
    config: MotionConfig,
}

impl VignetteMapper {
    pub fn new(config: MotionConfig) -> Self {
        Self { config }
    }

    /// Map the current motion intensity. Higher intensity darkens more and
    /// pulls the mask radius inward.
    pub fn update(&self, motion_intensity: f32) -> VignetteParams {
        VignetteParams {
            intensity: motion_intensity * self.config.vignette_max_intensity,
            radius: VIGNETTE_BASE_RADIUS - motion_intensity * VIGNETTE_RADIUS_SHRINK,
        }
    }

    /// The static feather width a compositor passes once at setup.
    #[inline]
    pub fn feather() -> f32 {
        VIGNETTE_FEATHER
    }

    /// Merge a partial config update.
    pub fn set_config(&mut self, patch: MotionConfigPatch) {
        self.config.apply(patch);
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }
}
