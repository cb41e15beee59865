//! Per-frame orchestration: analyzer -> {adaptive FOV, vignette}.

use glam::{Quat, Vec3};

use crate::analyzer::MotionAnalyzer;
use crate::config::{MotionConfig, MotionConfigPatch};
use crate::constants::MAX_FRAME_DELTA;
use crate::fov::AdaptiveFov;
use crate::vignette::{VignetteMapper, VignetteParams};

/// Outputs of one pipeline frame, ready for the camera and compositor sinks.
#[derive(Clone, Copy, Debug)]
pub struct FrameEffects {
    /// New field of view in degrees.
    pub fov: f32,
    /// True when the FOV moved enough to justify a projection rebuild.
    pub apply_fov: bool,
    /// Vignette values for the post pass.
    pub vignette: VignetteParams,
}

/// Owns the three comfort components plus the current FOV, and runs the
/// chain once per rendered frame. The two effect consumers are independent;
/// both read the same intensity sample.
pub struct ComfortPipeline {
    analyzer: MotionAnalyzer,
    fov: AdaptiveFov,
    vignette: VignetteMapper,
    current_fov: f32,
}

impl ComfortPipeline {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            analyzer: MotionAnalyzer::new(config),
            fov: AdaptiveFov::new(config),
            vignette: VignetteMapper::new(config),
            current_fov: config.max_fov,
        }
    }

    /// Record a baseline pose, e.g. after a teleport or scene swap, without
    /// letting the jump register as motion.
    pub fn reset_pose(&mut self, position: Vec3, orientation: Quat) {
        self.analyzer.initialize(position, orientation);
    }

    /// Run one frame of the pipeline.
    ///
    /// `dt_sec` is clamped to [`MAX_FRAME_DELTA`] so a stalled frame (tab in
    /// the background, debugger pause) cannot saturate the smoothing into a
    /// one-frame jump. A non-finite pose or delta time violates the caller
    /// contract: the frame is skipped with a warning and no state changes.
    pub fn frame(&mut self, position: Vec3, orientation: Quat, dt_sec: f32) -> FrameEffects {
        if !position.is_finite() || !orientation.is_finite() || !dt_sec.is_finite() {
            log::warn!(
                "skipping comfort frame: non-finite input (position {position:?}, dt {dt_sec})"
            );
            return self.effects(self.current_fov, false);
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DELTA);

        self.analyzer.update(position, orientation, dt);
        let intensity = self.analyzer.motion_intensity();

        let new_fov = self.fov.update(self.current_fov, intensity, dt);
        let apply_fov = AdaptiveFov::should_apply(self.current_fov, new_fov);
        self.current_fov = new_fov;

        self.effects(new_fov, apply_fov)
    }

    fn effects(&self, fov: f32, apply_fov: bool) -> FrameEffects {
        FrameEffects {
            fov,
            apply_fov,
            vignette: self.vignette.update(self.analyzer.motion_intensity()),
        }
    }

    /// Forward a partial config update to all three components. Takes effect
    /// on the next frame; never resets analyzer state.
    pub fn set_config(&mut self, patch: MotionConfigPatch) {
        self.analyzer.set_config(patch);
        self.fov.set_config(patch);
        self.vignette.set_config(patch);
    }

    /// Smoothed motion intensity after the most recent frame.
    #[inline]
    pub fn motion_intensity(&self) -> f32 {
        self.analyzer.motion_intensity()
    }

    /// FOV currently held by the pipeline, in degrees.
    #[inline]
    pub fn current_fov(&self) -> f32 {
        self.current_fov
    }
}
