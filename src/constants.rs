// Shared tuning constants for the comfort pipeline.

// Frame timing
pub const DELTA_TIME_EPSILON: f32 = 1e-4; // below this a frame counts as paused/duplicate
pub const MAX_FRAME_DELTA: f32 = 0.1; // seconds; caps the smoothing step after a stall

// Adaptive FOV
pub const FOV_APPLY_THRESHOLD: f32 = 0.01; // degrees; smaller changes skip the projection rebuild

// Vignette mapping (UV distance from screen center)
pub const VIGNETTE_BASE_RADIUS: f32 = 0.8; // mask radius when stationary
pub const VIGNETTE_RADIUS_SHRINK: f32 = 0.3; // how far the radius closes in at full intensity
pub const VIGNETTE_FEATHER: f32 = 0.4; // width of the smoothstep band; static per session
