//! Frame-rate independent exponential smoothing.
//!
//! Both the analyzer and the FOV controller move a value toward a target by
//! `lerp(value, target, 1 - exp(-rate * dt))`. The factor lives here in one
//! place so the two call sites cannot drift apart.

/// Interpolation factor for one step of exponential smoothing.
///
/// Converges at the same asymptotic rate no matter how the elapsed time is
/// subdivided: applying the factor for `dt1` and then `dt2` lands on the same
/// value as applying it once for `dt1 + dt2`.
#[inline]
pub fn smoothing_factor(rate: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate * dt_sec).exp()
}

/// Linear interpolation from `a` to `b` by `t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
