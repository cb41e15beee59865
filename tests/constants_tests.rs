// Sanity checks on the tuning constants and their relationships.

use motion_comfort::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_timing_constants_are_ordered() {
    assert!(DELTA_TIME_EPSILON > 0.0);
    assert!(MAX_FRAME_DELTA > 0.0);
    // The pause guard must sit well below the stall cap.
    assert!(DELTA_TIME_EPSILON < MAX_FRAME_DELTA / 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fov_apply_threshold_is_imperceptibly_small() {
    assert!(FOV_APPLY_THRESHOLD > 0.0);
    assert!(FOV_APPLY_THRESHOLD < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn vignette_band_stays_on_screen() {
    // The radius never collapses through zero at full intensity...
    assert!(VIGNETTE_RADIUS_SHRINK < VIGNETTE_BASE_RADIUS);
    // ...and the feathered band still fits inside the smallest radius.
    assert!(VIGNETTE_FEATHER <= VIGNETTE_BASE_RADIUS - VIGNETTE_RADIUS_SHRINK);
    assert!(VIGNETTE_FEATHER > 0.0);
}
