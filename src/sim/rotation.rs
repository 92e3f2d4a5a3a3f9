//! Wraparound-aware angle interpolation
//!
//! The camera eases toward its target with a step proportional to the
//! remaining distance, so it moves fast across half a turn and slows down
//! near the end, then snaps once it is close enough.

use crate::consts::{ROTATION_ANGLE_RANGE, ROTATION_STEP_MAX, ROTATION_STEP_MIN};
use crate::{normalize_degrees, project_to_range};

/// Shortest circular distance between two angles in degrees
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = a - b;
    diff.abs().min((diff - 360.0).abs()).min((diff + 360.0).abs())
}

/// Sign (-1, 0, 1) of the rotation that takes `from` to `to` the short way.
///
/// Angles on the same side of zero compare directly. Otherwise the rotation
/// either passes through 0 or through ±180, whichever is shorter.
///
/// Panics on NaN input: every pair of real angles matches one arm.
pub fn rotation_direction(from: f32, to: f32) -> f32 {
    if from == to {
        return 0.0;
    }

    if (from >= 0.0 && to >= 0.0) || (from <= 0.0 && to <= 0.0) {
        return if from > to { -1.0 } else { 1.0 };
    }

    if from >= 0.0 && to <= 0.0 {
        return if from - to <= 180.0 { -1.0 } else { 1.0 };
    }

    if from <= 0.0 && to >= 0.0 {
        return if to - from < 180.0 { 1.0 } else { -1.0 };
    }

    unreachable!("no rotation direction for {from} -> {to}")
}

/// Step size for a remaining distance of `distance` degrees
#[inline]
pub fn step_size(distance: f32) -> f32 {
    project_to_range(
        distance,
        ROTATION_ANGLE_RANGE,
        (ROTATION_STEP_MIN, ROTATION_STEP_MAX),
    )
}

/// Advance `current` one step toward `target` (both in degrees).
///
/// Returns `target` exactly once the remaining distance drops below the
/// minimum step.
pub fn rotation_step(current: f32, target: f32) -> f32 {
    let distance = angular_distance(current, target);
    if distance < ROTATION_STEP_MIN {
        return target;
    }

    let step = step_size(distance);
    normalize_degrees(current + step * rotation_direction(current, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_angular_distance_wraps() {
        assert_eq!(angular_distance(170.0, -170.0), 20.0);
        assert_eq!(angular_distance(-170.0, 170.0), 20.0);
        assert_eq!(angular_distance(10.0, -10.0), 20.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_rotation_direction_sign_rules() {
        assert_eq!(rotation_direction(45.0, 45.0), 0.0);
        // same side of zero
        assert_eq!(rotation_direction(10.0, 50.0), 1.0);
        assert_eq!(rotation_direction(50.0, 10.0), -1.0);
        assert_eq!(rotation_direction(-50.0, -10.0), 1.0);
        assert_eq!(rotation_direction(-10.0, -50.0), -1.0);
        // through zero
        assert_eq!(rotation_direction(10.0, -10.0), -1.0);
        assert_eq!(rotation_direction(-10.0, 10.0), 1.0);
        // through 180
        assert_eq!(rotation_direction(170.0, -170.0), 1.0);
        assert_eq!(rotation_direction(-170.0, 170.0), -1.0);
        // exactly half a turn
        assert_eq!(rotation_direction(90.0, -90.0), -1.0);
        assert_eq!(rotation_direction(-90.0, 90.0), -1.0);
    }

    #[test]
    #[should_panic(expected = "no rotation direction")]
    fn test_rotation_direction_rejects_nan() {
        rotation_direction(f32::NAN, 10.0);
    }

    #[test]
    fn test_snaps_when_close() {
        assert_eq!(rotation_step(10.3, 10.0), 10.0);
        assert_eq!(rotation_step(179.8, -179.9), -179.9);
    }

    #[test]
    fn test_step_scales_with_distance() {
        assert!((rotation_step(0.0, 180.0) - 10.0).abs() < 1e-4);
        let near = rotation_step(0.0, 10.0);
        assert!(near > 0.5 && near < 1.1, "{near}");
    }

    #[test]
    fn test_step_crosses_180() {
        let next = rotation_step(175.0, -175.0);
        assert!(next < -175.0 || next > 175.0, "{next}");
        assert!(angular_distance(next, -175.0) < 10.0);
    }

    proptest! {
        #[test]
        fn interpolation_converges_without_overshoot(
            start in -179.9f32..=180.0,
            target in -179.9f32..=180.0,
        ) {
            let mut current = start;
            let mut steps = 0;
            while current != target {
                let before = angular_distance(current, target);
                let step = step_size(before);
                current = rotation_step(current, target);
                let after = angular_distance(current, target);
                prop_assert!(after < before, "{start} -> {target}: {before} then {after}");
                if before >= step {
                    prop_assert!((after - (before - step)).abs() < 1e-3);
                } else if after > 0.0 {
                    // Overshot the target: never by more than the step just taken
                    prop_assert!(after <= step, "overshoot {after} > {step}");
                }
                steps += 1;
                prop_assert!(steps <= 400, "{start} -> {target} did not converge");
            }
        }
    }
}
