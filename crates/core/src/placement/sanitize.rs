//! Numeric validation helpers shared across the placement pipeline.
//!
//! Collision positions, surface normals, camera vectors, and final rotations
//! all pass through the same two checks: component finiteness, and
//! sanitize-or-default for direction vectors. Keeping them here avoids the
//! inline `is_nan`/`is_infinite` ladders repeating at every stage.

use crate::core_types::vec3::Vec3;

/// Directions with squared length below this are treated as degenerate.
pub const MIN_DIRECTION_SQ_LENGTH: f32 = 1e-3;

/// True iff every component of `v` is finite (no NaN, no infinity).
#[inline]
pub fn is_finite(v: &Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/// Return `v` normalized to unit length, or `fallback` when `v` is
/// non-finite or too short to normalize meaningfully.
///
/// The fallback is returned as given; callers pass a unit vector.
#[inline]
pub fn sanitize_direction(v: &Vec3, fallback: Vec3) -> Vec3 {
    if !is_finite(v) || v.norm_squared() < MIN_DIRECTION_SQ_LENGTH {
        fallback
    } else {
        v.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::vec3::{world_forward, world_up};
    use approx::assert_relative_eq;

    #[test]
    fn test_finite_checks() {
        assert!(is_finite(&Vec3::new(1.0, -2.0, 3.0)));
        assert!(!is_finite(&Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(!is_finite(&Vec3::new(0.0, f32::INFINITY, 0.0)));
        assert!(!is_finite(&Vec3::new(0.0, 0.0, f32::NEG_INFINITY)));
    }

    #[test]
    fn test_sanitize_normalizes_valid_input() {
        let v = sanitize_direction(&Vec3::new(0.0, 3.0, 4.0), world_up());
        assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.6, epsilon = 1e-6);
        assert_relative_eq!(v.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_sanitize_falls_back_on_nan() {
        let v = sanitize_direction(&Vec3::new(f32::NAN, f32::NAN, f32::NAN), world_up());
        assert_eq!(v, world_up());
    }

    #[test]
    fn test_sanitize_falls_back_on_near_zero() {
        let v = sanitize_direction(&Vec3::new(1e-4, 0.0, 0.0), world_forward());
        assert_eq!(v, world_forward());
    }
}
