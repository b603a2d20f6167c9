//! Collision eligibility: the surface slope filter.
//!
//! Splash decals are only plausible on roughly horizontal surfaces; a
//! collision against a wall is filtered out before any orientation work.

use crate::core_types::vec3::{world_up, Vec3};
use crate::placement::sanitize::MIN_DIRECTION_SQ_LENGTH;

/// Unsigned angle between two vectors in degrees, clamped to [0, 180].
///
/// Degenerate inputs (zero-length or non-finite) report 0°, which keeps the
/// caller's comparison well defined; genuinely bad normals are handled by
/// the sanitize step before orientation math.
pub fn angle_between_degrees(a: &Vec3, b: &Vec3) -> f32 {
    let len_sq = a.norm_squared() * b.norm_squared();
    if !len_sq.is_finite() || len_sq < MIN_DIRECTION_SQ_LENGTH * MIN_DIRECTION_SQ_LENGTH {
        return 0.0;
    }
    let cos = (a.dot(b) / len_sq.sqrt()).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// True iff the surface normal is within `max_slope_degrees` of world up
/// (inclusive at the boundary).
pub fn is_valid_collision(normal: &Vec3, max_slope_degrees: f32) -> bool {
    angle_between_degrees(normal, &world_up()) <= max_slope_degrees
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_between_axes() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(angle_between_degrees(&x, &y), 90.0, epsilon = 1e-3);
        assert_relative_eq!(angle_between_degrees(&x, &x), 0.0, epsilon = 1e-3);
        assert_relative_eq!(angle_between_degrees(&x, &-x), 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_angle_ignores_magnitude() {
        let a = Vec3::new(0.0, 10.0, 0.0);
        let b = Vec3::new(5.0, 5.0, 0.0);
        assert_relative_eq!(angle_between_degrees(&a, &b), 45.0, epsilon = 1e-3);
    }

    #[test]
    fn test_flat_ground_accepted() {
        assert!(is_valid_collision(&Vec3::new(0.0, 1.0, 0.0), 35.0));
    }

    #[test]
    fn test_steep_surface_rejected() {
        // ~60 degrees from up
        let n = Vec3::new(0.0, 0.5, 0.87);
        assert!(!is_valid_collision(&n, 35.0));
    }

    #[test]
    fn test_wall_rejected() {
        assert!(!is_valid_collision(&Vec3::new(1.0, 0.0, 0.0), 35.0));
    }

    #[test]
    fn test_boundary_inclusive() {
        // A normal at exactly max slope passes
        let rad = 35.0_f32.to_radians();
        let n = Vec3::new(rad.sin(), rad.cos(), 0.0);
        let angle = angle_between_degrees(&n, &Vec3::new(0.0, 1.0, 0.0));
        assert!(is_valid_collision(&n, angle));
    }
}
