//! Vector type alias for 3D positions and directions.

use nalgebra::Vector3;

/// 3D vector type for world positions, surface normals, and Euler triples.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, used throughout
/// the crate for collision points, direction vectors, and rotations
/// expressed as Euler angles in degrees.
pub type Vec3 = Vector3<f32>;

/// World up axis (+Y).
#[inline]
pub fn world_up() -> Vec3 {
    Vec3::new(0.0, 1.0, 0.0)
}

/// World forward axis (+Z).
#[inline]
pub fn world_forward() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}

/// World right axis (+X).
#[inline]
pub fn world_right() -> Vec3 {
    Vec3::new(1.0, 0.0, 0.0)
}
