//! Decal orientation synthesis.
//!
//! Builds the Euler rotation for one splash decal from the collision's
//! surface normal, the configured splash settings, and (for camera-facing
//! decals) the camera position. Every step has a defined fallback so a
//! degenerate or non-finite input can never propagate NaN into an emission
//! request: the worst case is a logged zero rotation.
//!
//! A look-rotation (forward direction + up hint) only has a defined basis
//! when the two vectors are not collinear. The flat-ground case — decal
//! forward `-normal` with normal equal to world up — is the *common* path
//! here, so [`look_rotation`] synthesizes an orthogonal up whenever the
//! hint degenerates instead of leaving that to callers.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core_types::vec3::{world_forward, world_right, world_up, Vec3};
use crate::placement::eligibility::angle_between_degrees;
use crate::placement::sanitize::{is_finite, sanitize_direction, MIN_DIRECTION_SQ_LENGTH};

/// Forward/up pairs closer than this (in degrees) to 0° or 180° are treated
/// as parallel and routed through the fallback-up ladder.
const PARALLEL_EPSILON_DEGREES: f32 = 0.1;

/// Authored orientation settings for one splash kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplashSettings {
    /// If true the decal faces the camera; if false it lies flat against
    /// the surface, facing outward along the inverse normal.
    pub face_camera: bool,
    /// Rotation offset around X in degrees (-180..180)
    pub rotation_x_offset: f32,
    /// Rotation offset around Y in degrees (-180..180)
    pub rotation_y_offset: f32,
    /// Rotation offset around Z in degrees (-180..180)
    pub rotation_z_offset: f32,
}

impl SplashSettings {
    /// Default settings for the horizontal (ground ripple) kind: flat on
    /// the surface, no offset.
    pub fn horizontal() -> Self {
        Self {
            face_camera: false,
            rotation_x_offset: 0.0,
            rotation_y_offset: 0.0,
            rotation_z_offset: 0.0,
        }
    }

    /// Default settings for the vertical (upward splash) kind: faces the
    /// camera, rotated 90° around Y so the sprite stands upright.
    pub fn vertical() -> Self {
        Self {
            face_camera: true,
            rotation_x_offset: 0.0,
            rotation_y_offset: 90.0,
            rotation_z_offset: 0.0,
        }
    }

    /// Clamp offsets to the authored -180..180 range; non-finite offsets
    /// reset to zero.
    pub(crate) fn clamped(self) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.clamp(-180.0, 180.0) } else { 0.0 };
        Self {
            face_camera: self.face_camera,
            rotation_x_offset: clamp(self.rotation_x_offset),
            rotation_y_offset: clamp(self.rotation_y_offset),
            rotation_z_offset: clamp(self.rotation_z_offset),
        }
    }
}

/// An up vector guaranteed orthogonal to `forward`.
///
/// Prefers the cross product with world right; when `forward` is itself
/// parallel to world right, the cross product with world up is orthogonal
/// instead. Exactly one of the two is always non-degenerate for a unit
/// `forward`.
fn orthogonal_up(forward: &Vec3) -> Vec3 {
    let up = forward.cross(&world_right());
    if up.norm_squared() < MIN_DIRECTION_SQ_LENGTH {
        forward.cross(&world_up()).normalize()
    } else {
        up.normalize()
    }
}

/// Orientation with local +Z pointing along `forward` and local +Y as close
/// as possible to `up`.
///
/// Total: a degenerate `forward` falls back to world forward, and a
/// non-finite `up` hint, or one within [`PARALLEL_EPSILON_DEGREES`] of
/// (anti-)parallel to `forward`, is replaced by a synthesized orthogonal
/// up, so the resulting basis is always well defined. Callers pass unit
/// vectors as the hint.
pub fn look_rotation(forward: &Vec3, up: &Vec3) -> UnitQuaternion<f32> {
    let forward = sanitize_direction(forward, world_forward());
    // For unit vectors the cross product norm is the sine of the angle
    // between them, so this matches the near-parallel band exactly.
    let collinear_sin = PARALLEL_EPSILON_DEGREES.to_radians().sin();
    let up = if !is_finite(up) || forward.cross(up).norm_squared() < collinear_sin * collinear_sin
    {
        orthogonal_up(&forward)
    } else {
        *up
    };
    UnitQuaternion::face_towards(&forward, &up)
}

/// Offset rotation from the authored per-axis offsets, applied in X, Y, Z
/// order.
fn offset_rotation(settings: &SplashSettings) -> UnitQuaternion<f32> {
    UnitQuaternion::from_axis_angle(&Vector3::x_axis(), settings.rotation_x_offset.to_radians())
        * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), settings.rotation_y_offset.to_radians())
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), settings.rotation_z_offset.to_radians())
}

/// Compute the final decal rotation as Euler angles in degrees.
///
/// `camera_position` is only consulted when `settings.face_camera` is true;
/// `None` substitutes the world forward direction, which is a handled
/// condition rather than an error.
///
/// Deterministic and side-effect-free apart from logging on fallback paths.
pub fn compute_rotation(
    position: &Vec3,
    surface_normal: &Vec3,
    settings: &SplashSettings,
    camera_position: Option<Vec3>,
) -> Vec3 {
    let normal = sanitize_direction(surface_normal, world_up());

    let base = if settings.face_camera {
        let raw = camera_position.map_or_else(world_forward, |camera| camera - position);
        let to_camera = sanitize_direction(&raw, world_forward());

        let angle = angle_between_degrees(&to_camera, &normal);
        if angle < PARALLEL_EPSILON_DEGREES || (angle - 180.0).abs() < PARALLEL_EPSILON_DEGREES {
            // Camera direction is (anti-)parallel to the surface normal, so
            // the normal cannot serve as the up hint.
            debug!(
                angle_degrees = angle,
                "camera direction parallel to surface normal, using fallback up"
            );
            look_rotation(&to_camera, &orthogonal_up(&to_camera))
        } else {
            look_rotation(&to_camera, &normal)
        }
    } else {
        look_rotation(&(-normal), &world_up())
    };

    let final_rotation = base * offset_rotation(settings);
    let (roll, pitch, yaw) = final_rotation.euler_angles();
    let euler = Vec3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees());

    if is_finite(&euler) {
        euler
    } else {
        warn!("invalid decal rotation computed, returning zero rotation");
        Vec3::zeros()
    }
}
