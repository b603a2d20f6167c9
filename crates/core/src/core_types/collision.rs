//! Event and request types exchanged with the external particle systems.

use crate::core_types::vec3::Vec3;

/// One particle/surface intersection delivered by the external physics feed.
///
/// The core makes no assumption about `normal` beyond "direction reported by
/// the collider"; it is sanitized before any math is done with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionEvent {
    /// World-space intersection point
    pub position: Vec3,
    /// Surface normal at the intersection point
    pub normal: Vec3,
}

impl CollisionEvent {
    /// Create a collision event from an intersection point and surface normal.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// One outbound emission request for a splash particle system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitParams {
    /// World-space spawn position
    pub position: Vec3,
    /// Particle orientation as Euler angles in degrees
    pub rotation: Vec3,
    /// Number of particles to spawn (always 1 from this core)
    pub count: u32,
}

/// Which of the two configured splash decal types an emission belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplashKind {
    /// Flat, ground-aligned ripple
    Horizontal,
    /// Upward, camera-facing splash
    Vertical,
}

impl SplashKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}
