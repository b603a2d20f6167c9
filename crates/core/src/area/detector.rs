//! Collision-forwarding adapter for child collider surfaces.

use tracing::debug;

use crate::area::RainArea;
use crate::core_types::collision::CollisionEvent;
use crate::core_types::vec3::Vec3;

/// Forwards collision notifications from one child surface to the owning
/// [`RainArea`].
///
/// The physics integration typically reports collisions per collider; this
/// adapter tags each batch with the surface it came from before handing it
/// to the area's pipeline. It holds no state beyond the surface name.
#[derive(Clone, Debug)]
pub struct RainCollisionDetector {
    surface: String,
}

impl RainCollisionDetector {
    /// Create a detector for a named child surface.
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
        }
    }

    /// Name of the surface this detector watches.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Forward a batch of collision events to the owning area.
    pub fn on_particle_collision(
        &self,
        area: &mut RainArea,
        events: &[CollisionEvent],
        camera_position: Option<Vec3>,
    ) {
        debug!(
            surface = %self.surface,
            count = events.len(),
            "forwarding particle collisions"
        );
        area.handle_collisions(events, camera_position);
    }
}
