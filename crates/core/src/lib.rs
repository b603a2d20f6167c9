//! Rain Splash Placement Core
//!
//! Procedural decal placement for a rain-splash visual effect. The crate
//! consumes particle-collision events from an external rain emitter, filters
//! them by surface slope and spatial density, computes per-decal
//! orientation, and issues emission requests for secondary splash effects at
//! the collision point.
//!
//! ## Pipeline
//!
//! physics feed → [`RainCollisionDetector`] → [`RainArea::handle_collisions`]
//! → slope filter → [`SpatialGrid`] occupancy query → orientation synthesis
//! → up to two emission requests → grid registration.
//!
//! All processing is single threaded and synchronous on the host's main
//! loop. Every failure mode is non-fatal: degenerate vectors fall back to
//! documented defaults, non-finite inputs are discarded or reset with a
//! logged diagnostic, and the worst-case outcome is fewer decals, never a
//! panic.

pub mod area;
pub mod core_types;
pub mod placement;

pub use area::{
    RainArea, RainAreaConfig, RainCollisionDetector, RainEmitter, SplashEmitter,
};
pub use core_types::{CellKey, CollisionEvent, EmitParams, SpatialGrid, SplashKind, Vec3};
pub use placement::{compute_rotation, is_valid_collision, SplashSettings};
