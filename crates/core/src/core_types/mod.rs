//! Core types and utilities

pub mod collision;
pub mod spatial;
pub mod vec3;

pub use collision::{CollisionEvent, EmitParams, SplashKind};
pub use spatial::{CellKey, SpatialGrid};
pub use vec3::Vec3;
