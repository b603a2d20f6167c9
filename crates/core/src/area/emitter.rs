//! Trait seams between the placement core and the external particle systems.
//!
//! The core never renders anything; it hands emission requests and shape
//! updates across these traits to whatever engine integration hosts it.

use crate::core_types::collision::EmitParams;

/// A particle system that can spawn splash decals on request.
pub trait SplashEmitter {
    /// Spawn particles per `params`. Called once per accepted collision and
    /// splash kind.
    fn emit(&mut self, params: EmitParams);
}

/// The rain particle source whose emission shape tracks the configured
/// rain radius.
pub trait RainEmitter {
    /// Apply a new shape radius and radius-thickness (both set to the same
    /// value by the core).
    fn set_shape_radius(&mut self, radius: f32, thickness: f32);
}
