//! Pure decal placement policy: eligibility filtering, numeric
//! sanitization, and orientation synthesis.
//!
//! Everything here is side-effect-free (apart from diagnostics on fallback
//! paths) and operates on values; the stateful parts of the pipeline live
//! in [`crate::area`].

pub mod eligibility;
pub mod orientation;
pub mod sanitize;

pub use eligibility::{angle_between_degrees, is_valid_collision};
pub use orientation::{compute_rotation, look_rotation, SplashSettings};
pub use sanitize::{is_finite, sanitize_direction};
