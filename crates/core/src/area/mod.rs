//! Rain area orchestration.
//!
//! A [`RainArea`] owns the spatial dedup grid and the references to the
//! external particle emitters, and runs each collision event through the
//! synchronous accept/emit/register pipeline: eligibility filter, grid
//! occupancy query, orientation synthesis, then up to two emission requests
//! and exactly one grid registration.

pub mod config;
pub mod detector;
pub mod emitter;

use tracing::{debug, error, warn};

pub use config::RainAreaConfig;
pub use detector::RainCollisionDetector;
pub use emitter::{RainEmitter, SplashEmitter};

use crate::core_types::collision::{CollisionEvent, EmitParams, SplashKind};
use crate::core_types::spatial::SpatialGrid;
use crate::core_types::vec3::Vec3;
use crate::placement::eligibility::is_valid_collision;
use crate::placement::orientation::{compute_rotation, SplashSettings};
use crate::placement::sanitize::is_finite;

/// Tolerance for detecting a changed rain radius between ticks.
const RADIUS_CHANGE_EPSILON: f32 = 1e-6;

/// Orchestrator for procedural rain-splash decal placement.
///
/// One instance owns one [`SpatialGrid`] scoped to its own lifetime;
/// deactivating the owning scene object drops the area and its dedup
/// history with it. All processing is synchronous on the host's main loop:
/// collision batches are handled to completion in delivery order, and the
/// host calls [`RainArea::on_tick`] once per frame for position validation
/// and parameter-change detection.
pub struct RainArea {
    config: RainAreaConfig,
    grid: SpatialGrid,
    position: Vec3,
    last_rain_radius: f32,
    rain: Option<Box<dyn RainEmitter>>,
    horizontal: Option<Box<dyn SplashEmitter>>,
    vertical: Option<Box<dyn SplashEmitter>>,
}

impl RainArea {
    /// Create a rain area at the world origin.
    ///
    /// The config is clamped to its authored ranges, the dedup grid is
    /// sized at `2 × splash_spacing` (so a 3×3×3 neighborhood query is
    /// guaranteed to see every point within `splash_spacing`), and the
    /// initial shape radius is pushed to the rain emitter. Any emitter may
    /// be absent; the corresponding work is skipped with a diagnostic.
    pub fn new(
        config: RainAreaConfig,
        rain: Option<Box<dyn RainEmitter>>,
        horizontal: Option<Box<dyn SplashEmitter>>,
        vertical: Option<Box<dyn SplashEmitter>>,
    ) -> Self {
        let config = config.clamped();
        let mut area = Self {
            grid: SpatialGrid::new(config.splash_spacing * 2.0),
            position: Vec3::zeros(),
            last_rain_radius: config.rain_radius,
            config,
            rain,
            horizontal,
            vertical,
        };
        area.update_rain_shape();
        area
    }

    /// Per-frame housekeeping: transform validation and parameter-change
    /// detection.
    ///
    /// A non-finite position is reset to the world origin rather than
    /// allowed to corrupt grid keys or emission requests. A changed rain
    /// radius is pushed to the rain emitter once.
    pub fn on_tick(&mut self) {
        if !is_finite(&self.position) {
            error!(
                x = self.position.x,
                y = self.position.y,
                z = self.position.z,
                "invalid rain area position, resetting to origin"
            );
            self.position = Vec3::zeros();
        }

        if (self.config.rain_radius - self.last_rain_radius).abs() > RADIUS_CHANGE_EPSILON {
            self.update_rain_shape();
            self.last_rain_radius = self.config.rain_radius;
        }
    }

    /// Run a batch of collision events through the placement pipeline.
    ///
    /// Per event: a non-finite position discards the event entirely; an
    /// eligible, unoccupied position triggers emission for both splash
    /// kinds and exactly one grid registration. Events are processed in
    /// delivery order.
    pub fn handle_collisions(&mut self, events: &[CollisionEvent], camera_position: Option<Vec3>) {
        if self.rain.is_none() {
            warn!("rain emitter not assigned, ignoring collision events");
            return;
        }

        for event in events {
            if !is_finite(&event.position) {
                warn!("discarding collision event with invalid position");
                continue;
            }

            if is_valid_collision(&event.normal, self.config.max_slope_for_splash)
                && !self.grid.is_occupied(&event.position, self.config.splash_spacing)
            {
                self.emit_decals(&event.position, &event.normal, camera_position);
                self.grid.register(event.position);
            }
        }
    }

    /// Issue emission requests for both splash kinds at an accepted
    /// collision point. Each kind is skipped independently when its emitter
    /// is absent or its rotation fails validation.
    fn emit_decals(&mut self, position: &Vec3, normal: &Vec3, camera_position: Option<Vec3>) {
        let horizontal_settings = self.config.horizontal;
        let vertical_settings = self.config.vertical;
        emit_kind(
            SplashKind::Horizontal,
            &mut self.horizontal,
            position,
            normal,
            &horizontal_settings,
            camera_position,
        );
        emit_kind(
            SplashKind::Vertical,
            &mut self.vertical,
            position,
            normal,
            &vertical_settings,
            camera_position,
        );
    }

    fn update_rain_shape(&mut self) {
        let radius = self.config.rain_radius;
        if let Some(rain) = self.rain.as_mut() {
            rain.set_shape_radius(radius, radius);
        } else {
            warn!("rain emitter not assigned, cannot update shape radius");
        }
    }

    /// Current world position of the area.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the area (normally driven by the owning transform).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Active (clamped) configuration.
    pub fn config(&self) -> &RainAreaConfig {
        &self.config
    }

    /// Change the rain emitter shape radius; the update is pushed on the
    /// next tick.
    ///
    /// This is the only parameter the host may change after construction.
    /// Splash spacing in particular is fixed for the area's lifetime: the
    /// dedup grid's cell size is derived from it, and a spacing wider than
    /// the cell size would let the 3×3×3 neighborhood query miss nearby
    /// points.
    pub fn set_rain_radius(&mut self, radius: f32) {
        if !radius.is_finite() {
            warn!("ignoring non-finite rain radius {radius}");
            return;
        }
        let (min, max) = RainAreaConfig::RAIN_RADIUS_RANGE;
        let clamped = radius.clamp(min, max);
        if clamped != radius {
            warn!("rain radius {radius} out of range, clamped to {clamped}");
        }
        self.config.rain_radius = clamped;
    }

    /// The dedup grid, exposed for occupancy introspection.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Number of splash positions registered so far (grows for the lifetime
    /// of the area; there is no eviction).
    pub fn decal_count(&self) -> usize {
        self.grid.point_count()
    }
}

fn emit_kind(
    kind: SplashKind,
    emitter: &mut Option<Box<dyn SplashEmitter>>,
    position: &Vec3,
    normal: &Vec3,
    settings: &SplashSettings,
    camera_position: Option<Vec3>,
) {
    let Some(emitter) = emitter.as_mut() else {
        debug!(kind = kind.name(), "splash emitter not assigned, skipping");
        return;
    };

    let rotation = compute_rotation(position, normal, settings, camera_position);
    if is_finite(&rotation) {
        emitter.emit(EmitParams {
            position: *position,
            rotation,
            count: 1,
        });
    } else {
        warn!(
            kind = kind.name(),
            "skipping splash emission due to invalid rotation"
        );
    }
}
