//! End-to-end placement scenarios driven through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use rain_sim_core::{
    CollisionEvent, EmitParams, RainArea, RainAreaConfig, RainEmitter, SplashEmitter, Vec3,
};

#[derive(Clone, Default)]
struct CountingEmitter {
    emitted: Rc<RefCell<Vec<EmitParams>>>,
}

impl SplashEmitter for CountingEmitter {
    fn emit(&mut self, params: EmitParams) {
        self.emitted.borrow_mut().push(params);
    }
}

struct NullRainEmitter;

impl RainEmitter for NullRainEmitter {
    fn set_shape_radius(&mut self, _radius: f32, _thickness: f32) {}
}

fn build_area(config: RainAreaConfig) -> (RainArea, CountingEmitter, CountingEmitter) {
    let horizontal = CountingEmitter::default();
    let vertical = CountingEmitter::default();
    let area = RainArea::new(
        config,
        Some(Box::new(NullRainEmitter)),
        Some(Box::new(horizontal.clone())),
        Some(Box::new(vertical.clone())),
    );
    (area, horizontal, vertical)
}

fn flat_up(x: f32, y: f32, z: f32) -> CollisionEvent {
    CollisionEvent::new(Vec3::new(x, y, z), Vec3::new(0.0, 1.0, 0.0))
}

#[test]
fn test_spacing_scenario_accept_reject_accept() {
    // maxSlope=35, spacing=0.1: (0,0,0) accepted, (0.05,0,0) rejected as
    // within spacing, (1,0,0) accepted as far enough away.
    let config = RainAreaConfig {
        max_slope_for_splash: 35.0,
        splash_spacing: 0.1,
        ..RainAreaConfig::default()
    };
    let (mut area, horizontal, vertical) = build_area(config);

    area.handle_collisions(&[flat_up(0.0, 0.0, 0.0)], None);
    assert_eq!(area.decal_count(), 1, "first collision accepted");

    area.handle_collisions(&[flat_up(0.05, 0.0, 0.0)], None);
    assert_eq!(area.decal_count(), 1, "collision within spacing rejected");

    area.handle_collisions(&[flat_up(1.0, 0.0, 0.0)], None);
    assert_eq!(area.decal_count(), 2, "distant collision accepted");

    assert_eq!(horizontal.emitted.borrow().len(), 2);
    assert_eq!(vertical.emitted.borrow().len(), 2);
}

#[test]
fn test_steep_normal_rejected_regardless_of_spacing() {
    // ~60 degrees from up with maxSlope=35: rejected even on an empty grid.
    let (mut area, horizontal, vertical) = build_area(RainAreaConfig {
        max_slope_for_splash: 35.0,
        ..RainAreaConfig::default()
    });

    let steep = CollisionEvent::new(Vec3::new(3.0, 0.0, 3.0), Vec3::new(0.0, 0.5, 0.87));
    area.handle_collisions(&[steep], None);

    assert_eq!(area.decal_count(), 0);
    assert!(horizontal.emitted.borrow().is_empty());
    assert!(vertical.emitted.borrow().is_empty());
}

#[test]
fn test_batch_processed_in_delivery_order() {
    // Two events within spacing of each other in one batch: the first wins.
    let (mut area, horizontal, _) = build_area(RainAreaConfig::default());

    area.handle_collisions(&[flat_up(0.0, 0.0, 0.0), flat_up(0.05, 0.0, 0.0)], None);

    let emitted = horizontal.emitted.borrow();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].position, Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_emission_carries_finite_rotation_and_count_one() {
    let (mut area, horizontal, vertical) = build_area(RainAreaConfig::default());

    area.handle_collisions(&[flat_up(0.5, 0.0, -0.5)], Some(Vec3::new(0.0, 2.0, -5.0)));

    for record in horizontal
        .emitted
        .borrow()
        .iter()
        .chain(vertical.emitted.borrow().iter())
    {
        assert_eq!(record.count, 1);
        assert!(record.rotation.x.is_finite());
        assert!(record.rotation.y.is_finite());
        assert!(record.rotation.z.is_finite());
    }
}

#[test]
fn test_nan_inputs_never_reach_emitters_as_nan() {
    let (mut area, horizontal, vertical) = build_area(RainAreaConfig::default());

    // NaN normal: sanitized to world up, so the event is still placeable
    let nan_normal = CollisionEvent::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(f32::NAN, f32::NAN, f32::NAN),
    );
    // Camera directly above makes to_camera anti-parallel checks reachable
    area.handle_collisions(&[nan_normal], Some(Vec3::new(f32::NAN, f32::NAN, f32::NAN)));

    for record in horizontal
        .emitted
        .borrow()
        .iter()
        .chain(vertical.emitted.borrow().iter())
    {
        assert!(
            record.rotation.x.is_finite()
                && record.rotation.y.is_finite()
                && record.rotation.z.is_finite(),
            "NaN inputs must never produce NaN rotations: {:?}",
            record.rotation
        );
    }
}

#[test]
fn test_duplicate_position_across_batches_rejected() {
    let (mut area, horizontal, _) = build_area(RainAreaConfig::default());

    area.handle_collisions(&[flat_up(2.0, 0.0, 2.0)], None);
    area.handle_collisions(&[flat_up(2.0, 0.0, 2.0)], None);

    assert_eq!(horizontal.emitted.borrow().len(), 1);
    assert_eq!(area.decal_count(), 1);
}

#[test]
fn test_runtime_radius_change_leaves_spacing_dedup_intact() {
    let (mut area, horizontal, _) = build_area(RainAreaConfig::default());

    area.handle_collisions(&[flat_up(0.0, 0.0, 0.0)], None);
    area.set_rain_radius(3.0);
    area.on_tick();

    // A collision well inside the active spacing must still be rejected
    // after the only supported runtime parameter change.
    area.handle_collisions(&[flat_up(0.05, 0.0, 0.0)], None);

    assert_eq!(area.decal_count(), 1);
    assert_eq!(horizontal.emitted.borrow().len(), 1);
}

#[test]
fn test_registration_happens_once_per_event_not_per_kind() {
    let (mut area, _, _) = build_area(RainAreaConfig::default());

    area.handle_collisions(&[flat_up(0.0, 0.0, 0.0)], None);

    // Two splash kinds emitted, but exactly one grid registration
    assert_eq!(area.decal_count(), 1);
    assert_eq!(area.grid().point_count(), 1);
}
