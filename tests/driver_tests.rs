// Frame driver orchestration with recording sinks.

use anim_core::*;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Captured {
    frames: Vec<(u64, usize, Vec2, f32)>, // index, section, group offset, camera y
    rotations: Vec<Vec<Vec3>>,
}

type OrderLog = Rc<RefCell<Vec<&'static str>>>;

struct RecordingRenderer(Rc<RefCell<Captured>>, OrderLog);

impl RenderSink for RecordingRenderer {
    fn present(&mut self, frame: &FrameView<'_>) {
        let mut c = self.0.borrow_mut();
        c.frames.push((
            frame.frame_index,
            frame.section_index,
            frame.camera.group_offset,
            frame.camera.camera_y,
        ));
        c.rotations.push(frame.targets.iter().map(|t| t.rotation).collect());
        self.1.borrow_mut().push("present");
    }
}

struct NullRenderer;

impl RenderSink for NullRenderer {
    fn present(&mut self, _frame: &FrameView<'_>) {}
}

struct RecordingSink(Vec<TransitionRequest>, OrderLog);

impl TransitionSink for RecordingSink {
    fn submit(&mut self, request: TransitionRequest) {
        self.0.push(request);
        self.1.borrow_mut().push("submit");
    }
}

fn driver() -> FrameDriver {
    FrameDriver::new(AnimationParams::default(), Viewport::new(1600.0, 800.0).unwrap()).unwrap()
}

fn recorders() -> (RecordingSink, RecordingRenderer, Rc<RefCell<Captured>>, OrderLog) {
    let order = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::new(RefCell::new(Captured::default()));
    (
        RecordingSink(Vec::new(), order.clone()),
        RecordingRenderer(captured.clone(), order.clone()),
        captured,
        order,
    )
}

#[test]
fn default_driver_builds_section_stack() {
    let d = driver();
    assert_eq!(d.targets().len(), 3);
    assert_eq!(d.targets()[1].position, Vec3::new(-2.0, -4.0, 0.0));
    assert_eq!(d.particles().len(), SECTION_PARTICLE_COUNT);
    assert_eq!(d.particle_mode(), ParticleMode::Wave);
}

#[test]
fn construction_errors_are_reported() {
    let vp = Viewport {
        width: 0.0,
        height: 0.0,
    };
    assert!(matches!(
        FrameDriver::new(AnimationParams::default(), vp),
        Err(CoreError::InvalidViewport { .. })
    ));
    let vp = Viewport::new(100.0, 100.0).unwrap();
    let empty = FrameDriver::with_parts(
        AnimationParams::default(),
        vp,
        Vec::new(),
        ParticleField::new(Vec::new()),
    );
    assert!(matches!(empty, Err(CoreError::NoSections)));
}

#[test]
fn scroll_past_threshold_fires_one_request_before_render() {
    let mut d = driver();
    let (mut sink, mut renderer, captured, order) = recorders();

    d.on_scroll(0.0);
    let change = d.on_scroll(800.0 * 1.4);
    assert_eq!(change, ScrollChange { changed: true, index: 1 });
    assert_eq!(d.pending_transitions().len(), 1);

    d.tick_at(0.016, &mut sink, &mut renderer);
    assert_eq!(sink.0.len(), 1);
    assert_eq!(sink.0[0].target_index, 1);
    assert_eq!(sink.0[0].rotation_delta, SECTION_ROTATION_DELTA);
    assert_eq!(*order.borrow(), vec!["submit", "present"]);
    assert_eq!(captured.borrow().frames[0].1, 1);
    assert!(d.pending_transitions().is_empty());
    assert_eq!(
        d.transition_phase(1),
        TransitionPhase::Transitioning { in_flight: 1 }
    );

    // Further scrolling inside section 1 fires nothing more.
    d.on_scroll(800.0 * 1.2);
    d.on_scroll(800.0 * 0.8);
    d.tick_at(0.032, &mut sink, &mut renderer);
    assert_eq!(sink.0.len(), 1);
}

#[test]
fn skipping_sections_only_targets_the_entered_one() {
    let mut d = driver();
    let mut sink: Vec<TransitionRequest> = Vec::new();
    let mut renderer = NullRenderer;
    d.on_scroll(1600.0);
    d.tick_at(0.016, &mut sink, &mut renderer);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].target_index, 2);
    assert_eq!(d.transition_phase(1), TransitionPhase::Idle);
}

#[test]
fn pointer_parallax_is_damped_into_camera_group() {
    let mut d = driver();
    let (mut sink, mut renderer, captured, _) = recorders();
    d.on_pointer_move(1600.0, 0.0); // right edge, top edge
    assert_eq!(d.pointer(), PointerState { x: 0.5, y: -0.5 });

    d.tick_at(0.1, &mut sink, &mut renderer);
    let offset = captured.borrow().frames[0].2;
    // target (0.5, 0.5), rate 2, delta 0.1
    assert!((offset - Vec2::new(0.1, 0.1)).length() < 1e-6, "{offset:?}");

    for i in 2..200 {
        d.tick_at(i as f32 * 0.1, &mut sink, &mut renderer);
    }
    assert!((d.camera().group_offset - Vec2::new(0.5, 0.5)).length() < 1e-4);
}

#[test]
fn camera_height_tracks_scroll_offset() {
    let mut d = driver();
    let (mut sink, mut renderer, captured, _) = recorders();
    d.on_scroll(200.0);
    d.tick_at(0.016, &mut sink, &mut renderer);
    assert!((captured.borrow().frames[0].3 - -1.0).abs() < 1e-6);
    assert!(sink.0.is_empty());
}

#[test]
fn targets_spin_at_constant_angular_velocity() {
    let mut d = driver();
    let (mut sink, mut renderer, captured, _) = recorders();
    d.tick_at(0.5, &mut sink, &mut renderer);
    d.tick_at(1.0, &mut sink, &mut renderer);
    let c = captured.borrow();
    let rot = &c.rotations;
    for r in &rot[0] {
        assert!((*r - Vec3::new(0.05, 0.06, 0.0)).length() < 1e-6);
    }
    for r in &rot[1] {
        assert!((*r - Vec3::new(0.1, 0.12, 0.0)).length() < 1e-6);
    }
}

#[test]
fn particles_follow_elapsed_time_and_mode() {
    let seeds = vec![Vec3::new(2.0, 0.0, 0.0), Vec3::new(-1.0, 0.5, 3.0)];
    let mut d = FrameDriver::with_parts(
        AnimationParams::particle_field(),
        Viewport::new(1600.0, 800.0).unwrap(),
        section_targets(3, 4.0),
        ParticleField::new(seeds),
    )
    .unwrap();
    let mut sink: Vec<TransitionRequest> = Vec::new();
    let mut renderer = NullRenderer;

    d.tick_at(0.0, &mut sink, &mut renderer);
    assert!((d.particles().positions()[0].y - 2.0_f32.sin()).abs() < 1e-6);

    assert_eq!(d.toggle_particle_mode(), ParticleMode::Radial);
    d.tick_at(1.0, &mut sink, &mut renderer);
    let p = d.particles().positions()[1];
    assert!((p.z - (1.0_f32 - 5.0).cos() * 2.0).abs() < 1e-6);
    assert!((p.y - (-1.0_f32).sin()).abs() < 1e-6); // still from the t=0 wave frame
}

#[test]
fn section_preset_keeps_particles_spread_down_the_stack() {
    let mut d = driver();
    assert!(!d.params().animate_particles);
    let seeds = d.particles().seeds().to_vec();
    let deep_before = seeds.iter().filter(|p| p.y < -2.0).count();
    assert!(deep_before > 0);

    let mut sink: Vec<TransitionRequest> = Vec::new();
    let mut renderer = NullRenderer;
    d.tick_at(0.016, &mut sink, &mut renderer);
    d.toggle_particle_mode();
    d.tick_at(0.5, &mut sink, &mut renderer);

    let live = d.particles().positions();
    assert_eq!(live, &seeds[..]);
    assert_eq!(live.iter().filter(|p| p.y < -2.0).count(), deep_before);
    let min_y = live.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    assert!(min_y < -OBJECTS_DISTANCE, "min_y={min_y}");
}

#[test]
fn field_preset_animates_particles_every_tick() {
    let params = AnimationParams::particle_field();
    assert!(params.animate_particles);
    let mut d = FrameDriver::new(params, Viewport::new(1600.0, 800.0).unwrap()).unwrap();
    let mut sink: Vec<TransitionRequest> = Vec::new();
    let mut renderer = NullRenderer;
    d.tick_at(0.25, &mut sink, &mut renderer);
    for (live, seed) in d.particles().positions().iter().zip(d.particles().seeds()) {
        assert!((live.y - (0.25 + seed.x).sin()).abs() < 1e-6);
    }
}

#[test]
fn resize_changes_pointer_normalization_and_ignores_zero() {
    let mut d = driver();
    assert!(d.on_resize(800.0, 400.0));
    d.on_pointer_move(0.0, 400.0);
    assert_eq!(d.pointer(), PointerState { x: -0.5, y: 0.5 });
    assert!(!d.on_resize(0.0, 0.0));
    assert_eq!(d.viewport(), Viewport::new(800.0, 400.0).unwrap());
}

#[test]
fn runtime_tuning_updates_follower_and_requests() {
    let mut d = driver();
    d.set_follow_rate(4.0);
    d.set_transition_duration(0.75);
    d.set_rotation_speed(Vec3::ZERO);
    assert_eq!(d.params().follow_rate, 4.0);

    let mut sink: Vec<TransitionRequest> = Vec::new();
    let mut renderer = NullRenderer;
    d.on_pointer_move(1600.0, 400.0); // x = 0.5, y = 0
    d.on_scroll(800.0);
    d.tick_at(0.1, &mut sink, &mut renderer);
    assert_eq!(sink[0].duration_sec, 0.75);
    assert!((d.camera().group_offset.x - 0.2).abs() < 1e-6);
    assert_eq!(d.targets()[0].rotation, Vec3::ZERO);
    assert_eq!(d.frame_index(), 1);
}

#[test]
fn runtime_setters_clamp_and_reject_non_finite() {
    let mut d = driver();
    d.set_follow_rate(50.0);
    assert_eq!(d.params().follow_rate, FOLLOW_RATE_MAX);
    d.set_follow_rate(f32::NAN);
    assert_eq!(d.params().follow_rate, FOLLOW_RATE_MAX);

    d.set_rotation_speed(Vec3::new(-1.0, 3.0, 0.5));
    assert_eq!(d.params().rotation_speed, Vec3::new(0.0, ROTATION_SPEED_MAX, 0.5));
    d.set_rotation_speed(Vec3::new(f32::NAN, 0.1, 0.1));
    assert_eq!(d.params().rotation_speed, Vec3::new(0.0, ROTATION_SPEED_MAX, 0.5));

    d.set_transition_duration(-2.0);
    assert_eq!(d.params().transition_duration_sec, 0.0);
    d.set_transition_duration(f32::INFINITY);
    assert_eq!(d.params().transition_duration_sec, 0.0);
    d.set_transition_duration(60.0);
    assert_eq!(d.params().transition_duration_sec, TRANSITION_DURATION_MAX_SEC);
    assert_eq!(d.params().validate(), Ok(()));

    let mut sink: Vec<TransitionRequest> = Vec::new();
    d.on_scroll(800.0);
    d.tick_at(0.016, &mut sink, &mut NullRenderer);
    assert_eq!(sink[0].duration_sec, TRANSITION_DURATION_MAX_SEC);
}
