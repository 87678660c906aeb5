//! Per-frame orchestration.
//!
//! The host owns the event loop: it forwards input through the `on_*`
//! handlers whenever events arrive and calls [`FrameDriver::tick`] once per
//! display refresh. Each tick runs the same fixed sequence:
//!
//! 1. advance the clock
//! 2. snapshot pointer/scroll, hand queued section transitions to the sink
//! 3. step the parallax follower and update the camera rig
//! 4. idle-spin every target, then let the sink apply its tweens
//! 5. update the particle field (when the preset animates it)
//! 6. present to the renderer

use glam::Vec3;
use smallvec::SmallVec;

use crate::clock::{Clock, FrameTime};
use crate::constants::{
    FOLLOW_RATE_MAX, FOLLOW_RATE_MIN, ROTATION_SPEED_MAX, TRANSITION_DURATION_MAX_SEC,
};
use crate::error::CoreError;
use crate::follower::DampedFollower;
use crate::params::AnimationParams;
use crate::particles::{ParticleField, ParticleMode};
use crate::scene::{section_targets, AnimationTarget, CameraRig};
use crate::signals::{
    PointerSignal, PointerState, ScrollChange, ScrollSignal, ScrollState, Viewport,
};
use crate::transition::{
    Finished, SectionTrigger, TransitionPhase, TransitionRequest, TransitionSink,
};

/// Everything a renderer needs for one frame, borrowed from the driver.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub frame_index: u64,
    pub time: FrameTime,
    pub camera: &'a CameraRig,
    pub targets: &'a [AnimationTarget],
    pub particles: &'a ParticleField,
    pub section_index: usize,
    pub particle_mode: ParticleMode,
}

/// Consumer of finished frames. Draw calls happen on the other side.
pub trait RenderSink {
    fn present(&mut self, frame: &FrameView<'_>);
}

impl<F> RenderSink for F
where
    F: FnMut(&FrameView<'_>),
{
    fn present(&mut self, frame: &FrameView<'_>) {
        self(frame)
    }
}

pub struct FrameDriver {
    params: AnimationParams,
    viewport: Viewport,
    clock: Clock,
    pointer: PointerSignal,
    scroll: ScrollSignal,
    follower: DampedFollower,
    trigger: SectionTrigger,
    targets: Vec<AnimationTarget>,
    camera: CameraRig,
    particles: ParticleField,
    mode: ParticleMode,
    pending: SmallVec<[TransitionRequest; 4]>,
    frame_index: u64,
}

impl FrameDriver {
    /// Build the default section stack and particle field from `params`.
    pub fn new(params: AnimationParams, viewport: Viewport) -> Result<Self, CoreError> {
        params.validate()?;
        let targets = section_targets(params.section_count, params.objects_distance);
        let particles = ParticleField::scatter(
            params.particle_count,
            params.particle_layout,
            params.particle_seed,
        );
        Self::with_parts(params, viewport, targets, particles)
    }

    /// Drive caller-supplied targets and particles. The section count follows
    /// `targets.len()`.
    pub fn with_parts(
        mut params: AnimationParams,
        viewport: Viewport,
        targets: Vec<AnimationTarget>,
        particles: ParticleField,
    ) -> Result<Self, CoreError> {
        if targets.is_empty() {
            return Err(CoreError::NoSections);
        }
        params.section_count = targets.len();
        params.validate()?;
        let viewport = Viewport::new(viewport.width, viewport.height)?;
        log::info!(
            "[driver] sections={} particles={} viewport={}x{} mode={:?}",
            targets.len(),
            particles.len(),
            viewport.width,
            viewport.height,
            params.particle_mode
        );
        Ok(Self {
            viewport,
            clock: Clock::new(),
            pointer: PointerSignal::new(),
            scroll: ScrollSignal::new(targets.len()),
            follower: DampedFollower::new(params.follow_rate),
            trigger: SectionTrigger::new(
                targets.len(),
                params.transition_rotation,
                params.transition_duration_sec,
                params.transition_easing,
            ),
            camera: CameraRig::default(),
            mode: params.particle_mode,
            targets,
            particles,
            pending: SmallVec::new(),
            frame_index: 0,
            params,
        })
    }

    // ---------------- Input handlers ----------------

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.pointer.on_move(client_x, client_y, self.viewport.width, self.viewport.height);
    }

    /// Record a scroll offset. Entering a new section queues exactly one
    /// transition request for it, delivered at the start of the next tick.
    pub fn on_scroll(&mut self, raw_offset: f32) -> ScrollChange {
        let change = self.scroll.on_scroll(raw_offset, self.viewport.height);
        if change.changed {
            log::info!("[scroll] entered section {}", change.index);
            let request = self.trigger.fire(change.index);
            self.pending.push(request);
        }
        change
    }

    /// Returns false (and keeps the old size) for a degenerate viewport,
    /// which is what a minimized window reports.
    pub fn on_resize(&mut self, width: f32, height: f32) -> bool {
        match Viewport::new(width, height) {
            Ok(v) => {
                self.viewport = v;
                true
            }
            Err(e) => {
                log::debug!("[driver] ignoring resize: {}", e);
                false
            }
        }
    }

    // ---------------- Frame ----------------

    pub fn tick<T, R>(&mut self, transitions: &mut T, renderer: &mut R) -> FrameTime
    where
        T: TransitionSink + ?Sized,
        R: RenderSink + ?Sized,
    {
        let time = self.clock.tick();
        self.run_frame(time, transitions, renderer);
        time
    }

    /// Same as [`tick`](Self::tick) with an injected elapsed time.
    pub fn tick_at<T, R>(
        &mut self,
        elapsed: f32,
        transitions: &mut T,
        renderer: &mut R,
    ) -> FrameTime
    where
        T: TransitionSink + ?Sized,
        R: RenderSink + ?Sized,
    {
        let time = self.clock.tick_at(elapsed);
        self.run_frame(time, transitions, renderer);
        time
    }

    fn run_frame<T, R>(&mut self, time: FrameTime, transitions: &mut T, renderer: &mut R)
    where
        T: TransitionSink + ?Sized,
        R: RenderSink + ?Sized,
    {
        let pointer = self.pointer.read();
        let scroll = self.scroll.read();
        for request in self.pending.drain(..) {
            transitions.submit(request);
        }

        let parallax = pointer.parallax_target(self.params.parallax_amount);
        self.camera.group_offset = self.follower.step(parallax, time.delta);
        self.camera.camera_y = self
            .scroll
            .camera_y(self.viewport.height, self.params.objects_distance);

        let spin = time.delta * self.params.rotation_speed;
        for target in &mut self.targets {
            target.rotation += spin;
        }
        let mut finished = Finished::new();
        transitions.advance(time.delta, &mut self.targets, &mut finished);
        for index in finished {
            self.trigger.complete(index);
        }

        if self.params.animate_particles {
            self.particles.update(time.elapsed, self.mode);
        }

        renderer.present(&FrameView {
            frame_index: self.frame_index,
            time,
            camera: &self.camera,
            targets: &self.targets,
            particles: &self.particles,
            section_index: scroll.section_index,
            particle_mode: self.mode,
        });
        self.frame_index += 1;
    }

    // ---------------- Runtime tuning ----------------
    //
    // Setters clamp into the ranges `AnimationParams::validate` enforces and
    // ignore non-finite input.

    pub fn set_follow_rate(&mut self, rate: f32) {
        if !rate.is_finite() {
            log::debug!("[driver] ignoring follow rate {}", rate);
            return;
        }
        let rate = rate.clamp(FOLLOW_RATE_MIN, FOLLOW_RATE_MAX);
        self.params.follow_rate = rate;
        self.follower.set_rate(rate);
    }

    pub fn set_rotation_speed(&mut self, speed: Vec3) {
        if !speed.is_finite() {
            log::debug!("[driver] ignoring rotation speed {}", speed);
            return;
        }
        self.params.rotation_speed = speed.clamp(Vec3::ZERO, Vec3::splat(ROTATION_SPEED_MAX));
    }

    pub fn set_transition_duration(&mut self, duration_sec: f32) {
        if !duration_sec.is_finite() {
            log::debug!("[driver] ignoring transition duration {}", duration_sec);
            return;
        }
        let duration_sec = duration_sec.clamp(0.0, TRANSITION_DURATION_MAX_SEC);
        self.params.transition_duration_sec = duration_sec;
        self.trigger.set_duration(duration_sec);
    }

    pub fn set_particle_mode(&mut self, mode: ParticleMode) {
        if mode != self.mode {
            log::info!("[particles] mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn toggle_particle_mode(&mut self) -> ParticleMode {
        self.set_particle_mode(self.mode.toggled());
        self.mode
    }

    // ---------------- Accessors ----------------

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.read()
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll.read()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn targets(&self) -> &[AnimationTarget] {
        &self.targets
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn particle_mode(&self) -> ParticleMode {
        self.mode
    }

    pub fn transition_phase(&self, index: usize) -> TransitionPhase {
        self.trigger.phase(index)
    }

    /// Requests queued by scroll events and not yet handed to a sink.
    pub fn pending_transitions(&self) -> &[TransitionRequest] {
        &self.pending
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}
