//! Discrete section-entry transitions.
//!
//! The trigger only decides *that* a target should spin and by how much; the
//! animation over wall-clock time belongs to whatever implements
//! [`TransitionSink`].

use glam::Vec3;
use smallvec::SmallVec;

use crate::scene::AnimationTarget;

/// Named easing curve carried by a request. Evaluation is up to the sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    Power2In,
    Power2Out,
    #[default]
    Power2InOut,
}

impl Easing {
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "none",
            Easing::Power2In => "power2.in",
            Easing::Power2Out => "power2.out",
            Easing::Power2InOut => "power2.inOut",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" | "linear" => Some(Easing::Linear),
            "power2.in" => Some(Easing::Power2In),
            "power2.out" => Some(Easing::Power2Out),
            "power2.inOut" => Some(Easing::Power2InOut),
            _ => None,
        }
    }
}

/// One-shot relative rotation command for a single section target.
///
/// `rotation_delta` is added on top of whatever rotation the target has, so
/// overlapping requests for the same target compose instead of fighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRequest {
    pub target_index: usize,
    pub rotation_delta: Vec3,
    pub duration_sec: f32,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// `in_flight` counts overlapping requests not yet reported complete.
    Transitioning { in_flight: u32 },
}

/// Completed target indices reported by a sink during one frame.
pub type Finished = SmallVec<[usize; 4]>;

/// Consumer of transition requests (a tweening collaborator).
pub trait TransitionSink {
    fn submit(&mut self, request: TransitionRequest);

    /// Apply this frame's share of every in-flight request to `targets` and
    /// push the index of each request that reached its end into `finished`.
    fn advance(
        &mut self,
        _delta: f32,
        _targets: &mut [AnimationTarget],
        _finished: &mut Finished,
    ) {
    }
}

/// Collects requests without animating them.
impl TransitionSink for Vec<TransitionRequest> {
    fn submit(&mut self, request: TransitionRequest) {
        self.push(request);
    }
}

/// Issues one request per section entry and tracks each target's phase.
#[derive(Clone, Debug)]
pub struct SectionTrigger {
    phases: Vec<TransitionPhase>,
    rotation_delta: Vec3,
    duration_sec: f32,
    easing: Easing,
}

impl SectionTrigger {
    pub fn new(
        target_count: usize,
        rotation_delta: Vec3,
        duration_sec: f32,
        easing: Easing,
    ) -> Self {
        Self {
            phases: vec![TransitionPhase::Idle; target_count.max(1)],
            rotation_delta,
            duration_sec,
            easing,
        }
    }

    /// Build the request for a newly entered section.
    ///
    /// Callers clamp the index first. An out-of-range index panics in debug
    /// builds and is clamped to the last target in release builds.
    pub fn fire(&mut self, index: usize) -> TransitionRequest {
        debug_assert!(
            index < self.phases.len(),
            "section index {index} out of range for {} targets",
            self.phases.len()
        );
        let index = index.min(self.phases.len() - 1);
        let phase = &mut self.phases[index];
        *phase = match *phase {
            TransitionPhase::Idle => TransitionPhase::Transitioning { in_flight: 1 },
            TransitionPhase::Transitioning { in_flight } => TransitionPhase::Transitioning {
                in_flight: in_flight + 1,
            },
        };
        log::debug!("[transition] fire target {} ({:?})", index, *phase);
        TransitionRequest {
            target_index: index,
            rotation_delta: self.rotation_delta,
            duration_sec: self.duration_sec,
            easing: self.easing,
        }
    }

    /// A sink finished one request for `index`. Unknown indices and idle
    /// targets are ignored.
    pub fn complete(&mut self, index: usize) {
        let Some(phase) = self.phases.get_mut(index) else {
            return;
        };
        *phase = match *phase {
            TransitionPhase::Transitioning { in_flight } if in_flight > 1 => {
                TransitionPhase::Transitioning {
                    in_flight: in_flight - 1,
                }
            }
            _ => TransitionPhase::Idle,
        };
    }

    pub fn phase(&self, index: usize) -> TransitionPhase {
        self.phases.get(index).copied().unwrap_or_default()
    }

    pub fn target_count(&self) -> usize {
        self.phases.len()
    }

    pub fn set_duration(&mut self, duration_sec: f32) {
        self.duration_sec = duration_sec;
    }

    pub fn set_rotation_delta(&mut self, rotation_delta: Vec3) {
        self.rotation_delta = rotation_delta;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }
}
