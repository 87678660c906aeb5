use anim_core::{AnimationTarget, Easing, Finished, TransitionRequest, TransitionSink};

/// Evaluate a named easing curve at `t` in [0, 1].
///
/// Follows the usual power-curve naming: `power2` is a cubic.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::Power2In => t * t * t,
        Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
        Easing::Power2InOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

#[derive(Clone, Debug)]
struct ActiveTween {
    request: TransitionRequest,
    elapsed: f32,
    applied: f32, // eased progress already added to the target
}

/// Additive rotation tweens.
///
/// Each frame adds only the *change* in eased progress, so a tween never
/// overwrites rotation written by anyone else and overlapping tweens on one
/// target simply sum.
#[derive(Default, Debug)]
pub struct Tweener {
    active: Vec<ActiveTween>,
}

impl Tweener {
    pub fn new() -> Self {
        Self {
            active: Vec::with_capacity(8),
        }
    }
}

impl TransitionSink for Tweener {
    fn submit(&mut self, request: TransitionRequest) {
        log::debug!(
            "[tween] start target {} over {:.2}s ({})",
            request.target_index,
            request.duration_sec,
            request.easing.name()
        );
        self.active.push(ActiveTween {
            request,
            elapsed: 0.0,
            applied: 0.0,
        });
    }

    fn advance(&mut self, delta: f32, targets: &mut [AnimationTarget], finished: &mut Finished) {
        self.active.retain_mut(|tw| {
            tw.elapsed += delta;
            let t = if tw.request.duration_sec > 0.0 {
                (tw.elapsed / tw.request.duration_sec).min(1.0)
            } else {
                1.0
            };
            let eased = ease(tw.request.easing, t);
            let step = eased - tw.applied;
            tw.applied = eased;
            if let Some(target) = targets.get_mut(tw.request.target_index) {
                target.rotation += tw.request.rotation_delta * step;
            }
            if t >= 1.0 {
                finished.push(tw.request.target_index);
                false
            } else {
                true
            }
        });
    }
}
