use crate::constants::FOLLOW_RATE_STEP;
use anim_core::{FrameDriver, ParticleMode, FOLLOW_RATE_MAX, FOLLOW_RATE_MIN};

/// Host-level reaction to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostAction {
    ToggleParticleMode,
    FollowRateUp,
    FollowRateDown,
    Exit,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<HostAction> {
    match key {
        "z" | "Z" => Some(HostAction::ToggleParticleMode),
        "ArrowUp" | "+" | "=" => Some(HostAction::FollowRateUp),
        "ArrowDown" | "-" | "_" => Some(HostAction::FollowRateDown),
        "Escape" => Some(HostAction::Exit),
        _ => None,
    }
}

#[inline]
pub fn nudge_follow_rate(rate: f32, action: HostAction) -> f32 {
    match action {
        HostAction::FollowRateUp => (rate + FOLLOW_RATE_STEP).min(FOLLOW_RATE_MAX),
        HostAction::FollowRateDown => (rate - FOLLOW_RATE_STEP).max(FOLLOW_RATE_MIN),
        _ => rate,
    }
}

/// Apply `action` to the driver. Returns false when the host should exit.
pub fn apply_action(action: HostAction, driver: &mut FrameDriver) -> bool {
    match action {
        HostAction::ToggleParticleMode => {
            let mode = driver.toggle_particle_mode();
            log::info!(
                "[key] particle mode: {}",
                match mode {
                    ParticleMode::Wave => "wave",
                    ParticleMode::Radial => "radial",
                }
            );
        }
        HostAction::FollowRateUp | HostAction::FollowRateDown => {
            let rate = nudge_follow_rate(driver.params().follow_rate, action);
            driver.set_follow_rate(rate);
            log::info!("[key] follow rate {:.2}", rate);
        }
        HostAction::Exit => return false,
    }
    true
}
