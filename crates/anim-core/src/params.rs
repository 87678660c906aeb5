use glam::Vec3;

use crate::constants::*;
use crate::error::CoreError;
use crate::particles::{ParticleLayout, ParticleMode};
use crate::transition::Easing;

/// Tunable animation parameters.
///
/// - `follow_rate`: camera-group follower rate (1 / time-constant), in `[1, 5]`
/// - `parallax_amount`: world offset per unit of normalized pointer offset
/// - `rotation_speed`: idle spin per second on X and Y (Z stays still)
/// - `transition_*`: what a section entry asks the tween sink to do
/// - `objects_distance` / `section_count`: vertical layout of the sections
/// - `particle_*`: size, volume, RNG seed and starting mode of the field
/// - `animate_particles`: whether the tick rewrites live positions. The
///   section preset keeps its points where they were scattered.
#[derive(Clone, Debug)]
pub struct AnimationParams {
    pub follow_rate: f32,
    pub parallax_amount: f32,
    pub rotation_speed: Vec3,
    pub transition_duration_sec: f32,
    pub transition_rotation: Vec3,
    pub transition_easing: Easing,
    pub objects_distance: f32,
    pub section_count: usize,
    pub particle_count: usize,
    pub particle_layout: ParticleLayout,
    pub particle_seed: u64,
    pub particle_mode: ParticleMode,
    pub animate_particles: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            follow_rate: FOLLOW_RATE,
            parallax_amount: PARALLAX_AMOUNT,
            rotation_speed: Vec3::new(X_ROTATION_SPEED, Y_ROTATION_SPEED, 0.0),
            transition_duration_sec: TRANSITION_DURATION_SEC,
            transition_rotation: SECTION_ROTATION_DELTA,
            transition_easing: Easing::Power2InOut,
            objects_distance: OBJECTS_DISTANCE,
            section_count: SECTION_COUNT,
            particle_count: SECTION_PARTICLE_COUNT,
            particle_layout: ParticleLayout::Sections {
                extent: PARTICLE_EXTENT,
                objects_distance: OBJECTS_DISTANCE,
                sections: SECTION_COUNT,
            },
            particle_seed: PARTICLE_SEED,
            particle_mode: ParticleMode::Wave,
            animate_particles: false,
        }
    }
}

impl AnimationParams {
    /// Dense standalone field: many particles in a cube, no section stack
    /// beyond a single target.
    pub fn particle_field() -> Self {
        Self {
            section_count: 1,
            particle_count: FIELD_PARTICLE_COUNT,
            particle_layout: ParticleLayout::Cube {
                extent: PARTICLE_EXTENT,
            },
            animate_particles: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.section_count == 0 {
            return Err(CoreError::NoSections);
        }
        check_range("follow_rate", self.follow_rate, FOLLOW_RATE_MIN, FOLLOW_RATE_MAX)?;
        check_range(
            "transition_duration_sec",
            self.transition_duration_sec,
            0.0,
            TRANSITION_DURATION_MAX_SEC,
        )?;
        check_range("rotation_speed.x", self.rotation_speed.x, 0.0, ROTATION_SPEED_MAX)?;
        check_range("rotation_speed.y", self.rotation_speed.y, 0.0, ROTATION_SPEED_MAX)?;
        check_range("rotation_speed.z", self.rotation_speed.z, 0.0, ROTATION_SPEED_MAX)?;
        check_finite("parallax_amount", self.parallax_amount)?;
        check_finite("objects_distance", self.objects_distance)?;
        if !self.transition_rotation.is_finite() {
            return Err(CoreError::NonFiniteParam {
                name: "transition_rotation",
            });
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NonFiniteParam { name })
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), CoreError> {
    check_finite(name, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::ParamOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
