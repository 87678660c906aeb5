//! Scene-side state the core mutates but does not own conceptually.
//!
//! These types avoid referencing any renderer; a host copies them into its own
//! scene graph (or GPU buffers) once per frame.

use glam::{Vec2, Vec3};

use crate::constants::{CAMERA_Z, SECTION_X_OFFSET};

/// A section element. The core only ever writes `rotation`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationTarget {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Camera group transform.
///
/// `group_offset` is the damped parallax offset of the group; `camera_y` is
/// the scroll-driven height of the camera inside the group.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub group_offset: Vec2,
    pub camera_y: f32,
    pub camera_z: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            group_offset: Vec2::ZERO,
            camera_y: 0.0,
            camera_z: CAMERA_Z,
        }
    }
}

impl CameraRig {
    /// World-space eye position (group offset plus local camera height).
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.group_offset.x,
            self.group_offset.y + self.camera_y,
            self.camera_z,
        )
    }
}

/// Stack `count` targets downward `objects_distance` apart, alternating sides.
pub fn section_targets(count: usize, objects_distance: f32) -> Vec<AnimationTarget> {
    (0..count)
        .map(|i| {
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            AnimationTarget {
                position: Vec3::new(
                    SECTION_X_OFFSET * side,
                    -objects_distance * i as f32,
                    0.0,
                ),
                rotation: Vec3::ZERO,
            }
        })
        .collect()
}
