use glam::Vec3;

// Shared animation tuning constants used by the core and the native host.

// Scene layout
pub const OBJECTS_DISTANCE: f32 = 4.0; // vertical world-space gap between section targets
pub const SECTION_COUNT: usize = 3;
pub const SECTION_X_OFFSET: f32 = 2.0; // targets alternate +x / -x by this amount
pub const CAMERA_Z: f32 = 6.0;

// Parallax smoothing
pub const FOLLOW_RATE: f32 = 2.0; // 1 / time-constant of the camera-group follower
pub const FOLLOW_RATE_MIN: f32 = 1.0;
pub const FOLLOW_RATE_MAX: f32 = 5.0;
pub const PARALLAX_AMOUNT: f32 = 1.0; // world units per unit of normalized pointer offset

// Idle spin (radians per second)
pub const X_ROTATION_SPEED: f32 = 0.1;
pub const Y_ROTATION_SPEED: f32 = 0.12;
pub const ROTATION_SPEED_MAX: f32 = 1.0;

// Section transitions
pub const TRANSITION_DURATION_SEC: f32 = 1.5;
pub const TRANSITION_DURATION_MAX_SEC: f32 = 5.0;
pub const SECTION_ROTATION_DELTA: Vec3 = Vec3::new(6.0, 3.0, 1.5); // relative spin added on entry

// Particles
pub const FIELD_PARTICLE_COUNT: usize = 20_000; // standalone procedural field
pub const SECTION_PARTICLE_COUNT: usize = 200; // sparse dust around the section stack
pub const PARTICLE_EXTENT: f32 = 10.0; // edge length of the scatter volume
pub const PARTICLE_SEED: u64 = 42;
pub const RADIAL_PHASE_SCALE: f32 = 5.0;
pub const RADIAL_AMPLITUDE: f32 = 2.0;
