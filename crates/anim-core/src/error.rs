use thiserror::Error;

/// Construction-time failures of the animation core.
///
/// Nothing on the per-frame path returns these; they surface while a host is
/// assembling a [`crate::FrameDriver`] or a [`crate::ParticleField`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("particle buffers differ in length: {seeds} seed positions vs {live} live positions")]
    BufferLengthMismatch { seeds: usize, live: usize },

    #[error("at least one section target is required")]
    NoSections,

    #[error("parameter `{name}` = {value} is outside [{min}, {max}]")]
    ParamOutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("parameter `{name}` must be finite")]
    NonFiniteParam { name: &'static str },

    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
