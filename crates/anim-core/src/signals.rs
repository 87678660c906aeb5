//! Input-side state written by host event handlers and read once per frame.
//!
//! Each signal has exactly one writer (its event handler) and one reader (the
//! frame tick), so plain last-write-wins fields are enough.

use glam::Vec2;

use crate::error::CoreError;

/// Viewport size in CSS / logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, CoreError> {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            Ok(Self { width, height })
        } else {
            Err(CoreError::InvalidViewport { width, height })
        }
    }
}

/// Normalized cursor offset from the viewport center, roughly in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Parallax target in camera space: screen Y grows downward, world Y up.
    #[inline]
    pub fn parallax_target(&self, amount: f32) -> Vec2 {
        Vec2::new(self.x, -self.y) * amount
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointerSignal {
    state: PointerState,
}

impl PointerSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. A degenerate viewport (minimized window) leaves
    /// the previous state in place.
    pub fn on_move(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.state = PointerState {
            x: client_x / width - 0.5,
            y: client_y / height - 0.5,
        };
    }

    #[inline]
    pub fn read(&self) -> PointerState {
        self.state
    }
}

/// Raw scroll offset plus the section it rounds to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub raw_offset: f32,
    pub section_index: usize,
}

/// Outcome of a scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollChange {
    pub changed: bool,
    pub index: usize,
}

/// Tracks the scroll offset and derives the current section.
///
/// The section index is clamped into `[0, section_count - 1]`, so overscroll
/// (negative offsets, elastic bounce past the last page) never produces an
/// index without a target behind it.
#[derive(Clone, Debug)]
pub struct ScrollSignal {
    state: ScrollState,
    section_count: usize,
}

impl ScrollSignal {
    pub fn new(section_count: usize) -> Self {
        Self {
            state: ScrollState::default(),
            section_count: section_count.max(1),
        }
    }

    pub fn on_scroll(&mut self, raw_offset: f32, viewport_height: f32) -> ScrollChange {
        let previous = self.state.section_index;
        if viewport_height <= 0.0 || !raw_offset.is_finite() {
            return ScrollChange {
                changed: false,
                index: previous,
            };
        }
        let index = section_for_offset(raw_offset, viewport_height, self.section_count);
        self.state = ScrollState {
            raw_offset,
            section_index: index,
        };
        ScrollChange {
            changed: index != previous,
            index,
        }
    }

    #[inline]
    pub fn read(&self) -> ScrollState {
        self.state
    }

    /// Continuous camera height for the current offset: one viewport of
    /// scroll moves the camera down by one section spacing.
    pub fn camera_y(&self, viewport_height: f32, objects_distance: f32) -> f32 {
        if viewport_height <= 0.0 {
            return 0.0;
        }
        -(self.state.raw_offset / viewport_height) * objects_distance
    }
}

/// `round(offset / height)` clamped to a valid section index.
#[inline]
pub fn section_for_offset(raw_offset: f32, viewport_height: f32, section_count: usize) -> usize {
    let rounded = (raw_offset / viewport_height).round();
    let last = section_count.saturating_sub(1);
    if rounded <= 0.0 {
        0
    } else {
        (rounded as usize).min(last)
    }
}
