use crate::constants::LINE_HEIGHT_PX;

/// Page scroll position emulated from wheel input.
///
/// A native window has no document to scroll, so the host keeps the offset
/// itself: one viewport height per section, clamped to the stack.
#[derive(Default, Clone, Copy, Debug)]
pub struct PageScroll {
    pub offset: f32,
}

impl PageScroll {
    /// Apply a wheel movement in pixels (positive = content moves down, i.e.
    /// the user scrolls up) and return the new offset.
    pub fn apply_wheel(&mut self, delta_y_px: f32, page_height: f32, sections: usize) -> f32 {
        let max = page_height.max(0.0) * sections.saturating_sub(1) as f32;
        self.offset = (self.offset - delta_y_px).clamp(0.0, max);
        self.offset
    }

    /// Re-clamp after the page height changed.
    pub fn refit(&mut self, page_height: f32, sections: usize) -> f32 {
        self.apply_wheel(0.0, page_height, sections)
    }
}

#[inline]
pub fn line_delta_px(lines: f32) -> f32 {
    lines * LINE_HEIGHT_PX
}
