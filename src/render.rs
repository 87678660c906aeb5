use anim_core::{FrameView, RenderSink};

/// Render sink that reports a frame summary through `log` at a fixed cadence
/// instead of drawing.
pub struct LogRenderer {
    interval_sec: f32,
    window_start: f32,
    frames_in_window: u32,
    pub reports: u64,
}

impl LogRenderer {
    pub fn new(interval_sec: f32) -> Self {
        Self {
            interval_sec: interval_sec.max(0.0),
            window_start: 0.0,
            frames_in_window: 0,
            reports: 0,
        }
    }
}

impl RenderSink for LogRenderer {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.frames_in_window += 1;
        let span = frame.time.elapsed - self.window_start;
        if span < self.interval_sec || span <= 0.0 {
            return;
        }
        let fps = self.frames_in_window as f32 / span;
        let eye = frame.camera.eye();
        let first = frame.particles.positions().first().copied().unwrap_or_default();
        log::info!(
            "[frame {}] fps={:.1} section={} eye=({:.2},{:.2},{:.2}) mode={:?} p0=({:.2},{:.2},{:.2})",
            frame.frame_index,
            fps,
            frame.section_index,
            eye.x,
            eye.y,
            eye.z,
            frame.particle_mode,
            first.x,
            first.y,
            first.z
        );
        for (i, t) in frame.targets.iter().enumerate() {
            log::debug!(
                "[frame {}] target {} rot=({:.2},{:.2},{:.2})",
                frame.frame_index,
                i,
                t.rotation.x,
                t.rotation.y,
                t.rotation.z
            );
        }
        self.window_start = frame.time.elapsed;
        self.frames_in_window = 0;
        self.reports += 1;
    }
}
