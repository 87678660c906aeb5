use instant::Instant;

/// Per-frame timing sample in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

/// Monotonic elapsed-time source.
///
/// `tick` reads wall-clock time; `tick_at` accepts an externally supplied
/// elapsed value so hosts with their own time base (and tests) stay
/// deterministic. Both share the same bookkeeping.
#[derive(Clone, Debug)]
pub struct Clock {
    start: Instant,
    last_elapsed: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_elapsed: 0.0,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let elapsed = self.start.elapsed().as_secs_f32();
        self.tick_at(elapsed)
    }

    /// Advance to `elapsed`. Values earlier than the previous sample hold the
    /// clock in place (zero delta) rather than running it backwards.
    pub fn tick_at(&mut self, elapsed: f32) -> FrameTime {
        let elapsed = elapsed.max(self.last_elapsed).max(0.0);
        let delta = (elapsed - self.last_elapsed).max(0.0);
        self.last_elapsed = elapsed;
        FrameTime { elapsed, delta }
    }

    pub fn elapsed(&self) -> f32 {
        self.last_elapsed
    }
}
