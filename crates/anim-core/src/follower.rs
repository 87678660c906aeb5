use glam::Vec2;

/// Exponential smoothing toward a moving target, applied per axis.
///
/// Each step moves `current` by `(target - current) * rate * delta`. For
/// `rate * delta <= 1` the result stays between `current` and `target`; larger
/// products overshoot and are left uncorrected.
#[derive(Clone, Debug)]
pub struct DampedFollower {
    current: Vec2,
    rate: f32,
}

impl DampedFollower {
    pub fn new(rate: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            rate,
        }
    }

    pub fn with_current(rate: f32, current: Vec2) -> Self {
        Self { current, rate }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2, delta: f32) -> Vec2 {
        self.current += (target - self.current) * self.rate * delta;
        self.current
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    /// Jump straight to `value`, dropping any remaining lag. The next `step`
    /// starts from here.
    pub fn snap_to(&mut self, value: Vec2) {
        self.current = value;
    }
}
