//! Frame and physics-step timing
//!
//! The host drives two cadences: a fixed-rate physics step and a
//! variable-rate render frame. Both hand components a [`FrameTime`].

/// Snapshot of the clock for one callback
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Monotonic seconds since start
    pub now: f32,
    /// Seconds since the previous callback of the same cadence
    pub delta: f32,
}

impl FrameTime {
    #[inline]
    pub const fn new(now: f32, delta: f32) -> Self {
        Self { now, delta }
    }

    /// Seconds elapsed since `since`
    #[inline]
    pub fn since(&self, since: f32) -> f32 {
        self.now - since
    }
}

/// Fixed-step clock for the physics cadence
#[derive(Clone, Debug)]
pub struct FixedClock {
    step: f32,
    ticks: u64,
}

impl FixedClock {
    pub const DEFAULT_STEP: f32 = 1.0 / 50.0;

    pub fn new(step: f32) -> Self {
        assert!(step > 0.0, "fixed step must be positive, got {step}");
        Self { step, ticks: 0 }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current time without advancing
    #[inline]
    pub fn now(&self) -> FrameTime {
        FrameTime::new(self.ticks as f32 * self.step, self.step)
    }

    /// Advance one step and return the new time
    pub fn tick(&mut self) -> FrameTime {
        self.ticks += 1;
        self.now()
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let mut clock = FixedClock::new(0.5);
        assert_eq!(clock.now().now, 0.0);
        let t = clock.tick();
        assert_eq!(t.now, 0.5);
        assert_eq!(t.delta, 0.5);
        clock.tick();
        assert_eq!(clock.ticks(), 2);
        assert_eq!(clock.now().since(0.25), 0.75);
    }

    #[test]
    #[should_panic]
    fn test_zero_step_panics() {
        FixedClock::new(0.0);
    }
}
