//! Frame timing.

use std::time::Instant;

/// Measures the time between consecutive idle iterations of the loop.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_frame: Instant,
    this_frame: Instant,
    delta: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            this_frame: start,
            delta: 0.0,
        }
    }

    /// Samples the clock and returns seconds since the previous sample.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.this_frame = now;
        self.delta = self
            .this_frame
            .saturating_duration_since(self.last_frame)
            .as_secs_f32();
        self.last_frame = self.this_frame;
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn last_frame(&self) -> Instant {
        self.last_frame
    }
}
