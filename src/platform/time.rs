//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps until the next frame boundary
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / hz.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
            frames: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Frames waited for so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Block until the next frame is due
    ///
    /// A late frame resynchronises instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
        self.frames += 1;
    }
}
