//! Frame clock: elapsed wall time between frames.

use std::time::Instant;

/// Reports the seconds elapsed since the previous call.
///
/// Backed by [`Instant`], so the value is monotonic and never negative.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since `start` on the first call).
    pub fn elapsed_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}
