//! Fixed-timestep accumulator.
//!
//! Frames arrive at whatever rate the front end manages; physics always
//! advances in whole [`FIXED_STEP`] ticks. Leftover time carries over to the
//! next frame.

use super::constants::FIXED_STEP;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds of simulated time not yet consumed by ticks.
    accumulator: f64,
    last_timestamp: Duration,
    /// Longest delta accepted per frame, in seconds.
    max_delta: f64,
}

impl FrameClock {
    pub fn new(now: Duration, max_delta: f64) -> Self {
        Self {
            accumulator: 0.0,
            last_timestamp: now,
            max_delta,
        }
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn last_timestamp(&self) -> Duration {
        self.last_timestamp
    }

    /// Record a new frame timestamp and bank the elapsed time.
    ///
    /// Timestamps earlier than the previous one count as zero elapsed time.
    /// Returns the delta actually added to the accumulator.
    pub fn begin_frame(&mut self, now: Duration) -> f64 {
        let delta = now.saturating_sub(self.last_timestamp).as_secs_f64();
        self.last_timestamp = now;

        let delta = delta.min(self.max_delta);
        self.accumulator += delta;
        delta
    }

    /// Run `tick` once per whole step in the accumulator. Returns the number
    /// of ticks run.
    pub fn drain<F: FnMut()>(&mut self, mut tick: F) -> u32 {
        let mut ticks = 0;
        while self.accumulator >= FIXED_STEP {
            tick();
            self.accumulator -= FIXED_STEP;
            ticks += 1;
        }
        ticks
    }
}
