//! Fixed-Rate Scheduling
//!
//! Logic and drawing each run on their own fixed cadence, decoupled from
//! the displayed frame rate. Every frame feeds the same wall-clock delta
//! to both accumulators; each fires independently when its interval has
//! elapsed.

/// Accumulates frame time and fires at a fixed interval.
///
/// On firing, the accumulator resets to zero rather than subtracting the
/// interval: the overshoot is discarded, so at most one fire happens per
/// frame and the effective rate runs slightly under nominal when frame
/// times are uneven. That overshoot handling is part of the game's tuned
/// feel and is kept as-is.
#[derive(Debug, Clone, Copy)]
pub struct FixedRate {
    interval: f32,
    accumulated: f32,
}

impl FixedRate {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Feed one frame's delta; true exactly when the interval elapsed and
    /// the accumulator reset.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulated += delta;
        if self.accumulated >= self.interval {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }
}
