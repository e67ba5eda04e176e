//! Countdown-gated boolean flags.
//!
//! Every actor carries a few of these: the invincibility window after
//! taking a hit, the attack-active window, and the hit-flash timer.
//! Each instance is independent and is ticked once per simulation step.

/// A boolean that is forced false after a fixed countdown from when it
/// was last set true.
///
/// Invariant: `remaining > 0` implies `active`. The transition back to
/// inactive is edge-triggered: [`TimedFlag::tick`] returns `true` on
/// exactly the tick where the countdown expires, so callers can run
/// their "on end" reaction once.
#[derive(Debug, Clone)]
pub struct TimedFlag {
    duration: f32,
    remaining: f32,
    active: bool,
}

impl TimedFlag {
    /// Create an inactive flag with the given default window in seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
            active: false,
        }
    }

    /// Raise the flag for its default window. Re-triggering while
    /// already active just restarts the countdown.
    pub fn trigger(&mut self) {
        self.trigger_for(self.duration);
    }

    /// Raise the flag for an explicit window instead of the default.
    pub fn trigger_for(&mut self, secs: f32) {
        self.active = true;
        self.remaining = secs;
    }

    /// Count down by `dt` seconds. Returns `true` exactly once, on the
    /// tick where the window expires; overshoot is clamped to zero
    /// rather than left negative.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left on the current window (0 when inactive).
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
