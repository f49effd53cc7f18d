//! Owned clock state and its advance step.
//!
//! `ClockState` holds everything the clock remembers between calls. It is
//! independent of any tick source, so it can be driven directly with samples
//! (for tests, or when the caller already holds a timestamp) and several
//! instances never interfere with each other.

use crate::calendar::DateTime;

/// Epoch seconds, set-flag and last tick sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockState {
    seconds: u32,
    is_set: bool,
    last_ticks: u32,
}

impl ClockState {
    /// Create zeroed state: 1970-01-01T00:00:00, not set, last sample 0.
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            is_set: false,
            last_ticks: 0,
        }
    }

    /// Store the epoch seconds of `datetime` and mark the clock as set.
    ///
    /// The last tick sample is left untouched, so ticks elapsed since the
    /// previous advance are still credited on the next one.
    pub fn set(&mut self, datetime: &DateTime) {
        self.set_epoch_seconds(datetime.epoch_seconds());
    }

    /// Store raw epoch seconds and mark the clock as set.
    pub fn set_epoch_seconds(&mut self, seconds: u32) {
        self.seconds = seconds;
        self.is_set = true;
    }

    /// Credit every whole second elapsed between the last sample and `now`.
    ///
    /// Elapsed ticks are computed with wrapping subtraction, so a counter that
    /// wrapped once since the last call is handled. The last sample moves
    /// forward by exactly the ticks credited; the sub-second remainder is
    /// carried into the next call. Returns the updated epoch seconds.
    pub fn advance(&mut self, now: u32, ticks_per_second: u32) -> u32 {
        let elapsed = now.wrapping_sub(self.last_ticks);
        let whole = elapsed / ticks_per_second;

        self.seconds = self.seconds.wrapping_add(whole);
        self.last_ticks = self
            .last_ticks
            .wrapping_add(whole.wrapping_mul(ticks_per_second));

        self.seconds
    }

    /// Discard any partial second and count from `now`.
    pub fn resync(&mut self, now: u32) {
        self.last_ticks = now;
    }

    /// Current epoch seconds, without advancing.
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Whether a time has ever been set.
    pub const fn is_set(&self) -> bool {
        self.is_set
    }

    /// Tick sample at which the last whole second was credited.
    pub const fn last_ticks(&self) -> u32 {
        self.last_ticks
    }
}
