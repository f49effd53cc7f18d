//! Software real-time clock.
//!
//! `Clock` binds a [`ClockState`] to a [`MillisSource`]. Setting it stores the
//! calendar time as seconds since 1970; reading it credits the whole seconds
//! elapsed on the tick counter since the previous read and returns the result.
//!
//! The clock has to be read at least once per tick-counter wrap period
//! (about 49.7 days for a `u32` millisecond counter) to stay correct.

use core::marker::PhantomData;

use crate::calendar::{self, DateTime};
use crate::config::{ClockConfig, DefaultConfig};
use crate::error::ClockError;
use crate::source::MillisSource;
use crate::state::ClockState;

/// Software real-time clock driven by a platform tick counter.
///
/// Generic over:
/// - `S`: Tick source (e.g. [`AtomicMillis`](crate::source::AtomicMillis) or
///   a closure wrapped in [`FnMillis`](crate::source::FnMillis))
/// - `C`: Tick rate configuration (default [`DefaultConfig`], 1000 ticks/s)
#[derive(Debug)]
pub struct Clock<S: MillisSource, C: ClockConfig = DefaultConfig> {
    source: S,
    state: ClockState,
    _config: PhantomData<C>,
}

impl<S: MillisSource, C: ClockConfig> Clock<S, C> {
    /// Create a clock at 1970-01-01T00:00:00, not yet set.
    ///
    /// The last tick sample starts at zero, so the first read credits all
    /// time elapsed since the counter started.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            state: ClockState::new(),
            _config: PhantomData,
        }
    }

    /// Set the time from a calendar date. `year` is years since 1970.
    ///
    /// No validation is performed; out-of-range fields give an out-of-range
    /// but deterministic time. The last tick sample is not reset.
    pub fn set(&mut self, year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) {
        self.set_epoch_seconds(calendar::epoch_seconds(
            year, month, day, hour, minute, second,
        ));
    }

    /// Set the time from a [`DateTime`].
    pub fn set_datetime(&mut self, datetime: &DateTime) {
        self.set_epoch_seconds(datetime.epoch_seconds());
    }

    /// Set the time directly as seconds since 1970.
    pub fn set_epoch_seconds(&mut self, seconds: u32) {
        self.state.set_epoch_seconds(seconds);

        #[cfg(feature = "defmt")]
        defmt::debug!("clock set to {=u32}", seconds);
    }

    /// Current time in seconds since 1970.
    ///
    /// Samples the tick source once and credits every whole second elapsed
    /// since the last read. Leftover ticks are kept for the next read.
    pub fn read(&mut self) -> u32 {
        let ticks_per_second = const {
            assert!(C::TICKS_PER_SECOND > 0, "TICKS_PER_SECOND must be non-zero");
            C::TICKS_PER_SECOND
        };
        let now = self.source.millis();
        self.state.advance(now, ticks_per_second)
    }

    /// Like [`read`](Self::read), but fails with [`ClockError::NotSet`] if
    /// the time was never set.
    ///
    /// The clock still advances when it has not been set.
    pub fn try_read(&mut self) -> Result<u32, ClockError> {
        let seconds = self.read();
        if self.state.is_set() {
            Ok(seconds)
        } else {
            Err(ClockError::NotSet)
        }
    }

    /// Start counting from the current tick sample, dropping any partial
    /// second accumulated so far.
    ///
    /// Call right after [`set`](Self::set) when the new time should begin a
    /// fresh second instead of inheriting ticks from before the set.
    pub fn resync(&mut self) {
        let now = self.source.millis();
        self.state.resync(now);

        #[cfg(feature = "defmt")]
        defmt::trace!("clock resynced at tick {=u32}", now);
    }

    /// Whether a time has ever been set.
    pub fn is_set(&self) -> bool {
        self.state.is_set()
    }

    /// Clock state as of the last operation.
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Get immutable reference to the tick source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get mutable reference to the tick source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the clock and return its tick source.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::SECS_PER_DAY;
    use crate::config::Binary1024Config;

    /// Tick source the test moves by hand.
    #[derive(Debug, Default)]
    struct ManualMillis(u32);

    impl ManualMillis {
        fn advance(&mut self, ms: u32) {
            self.0 = self.0.wrapping_add(ms);
        }
    }

    impl MillisSource for ManualMillis {
        fn millis(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_read_before_set() {
        let mut clock: Clock<_> = Clock::new(ManualMillis(0));
        assert!(!clock.is_set());
        assert_eq!(clock.read(), 0);

        clock.source_mut().advance(2500);
        assert_eq!(clock.read(), 2);
        assert_eq!(clock.try_read(), Err(ClockError::NotSet));
    }

    #[test]
    fn test_set_then_read() {
        let mut clock: Clock<_> = Clock::new(ManualMillis(0));
        clock.set(0, 1, 1, 0, 0, 0);
        assert!(clock.is_set());
        assert_eq!(clock.read(), 0);
        assert_eq!(clock.try_read(), Ok(0));

        clock.set(2, 3, 1, 0, 0, 0);
        assert_eq!(clock.read(), 2 * 365 * SECS_PER_DAY + (31 + 29) * SECS_PER_DAY);
    }

    #[test]
    fn test_set_does_not_reset_sample() {
        let mut clock: Clock<_> = Clock::new(ManualMillis(0));
        clock.source_mut().advance(3000);
        clock.set_epoch_seconds(100);

        // Ticks from before the set are credited on the next read
        assert_eq!(clock.read(), 103);
    }

    #[test]
    fn test_resync_after_set() {
        let mut clock: Clock<_> = Clock::new(ManualMillis(0));
        clock.source_mut().advance(3400);
        clock.set_epoch_seconds(100);
        clock.resync();
        assert_eq!(clock.read(), 100);

        clock.source_mut().advance(999);
        assert_eq!(clock.read(), 100);
        clock.source_mut().advance(1);
        assert_eq!(clock.read(), 101);
    }

    #[test]
    fn test_set_datetime() {
        let mut clock: Clock<_> = Clock::new(ManualMillis(0));
        let dt = DateTime::from_calendar(2000, 1, 1, 0, 0, 0).unwrap();
        clock.set_datetime(&dt);
        assert_eq!(clock.read(), calendar::SECS_YR_2000);
    }

    #[test]
    fn test_custom_tick_rate() {
        let mut clock: Clock<_, Binary1024Config> = Clock::new(ManualMillis(0));
        clock.set_epoch_seconds(10);
        clock.source_mut().advance(1000);
        assert_eq!(clock.read(), 10);
        clock.source_mut().advance(24);
        assert_eq!(clock.read(), 11);
    }

    #[test]
    fn test_into_source() {
        let mut clock: Clock<_> = Clock::new(ManualMillis(0));
        clock.source_mut().advance(5);
        assert_eq!(clock.source().0, 5);
        assert_eq!(clock.into_source().0, 5);
    }
}
