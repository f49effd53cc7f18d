//! Millisecond tick source abstraction.
//!
//! The `MillisSource` trait is the one thing the clock needs from the
//! platform: a free-running counter of milliseconds since start-up. It can be
//! implemented over a hardware timer, an `embassy_time::Instant`, `std`, or
//! the interrupt-fed [`AtomicMillis`] counter provided here.

/// Platform tick counter.
///
/// Implementations return ticks (milliseconds with the default config) since
/// device start. The value increases monotonically and wraps to zero after
/// `u32::MAX`; the clock handles that wrap itself.
///
/// If the counter is updated from an interrupt and is wider than the
/// hardware's atomic access width, the implementation must read it atomically
/// (for example inside a critical section) so a torn value is never returned.
pub trait MillisSource {
    /// Sample the current tick count.
    fn millis(&mut self) -> u32;
}

impl<S: MillisSource + ?Sized> MillisSource for &mut S {
    fn millis(&mut self) -> u32 {
        (**self).millis()
    }
}

/// Adapter turning a closure into a [`MillisSource`].
///
/// ```
/// use soft_rtc::source::{FnMillis, MillisSource};
///
/// let mut ms = 0u32;
/// let mut source = FnMillis(move || {
///     ms += 250;
///     ms
/// });
/// assert_eq!(source.millis(), 250);
/// assert_eq!(source.millis(), 500);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnMillis<F>(pub F);

impl<F: FnMut() -> u32> MillisSource for FnMillis<F> {
    fn millis(&mut self) -> u32 {
        (self.0)()
    }
}

#[cfg(feature = "atomic")]
pub use self::atomic::AtomicMillis;

#[cfg(feature = "atomic")]
mod atomic {
    use portable_atomic::{AtomicU32, Ordering};

    use super::MillisSource;

    /// Millisecond counter advanced from a timer interrupt.
    ///
    /// Place it in a `static`, call [`tick`](Self::tick) from a 1 kHz timer
    /// handler, and hand `&COUNTER` to the clock. Reads and updates are
    /// atomic, so the main context never observes a torn value.
    ///
    /// On cores without native atomic read-modify-write (e.g. Cortex-M0),
    /// enable `portable-atomic`'s `critical-section` feature in the final
    /// binary.
    #[derive(Debug, Default)]
    pub struct AtomicMillis {
        ticks: AtomicU32,
    }

    impl AtomicMillis {
        /// Create a counter starting at zero.
        pub const fn new() -> Self {
            Self {
                ticks: AtomicU32::new(0),
            }
        }

        /// Advance by one tick.
        pub fn tick(&self) {
            self.advance(1);
        }

        /// Advance by `ticks`, wrapping at `u32::MAX`.
        pub fn advance(&self, ticks: u32) {
            self.ticks.fetch_add(ticks, Ordering::Relaxed);
        }

        /// Current tick count.
        pub fn get(&self) -> u32 {
            self.ticks.load(Ordering::Relaxed)
        }
    }

    impl MillisSource for &AtomicMillis {
        fn millis(&mut self) -> u32 {
            self.get()
        }
    }

}
