//! Configuration traits and implementations for the tick source rate.
//!
//! The `ClockConfig` trait lets the clock be paired with tick counters of a
//! different rate at compile time, without runtime overhead.

/// Clock configuration trait describing the platform tick counter.
///
/// All values are const (zero runtime cost).
pub trait ClockConfig {
    /// Number of source ticks per second (default: 1000, a millisecond counter)
    const TICKS_PER_SECOND: u32;
}

/// Default configuration for a millisecond tick counter.
///
/// Matches the usual `millis()` style counter found on most platforms:
/// - TICKS_PER_SECOND: 1000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ClockConfig for DefaultConfig {
    const TICKS_PER_SECOND: u32 = 1000;
}

/// Configuration for a 1024 Hz counter.
///
/// Typical of a 32.768 kHz crystal divided by 32:
/// - TICKS_PER_SECOND: 1024
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Binary1024Config;

impl ClockConfig for Binary1024Config {
    const TICKS_PER_SECOND: u32 = 1024;
}
