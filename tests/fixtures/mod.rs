//! Test fixtures for soft-rtc testing.
//!
//! Provides:
//! - `MockMillis`: Hand-driven implementation of the MillisSource trait
//! - `MockClock`: Clock over `MockMillis` with the default config

#![allow(dead_code)]

use soft_rtc::{Clock, MillisSource};

// ============================================================================
// MockMillis - Test Tick Source
// ============================================================================

/// Mock tick source for testing.
///
/// The test moves the counter explicitly; every sample taken by the clock is
/// counted so tests can check how often the source was read.
#[derive(Debug, Default)]
pub struct MockMillis {
    /// Current counter value
    now: u32,

    /// Number of times the clock sampled the counter
    samples: usize,
}

impl MockMillis {
    /// Create a counter at the given tick.
    pub fn new(now: u32) -> Self {
        Self { now, samples: 0 }
    }

    /// Move the counter forward, wrapping at `u32::MAX`.
    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    /// Current counter value, without counting as a sample.
    pub fn now(&self) -> u32 {
        self.now
    }

    /// Number of samples taken so far.
    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl MillisSource for MockMillis {
    fn millis(&mut self) -> u32 {
        self.samples += 1;
        self.now
    }
}

// ============================================================================
// Clock Creation
// ============================================================================

/// Clock driven by `MockMillis` at 1000 ticks per second.
pub type MockClock = Clock<MockMillis>;

/// Create a clock whose counter starts at zero.
pub fn mock_clock() -> MockClock {
    Clock::new(MockMillis::new(0))
}

/// Create a clock whose counter starts at `start`, counting from that tick.
pub fn mock_clock_at(start: u32) -> MockClock {
    let mut clock = Clock::new(MockMillis::new(start));
    clock.resync();
    clock
}
