//! Shared helpers for native demos

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use soft_rtc::MillisSource;

// =============================================================================
// Tick Source
// =============================================================================

/// Millisecond counter backed by `std::time::Instant`.
///
/// Truncated to `u32`, so it wraps after about 49.7 days like a
/// microcontroller `millis()` counter would.
#[derive(Debug)]
pub struct InstantMillis {
    start: Instant,
}

impl InstantMillis {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantMillis {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisSource for InstantMillis {
    fn millis(&mut self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

// =============================================================================
// Host Time
// =============================================================================

/// Host wall-clock time as seconds since 1970, used to seed the clock.
pub fn host_epoch_seconds() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}
