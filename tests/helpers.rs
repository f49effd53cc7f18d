//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{MockClock, MockMillis, mock_clock, mock_clock_at};

// ============================================================================
// Clock Driving Helpers
// ============================================================================

/// Advance the mock counter by `ms` and read the clock.
pub fn advance_and_read(clock: &mut MockClock, ms: u32) -> u32 {
    clock.source_mut().advance(ms);
    clock.read()
}

/// Read the clock every `step` ms for `steps` steps, asserting that the
/// returned values never decrease. Returns the final reading.
pub fn read_every(clock: &mut MockClock, step: u32, steps: u32) -> u32 {
    let mut last = clock.read();
    for i in 0..steps {
        let now = advance_and_read(clock, step);
        assert!(
            now >= last,
            "Clock went backwards at step {}: {} -> {}",
            i,
            last,
            now
        );
        last = now;
    }
    last
}

// ============================================================================
// Reference Calendar
// ============================================================================

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Independent day-count algorithm used to cross-check the clock's calendar.
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Gregorian month length for a four-digit year.
pub fn month_length(year: i64, month: u32) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
