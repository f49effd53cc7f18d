//! Calendar arithmetic: civil date/time to seconds since 1970-01-01T00:00:00.
//!
//! Years are passed as an offset from 1970 (`0` is 1970, `30` is 2000) so that
//! a full date fits in six bytes. All arithmetic is wrapping `u32`, which makes
//! the computation total over every input: out-of-range fields give an
//! out-of-range but deterministic result, and the counter wraps in 2106.

use core::fmt::{self, Write};

use crate::error::ClockError;

/// Seconds per minute
pub const SECS_PER_MIN: u32 = 60;

/// Seconds per hour
pub const SECS_PER_HOUR: u32 = 3600;

/// Seconds per day
pub const SECS_PER_DAY: u32 = SECS_PER_HOUR * 24;

/// Days per week
pub const DAYS_PER_WEEK: u32 = 7;

/// Seconds per week
pub const SECS_PER_WEEK: u32 = SECS_PER_DAY * DAYS_PER_WEEK;

/// Epoch seconds at 2000-01-01T00:00:00
pub const SECS_YR_2000: u32 = 946_684_800;

/// Year that offset `0` refers to.
pub const EPOCH_YEAR: u16 = 1970;

/// Last four-digit year representable as a `u8` offset.
pub const MAX_YEAR: u16 = EPOCH_YEAR + u8::MAX as u16;

/// Days in each month of a non-leap year, January first.
pub const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year test for a year given as an offset from 1970.
pub const fn is_leap_year(year: u8) -> bool {
    let y = EPOCH_YEAR as u32 + year as u32;
    y > 0 && y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Number of leap years in `0..year` (1970 up to, not including, the given year).
pub fn leap_days_before(year: u8) -> u32 {
    (0..year).filter(|&y| is_leap_year(y)).count() as u32
}

/// Length of `month` (1-12) in the given year, or `None` for an invalid month.
pub const fn days_in_month(year: u8, month: u8) -> Option<u8> {
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(MONTH_DAYS[(month - 1) as usize]),
        _ => None,
    }
}

/// Seconds since 1970-01-01T00:00:00 for the given calendar date and time.
///
/// No validation is performed. Months past December keep cycling through
/// the month table, and `day == 0` steps back one day.
pub fn epoch_seconds(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> u32 {
    // 1 Jan 00:00:00 of the given year
    let mut seconds = u32::from(year).wrapping_mul(SECS_PER_DAY * 365);
    seconds = seconds.wrapping_add(leap_days_before(year).wrapping_mul(SECS_PER_DAY));

    // Whole months of this year, months start from 1
    let leap = is_leap_year(year);
    for m in 1..month {
        let days = if m == 2 && leap {
            29
        } else {
            MONTH_DAYS[usize::from(m - 1) % MONTH_DAYS.len()]
        };
        seconds = seconds.wrapping_add(u32::from(days) * SECS_PER_DAY);
    }

    seconds = seconds.wrapping_add(u32::from(day).wrapping_sub(1).wrapping_mul(SECS_PER_DAY));
    seconds = seconds.wrapping_add(u32::from(hour) * SECS_PER_HOUR);
    seconds = seconds.wrapping_add(u32::from(minute) * SECS_PER_MIN);
    seconds.wrapping_add(u32::from(second))
}

/// Calendar date and time with the year stored as an offset from 1970.
///
/// Fields are public and unchecked. Use [`DateTime::from_calendar`] to build
/// a validated value from a four-digit year.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Years since 1970
    pub year: u8,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, starting at 1
    pub day: u8,
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl DateTime {
    /// 1970-01-01T00:00:00
    pub const EPOCH: DateTime = DateTime::new(0, 1, 1, 0, 0, 0);

    /// Create a date/time without validation. `year` is years since 1970.
    pub const fn new(year: u8, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Create a validated date/time from a four-digit year.
    ///
    /// Returns an error for the first field found out of range, checked in
    /// year, month, day, hour, minute, second order.
    pub fn from_calendar(
        full_year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ClockError> {
        if !(EPOCH_YEAR..=MAX_YEAR).contains(&full_year) {
            return Err(ClockError::YearOutOfRange(full_year));
        }
        let year = (full_year - EPOCH_YEAR) as u8;

        let max = days_in_month(year, month).ok_or(ClockError::MonthOutOfRange(month))?;
        if day == 0 || day > max {
            return Err(ClockError::DayOutOfRange { day, max });
        }
        if hour > 23 {
            return Err(ClockError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ClockError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(ClockError::SecondOutOfRange(second));
        }

        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Four-digit year.
    pub const fn full_year(&self) -> u16 {
        EPOCH_YEAR + self.year as u16
    }

    /// Whether this date falls in a leap year.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Seconds since 1970-01-01T00:00:00.
    pub fn epoch_seconds(&self) -> u32 {
        epoch_seconds(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS` into a fixed-capacity string.
    ///
    /// Capacity covers every field value, including unchecked three-digit ones.
    pub fn to_iso8601(&self) -> heapless::String<24> {
        let mut out = heapless::String::new();
        // Cannot overflow: 4 + 5 * 4 digits-and-separator groups fit in 24
        let _ = write!(out, "{}", self);
        out
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.full_year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}
