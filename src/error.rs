//! Error types for clock operations.
//!
//! `set` and `read` never fail. `ClockError` is only produced by the
//! validating `DateTime::from_calendar` constructor and by `Clock::try_read`.

use core::fmt;

/// Clock error type.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// Clock was read before any time was set
    NotSet,

    /// Four-digit year is outside what a `u8` offset from 1970 can hold
    YearOutOfRange(u16),

    /// Month is not in 1..=12
    MonthOutOfRange(u8),

    /// Day is zero or past the end of the month
    DayOutOfRange {
        /// Day that was given
        day: u8,
        /// Last valid day of that month
        max: u8,
    },

    /// Hour is greater than 23
    HourOutOfRange(u8),

    /// Minute is greater than 59
    MinuteOutOfRange(u8),

    /// Second is greater than 59
    SecondOutOfRange(u8),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::NotSet => write!(f, "Time not set"),
            ClockError::YearOutOfRange(year) => write!(f, "Year {} out of range", year),
            ClockError::MonthOutOfRange(month) => write!(f, "Month {} out of range", month),
            ClockError::DayOutOfRange { day, max } => {
                write!(f, "Day {} out of range (1-{})", day, max)
            }
            ClockError::HourOutOfRange(hour) => write!(f, "Hour {} out of range", hour),
            ClockError::MinuteOutOfRange(minute) => write!(f, "Minute {} out of range", minute),
            ClockError::SecondOutOfRange(second) => write!(f, "Second {} out of range", second),
        }
    }
}

impl core::error::Error for ClockError {}
