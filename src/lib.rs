//! # soft-rtc
//!
//! Software real-time clock for microcontrollers without an RTC peripheral.
//!
//! **Key features:**
//! - **Calendar to epoch** - Converts a civil date/time to seconds since 1970
//! - **Drift-free** - Sub-second ticks carry over between reads, never dropped
//! - **Wrap-safe** - Handles the platform tick counter wrapping past `u32::MAX`
//! - **Owned state** - No globals; independent clocks never interfere
//! - **Platform-agnostic** - Any free-running millisecond counter can drive it
//!
//! ```
//! use soft_rtc::{Clock, FnMillis};
//!
//! let mut ms = 0u32;
//! let mut clock: Clock<_> = Clock::new(FnMillis(move || {
//!     ms += 1500;
//!     ms
//! }));
//!
//! // 2024-01-01T00:00:00, year given as an offset from 1970
//! clock.set(54, 1, 1, 0, 0, 0);
//! assert_eq!(clock.read(), 1_704_067_200 + 1);
//! ```
//!
//! ## Optional Features
//!
//! - `atomic` (default) - `AtomicMillis`, an interrupt-safe tick counter
//! - `defmt` - `defmt::Format` on public types and debug logging
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

#[cfg(feature = "atomic")]
extern crate portable_atomic;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod source;
pub mod state;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Calendar
pub use calendar::{DateTime, epoch_seconds, is_leap_year};

// Clock
pub use clock::Clock;
pub use state::ClockState;

// Tick sources
pub use source::{FnMillis, MillisSource};

#[cfg(feature = "atomic")]
pub use source::AtomicMillis;

// Configuration
pub use config::{ClockConfig, DefaultConfig};

// Error types
pub use error::ClockError;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
