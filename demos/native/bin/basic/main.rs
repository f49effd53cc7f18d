//! Native demo of a soft-rtc clock driven by `std::time::Instant`
//!
//! Sets the clock from a fixed calendar date, then polls it at an irregular
//! cadence and prints the time alongside the host clock.
//!
//! To run:
//! ```bash
//! cargo run --bin basic
//! ```

use native_demos::{InstantMillis, host_epoch_seconds};
use soft_rtc::{Clock, DateTime};
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("soft-rtc Basic Demo");
    println!("===================\n");

    let mut clock: Clock<_> = Clock::new(InstantMillis::new());

    let start = DateTime::from_calendar(2024, 2, 28, 23, 59, 55)?;
    clock.set_datetime(&start);
    clock.resync();
    println!("Clock set to {} ({} s)", start, clock.read());
    println!("Host time is {} s\n", host_epoch_seconds());

    // Poll at a cadence that is not a multiple of one second
    for _ in 0..12 {
        thread::sleep(Duration::from_millis(730));
        let now = clock.read();
        println!(
            "epoch {:>10}  (+{} s since set)",
            now,
            now - start.epoch_seconds()
        );
    }

    Ok(())
}
