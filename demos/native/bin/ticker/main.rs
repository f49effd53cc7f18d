//! Native demo of a soft-rtc clock fed by a simulated timer interrupt
//!
//! A Tokio task plays the role of a 1 kHz timer interrupt, ticking a static
//! `AtomicMillis`. The main task seeds the clock from the host and reads it
//! periodically.
//!
//! To run:
//! ```bash
//! cargo run --bin ticker
//! ```

use native_demos::host_epoch_seconds;
use soft_rtc::{AtomicMillis, Clock};
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

static COUNTER: AtomicMillis = AtomicMillis::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("soft-rtc Ticker Demo");
    println!("====================\n");

    // Simulated timer interrupt
    tokio::spawn(async {
        let mut interval = time::interval(Duration::from_millis(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        loop {
            interval.tick().await;
            COUNTER.tick();
        }
    });

    let mut clock: Clock<&AtomicMillis> = Clock::new(&COUNTER);
    clock.set_epoch_seconds(host_epoch_seconds());
    clock.resync();

    for _ in 0..10 {
        time::sleep(Duration::from_millis(1_000)).await;
        let now = clock.try_read()?;
        println!(
            "clock {:>10}  host {:>10}  ticks {:>8}",
            now,
            host_epoch_seconds(),
            COUNTER.get()
        );
    }

    Ok(())
}
