#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};

use panic_halt as _;
use soft_rtc::{Clock, FnMillis};

// Millisecond counter advanced by SysTick. Plain load/store keeps it
// buildable on cores without atomic read-modify-write.
static MILLIS: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "atomic")]
static COUNTER: soft_rtc::AtomicMillis = soft_rtc::AtomicMillis::new();

fn millis() -> u32 {
    MILLIS.load(Ordering::Relaxed)
}

#[cortex_m_rt::exception]
fn SysTick() {
    let now = MILLIS.load(Ordering::Relaxed);
    MILLIS.store(now.wrapping_add(1), Ordering::Relaxed);

    #[cfg(feature = "atomic")]
    COUNTER.tick();
}

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let mut clock: Clock<_> = Clock::new(FnMillis(millis));

    // Set and read once to ensure the calendar and advance code is included
    // Use black_box to prevent optimizer from removing the code
    clock.set(
        core::hint::black_box(54),
        core::hint::black_box(3),
        core::hint::black_box(1),
        0,
        0,
        0,
    );
    let _ = core::hint::black_box(clock.read());

    #[cfg(feature = "atomic")]
    let mut atomic_clock: Clock<_> = Clock::new(&COUNTER);
    #[cfg(feature = "atomic")]
    let _ = core::hint::black_box(atomic_clock.read());

    // Keep clock alive to prevent optimization
    loop {
        core::hint::black_box(clock.read());
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
