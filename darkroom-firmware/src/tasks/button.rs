//! Button task
//!
//! Debounces the encoder push button and raises [`BUTTON_PRESSED`] once
//! per press.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::channels::BUTTON_PRESSED;

/// Settle time after the falling edge
const PRESS_DEBOUNCE_MS: u64 = 20;

/// Settle time after release
const RELEASE_DEBOUNCE_MS: u64 = 50;

#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        Timer::after_millis(PRESS_DEBOUNCE_MS).await;

        // Glitch shorter than the debounce time
        if button.is_high() {
            continue;
        }

        debug!("Button pressed");
        BUTTON_PRESSED.signal(());

        button.wait_for_rising_edge().await;
        Timer::after_millis(RELEASE_DEBOUNCE_MS).await;
    }
}
