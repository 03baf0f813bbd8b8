//! Encoder task
//!
//! Samples both encoder lines every millisecond and counts whole detents
//! into [`ENCODER_POSITION`].

use core::sync::atomic::Ordering;

use darkroom_drivers::input::QuadratureDecoder;
use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use crate::channels::ENCODER_POSITION;

/// Sampling period
const SAMPLE_INTERVAL_MS: u64 = 1;

#[embassy_executor::task]
pub async fn encoder_task(a: Input<'static>, b: Input<'static>) {
    info!("Encoder task started");

    let mut decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        if let Some(direction) = decoder.update(a.is_high(), b.is_high()) {
            ENCODER_POSITION.fetch_add(direction.delta(), Ordering::Relaxed);
            trace!("Encoder step {}", direction);
        }
    }
}
