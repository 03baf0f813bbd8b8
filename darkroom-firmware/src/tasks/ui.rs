//! UI task
//!
//! Runs the timer's main loop: one [`Controller::tick`] per poll period.

use darkroom_core::Controller;
use darkroom_display::GraphicsCanvas;
use darkroom_drivers::relay::GpioRelay;
use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Instant, Ticker};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use crate::input::SharedEncoder;

/// The 64x48 OLED on I2C0
pub type Panel = Ssd1306<
    I2CInterface<I2c<'static, I2C0, Blocking>>,
    DisplaySize64x48,
    BufferedGraphicsMode<DisplaySize64x48>,
>;

/// Timer controller wired to the board
pub type Timer = Controller<SharedEncoder, GpioRelay<Output<'static>>>;

#[embassy_executor::task]
pub async fn ui_task(mut timer: Timer, mut canvas: GraphicsCanvas<Panel>, poll_interval_ms: u32) {
    info!("UI task started");

    let mut ticker = Ticker::every(Duration::from_millis(poll_interval_ms as u64));
    let mut display_ok = true;

    loop {
        ticker.next().await;

        // Wrapping millisecond clock, matching the scheduler's arithmetic
        let now_ms = Instant::now().as_millis() as u32;

        match timer.tick(now_ms, &mut canvas) {
            Ok(report) => {
                if let Some((from, to)) = report.transition {
                    debug!("State {:?} -> {:?}", from, to);
                }
                if report.second_elapsed {
                    trace!("Elapsed {}s", timer.session().seconds_elapsed());
                }
                if report.rendered && !display_ok {
                    info!("Display recovered");
                    display_ok = true;
                }
            }
            Err(e) => {
                // Only log the first failure of a run
                if display_ok {
                    warn!("Display error: {:?}", e);
                    display_ok = false;
                }
            }
        }
    }
}
