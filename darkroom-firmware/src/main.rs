//! Darkroom - Enlarger Timer Firmware
//!
//! Main firmware binary for RP2040-based enlarger timers: a rotary encoder
//! with push button, a 64x48 SSD1306 OLED and a relay switching the
//! enlarger lamp.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use {defmt_rtt as _, panic_probe as _};

use darkroom_core::Controller;
use darkroom_display::GraphicsCanvas;
use darkroom_drivers::relay::GpioRelay;

use crate::input::SharedEncoder;

mod channels;
mod config;
mod input;
mod tasks;

/// I2C clock for the OLED
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Darkroom timer firmware starting...");

    // Parse configuration first so the relay pin comes up released
    let config = config::load();

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Relay output (GPIO16)
    let released = if config.relay.active_low {
        Level::High
    } else {
        Level::Low
    };
    let relay = GpioRelay::new(Output::new(p.PIN_16, released), config.relay.active_low);
    info!("Relay initialized, active_low={}", config.relay.active_low);

    // OLED on I2C0 (SDA=GPIO4, SCL=GPIO5)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let mut display = Ssd1306::new(
        I2CDisplayInterface::new(i2c),
        DisplaySize64x48,
        DisplayRotation::Rotate180,
    )
    .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("Display init failed, continuing without screen");
    }
    let canvas = GraphicsCanvas::new(display);
    info!("Display initialized");

    // Encoder (A=GPIO10, B=GPIO11) and push button (GPIO12), all pulled up
    let enc_a = Input::new(p.PIN_10, Pull::Up);
    let enc_b = Input::new(p.PIN_11, Pull::Up);
    let button = Input::new(p.PIN_12, Pull::Up);
    info!("Encoder and button initialized");

    let timer = Controller::new(SharedEncoder, relay, &config, env!("CARGO_PKG_VERSION"));
    let poll_interval_ms = config.ui.poll_interval_ms;

    // Spawn tasks
    spawner.spawn(tasks::encoder_task(enc_a, enc_b)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner
        .spawn(tasks::ui_task(timer, canvas, poll_interval_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
