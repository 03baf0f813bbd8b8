//! GPIO relay output
//!
//! Drives the enlarger relay (or an SSR) from a single GPIO pin.

use darkroom_core::traits::RelayOutput;
use embedded_hal::digital::{OutputPin, PinState};

/// GPIO relay output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioRelay<P> {
    pin: P,
    /// If true, relay ON = pin LOW
    inverted: bool,
    /// Current logical state (true = energized)
    on: bool,
}

impl<P: OutputPin> GpioRelay<P> {
    /// Create a new GPIO relay output, released
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the relay is energized when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            on: false,
        };
        relay.set_relay(false);
        relay
    }
}

impl<P: OutputPin> RelayOutput for GpioRelay<P> {
    fn set_relay(&mut self, on: bool) {
        self.on = on;
        // Normal: on -> high, inverted: on -> low
        let level = PinState::from(on != self.inverted);
        // GPIO writes on the supported targets are infallible
        let _ = self.pin.set_state(level);
    }

    fn is_energized(&self) -> bool {
        self.on
    }
}
