//! Enlarger lamp relay

/// Trait for the relay switching the enlarger lamp
///
/// Implementations drive a GPIO, an SSR or anything else that can be
/// switched on and off.
pub trait RelayOutput {
    /// Energize (true) or release (false) the relay
    fn set_relay(&mut self, on: bool);

    /// Check if the relay is currently energized
    fn is_energized(&self) -> bool;
}
