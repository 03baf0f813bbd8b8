//! Rotary input backed by the encoder and button tasks

use core::sync::atomic::Ordering;

use darkroom_core::traits::RotaryInput;

use crate::channels::{BUTTON_PRESSED, ENCODER_POSITION};

/// [`RotaryInput`] reading the shared encoder count and button signal
pub struct SharedEncoder;

impl RotaryInput for SharedEncoder {
    fn position(&mut self) -> i32 {
        ENCODER_POSITION.load(Ordering::Relaxed)
    }

    fn reset_position(&mut self, position: i32) {
        ENCODER_POSITION.store(position, Ordering::Relaxed);
    }

    fn poll_button_edge(&mut self) -> bool {
        BUTTON_PRESSED.try_take().is_some()
    }
}
