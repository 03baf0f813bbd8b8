//! Inter-task communication
//!
//! The input tasks publish into these statics; the UI task consumes them
//! through [`crate::input::SharedEncoder`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicI32;

/// Detent count, written by the encoder task and rewritten by the UI task
/// when clamping or presetting the dial
pub static ENCODER_POSITION: AtomicI32 = AtomicI32::new(0);

/// Debounced button press, taken once by the UI task
pub static BUTTON_PRESSED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
