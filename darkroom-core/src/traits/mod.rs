//! Hardware abstraction traits
//!
//! These traits define the interface between the timer logic and the
//! board-specific input, relay and display implementations.

pub mod display;
pub mod input;
pub mod relay;

pub use display::{Color, DisplayAdapter, DisplayError, Point};
pub use input::RotaryInput;
pub use relay::RelayOutput;
