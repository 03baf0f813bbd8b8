//! Menu and screen rendering
//!
//! Screens are built as a [`Frame`] of draw commands from a snapshot of the
//! timer ([`View`]) and then replayed on a [`DisplayAdapter`].
//!
//! [`DisplayAdapter`]: crate::traits::DisplayAdapter

pub mod frame;
pub mod icons;
pub mod screens;

pub use frame::{DrawCommand, Frame, Glyph, Label, TextStyle, MAX_COMMANDS};
pub use icons::{draw_icon, ICON_SIZE};
pub use screens::{render, InfoText, View};

#[cfg(test)]
pub(crate) mod recorder;
