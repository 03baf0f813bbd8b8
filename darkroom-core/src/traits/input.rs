//! Rotary encoder with push button

/// Trait for the rotary encoder input
///
/// The position is a free-running detent count. The timer logic owns its
/// meaning and writes it back when clamping or presetting a value.
pub trait RotaryInput {
    /// Current detent count (clockwise increments)
    fn position(&mut self) -> i32;

    /// Overwrite the detent count
    fn reset_position(&mut self, position: i32);

    /// Take the pending button press
    ///
    /// Returns true exactly once per press.
    fn poll_button_edge(&mut self) -> bool;
}
