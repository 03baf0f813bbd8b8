//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Button pressed while the dial stood at this (clamped) position
    Activate(i32),
    /// Timed exposure has used up its duration
    CountdownExpired,
}
