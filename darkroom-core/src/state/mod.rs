//! State machine for menu navigation and exposures
//!
//! Defines the authoritative runtime behavior of the timer.
//! The state machine is explicit, finite, and deterministic: a transition
//! never touches hardware, it only lists the effects the loop must apply.

pub mod effects;
pub mod events;
pub mod machine;
pub mod position;

pub use effects::{Effect, Transition, MAX_EFFECTS};
pub use events::Event;
pub use machine::{RunMode, State};
pub use position::check_position;
