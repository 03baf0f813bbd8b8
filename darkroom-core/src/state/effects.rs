//! Side effects requested by a transition
//!
//! The state machine stays pure; the controller applies these in order
//! against the relay, the rotary input and the session clock.

use heapless::Vec;

use super::machine::State;
use crate::config::SettingField;

/// Upper bound on effects emitted by a single transition
pub const MAX_EFFECTS: usize = 4;

/// A single side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Energize (true) or release (false) the relay
    SetRelay(bool),
    /// Overwrite the dial position
    SetPosition(i32),
    /// Zero the elapsed seconds and re-anchor the seconds clock
    ResetElapsed,
    /// Re-anchor the seconds clock, keeping the elapsed count
    StartClock,
    /// Store an edited time in the settings
    Commit(SettingField, u16),
    /// Redraw on the next opportunity even if nothing visible changed
    ForceRedraw,
}

/// Result of feeding an event to a [`State`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to enter (may equal the current one)
    pub next: State,
    /// Effects to apply, in order
    pub effects: Vec<Effect, MAX_EFFECTS>,
}

impl Transition {
    /// Enter `next`
    pub fn to(next: State) -> Self {
        Self {
            next,
            effects: Vec::new(),
        }
    }

    /// Remain in `state` without effects
    pub fn stay(state: State) -> Self {
        Self::to(state)
    }

    /// Append an effect
    pub fn with(mut self, effect: Effect) -> Self {
        // Capacity covers the longest row of the transition table
        let _ = self.effects.push(effect);
        self
    }

    pub fn relay(self, on: bool) -> Self {
        self.with(Effect::SetRelay(on))
    }

    pub fn position(self, position: i32) -> Self {
        self.with(Effect::SetPosition(position))
    }

    /// Relay level requested by this transition, if any
    pub fn relay_request(&self) -> Option<bool> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::SetRelay(on) => Some(*on),
            _ => None,
        })
    }

    /// Dial position requested by this transition, if any
    pub fn position_request(&self) -> Option<i32> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::SetPosition(p) => Some(*p),
            _ => None,
        })
    }

    pub fn has(&self, effect: Effect) -> bool {
        self.effects.contains(&effect)
    }
}
