//! Redraw rate limiting
//!
//! The panel is slow to refresh over I2C, so renders are coalesced: a
//! visible change is only drawn once more than the minimum interval has
//! passed since the previous render. Changes arriving in between are not
//! lost; they are drawn with the next allowed render.

use crate::state::State;

/// Decides when the screen must be redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawGate {
    min_interval_ms: u32,
    /// Time of the previous render (None before the first one)
    last_redraw_ms: Option<u32>,
    /// State and position shown by the previous render
    last_state: Option<State>,
    last_position: i32,
    /// A change without a state or position difference is waiting
    pending: bool,
}

impl RedrawGate {
    pub const fn new(min_interval_ms: u32) -> Self {
        Self {
            min_interval_ms,
            last_redraw_ms: None,
            last_state: None,
            last_position: 0,
            pending: false,
        }
    }

    /// Request a redraw even if state and position are unchanged
    pub fn force(&mut self) {
        self.pending = true;
    }

    /// Check if a render is due at `now_ms`
    pub fn should_redraw(&self, now_ms: u32, state: State, position: i32) -> bool {
        let interval_elapsed = match self.last_redraw_ms {
            None => return true,
            Some(last) => now_ms.wrapping_sub(last) > self.min_interval_ms,
        };

        let changed =
            self.pending || self.last_state != Some(state) || self.last_position != position;

        interval_elapsed && changed
    }

    /// Record what was just drawn
    pub fn mark_rendered(&mut self, now_ms: u32, state: State, position: i32) {
        self.last_redraw_ms = Some(now_ms);
        self.last_state = Some(state);
        self.last_position = position;
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_check_always_renders() {
        let gate = RedrawGate::new(300);
        assert!(gate.should_redraw(0, State::Start, 0));
    }

    #[test]
    fn test_unchanged_screen_is_not_redrawn() {
        let mut gate = RedrawGate::new(300);
        gate.mark_rendered(0, State::Start, 0);
        assert!(!gate.should_redraw(10_000, State::Start, 0));
    }

    #[test]
    fn test_interval_is_strict() {
        let mut gate = RedrawGate::new(300);
        gate.mark_rendered(1000, State::Start, 0);
        assert!(!gate.should_redraw(1300, State::Start, 1));
        assert!(gate.should_redraw(1301, State::Start, 1));
    }

    #[test]
    fn test_state_change_triggers() {
        let mut gate = RedrawGate::new(300);
        gate.mark_rendered(0, State::Start, 0);
        assert!(gate.should_redraw(400, State::Info, 0));
    }

    #[test]
    fn test_forced_redraw_survives_the_gate() {
        let mut gate = RedrawGate::new(300);
        gate.mark_rendered(0, State::Manual, 0);
        gate.force();
        assert!(!gate.should_redraw(100, State::Manual, 0));
        assert!(gate.should_redraw(301, State::Manual, 0));
        gate.mark_rendered(301, State::Manual, 0);
        assert!(!gate.should_redraw(700, State::Manual, 0));
    }

    #[test]
    fn test_timestamp_rollover() {
        let mut gate = RedrawGate::new(300);
        gate.mark_rendered(u32::MAX - 100, State::Start, 0);
        assert!(!gate.should_redraw(150, State::Start, 1));
        assert!(gate.should_redraw(200, State::Start, 1));
    }
}
