//! Exposure session clock
//!
//! Counts whole seconds while the lamp is lit. Timestamps are milliseconds
//! from a free-running `u32` clock; differences use wrapping arithmetic so a
//! counter rollover does not stall the count.

/// Length of one counted second
pub const SECOND_MS: u32 = 1000;

/// Elapsed time of the current manual or timed exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    /// Whole seconds the lamp has been lit since the session started
    seconds_elapsed: u32,
    /// Timestamp the next second is measured from
    clock_ref_ms: u32,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            seconds_elapsed: 0,
            clock_ref_ms: 0,
        }
    }

    pub fn seconds_elapsed(&self) -> u32 {
        self.seconds_elapsed
    }

    /// Start a new session at `now_ms`
    pub fn restart(&mut self, now_ms: u32) {
        self.seconds_elapsed = 0;
        self.clock_ref_ms = now_ms;
    }

    /// Re-anchor the clock after a pause, keeping the count
    pub fn resume_clock(&mut self, now_ms: u32) {
        self.clock_ref_ms = now_ms;
    }

    /// Count a second if one has passed since the reference
    ///
    /// Must only be called while the relay is energized. Returns true when
    /// the count changed. At most one second is counted per call; a late
    /// loop catches up on the following calls.
    pub fn advance(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.clock_ref_ms) >= SECOND_MS {
            self.clock_ref_ms = self.clock_ref_ms.wrapping_add(SECOND_MS);
            self.seconds_elapsed = self.seconds_elapsed.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Seconds left of a `total` second countdown (negative when overdue)
    pub fn remaining(&self, total: u16) -> i32 {
        total as i32 - self.seconds_elapsed.min(i32::MAX as u32) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_whole_seconds() {
        let mut session = Session::new();
        session.restart(500);
        assert!(!session.advance(1499));
        assert!(session.advance(1500));
        assert_eq!(session.seconds_elapsed(), 1);
        assert!(!session.advance(2499));
        assert!(session.advance(2500));
        assert_eq!(session.seconds_elapsed(), 2);
    }

    #[test]
    fn test_late_loop_catches_up() {
        let mut session = Session::new();
        session.restart(0);
        assert!(session.advance(3200));
        assert!(session.advance(3200));
        assert!(session.advance(3200));
        assert!(!session.advance(3200));
        assert_eq!(session.seconds_elapsed(), 3);
    }

    #[test]
    fn test_resume_keeps_count() {
        let mut session = Session::new();
        session.restart(0);
        session.advance(1000);
        // Paused for a while, then lit again
        session.resume_clock(10_000);
        assert!(!session.advance(10_900));
        assert!(session.advance(11_000));
        assert_eq!(session.seconds_elapsed(), 2);
    }

    #[test]
    fn test_clock_rollover() {
        let mut session = Session::new();
        session.restart(u32::MAX - 400);
        assert!(!session.advance(u32::MAX));
        assert!(session.advance(599));
        assert_eq!(session.seconds_elapsed(), 1);
    }

    #[test]
    fn test_remaining() {
        let mut session = Session::new();
        session.restart(0);
        assert_eq!(session.remaining(2), 2);
        session.advance(1000);
        session.advance(2000);
        assert_eq!(session.remaining(2), 0);
        session.advance(3000);
        assert_eq!(session.remaining(2), -1);
    }
}
