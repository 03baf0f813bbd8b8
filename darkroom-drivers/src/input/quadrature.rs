//! Quadrature decoder
//!
//! Turns raw A/B levels of a detented rotary encoder into whole steps.
//! A step is only counted once the lines leave the both-low state on the
//! edge opposite the one they entered by. Bounce back toward the entry edge
//! rewinds the sequence instead of counting.

/// Rotation direction of one detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Change of the detent count
    pub fn delta(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Decoder states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Quadrature state machine
///
/// Both lines idle high (pull-ups); a detent moves through
/// `(1,1) -> (0,1) -> (0,0) -> (1,0)` clockwise and
/// `(1,1) -> (1,0) -> (0,0) -> (0,1)` counter-clockwise.
#[derive(Debug, Clone)]
pub struct QuadratureDecoder {
    phase: Phase,
    last_a: bool,
    last_b: bool,
}

impl QuadratureDecoder {
    /// Create a decoder from the current line levels
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            phase: Phase::Idle,
            last_a: a,
            last_b: b,
        }
    }

    /// Feed sampled line levels
    ///
    /// Returns the direction when a detent completes.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Direction> {
        // No change
        if a == self.last_a && b == self.last_b {
            return None;
        }

        self.last_a = a;
        self.last_b = b;
        self.decode(a, b)
    }

    fn decode(&mut self, a: bool, b: bool) -> Option<Direction> {
        match self.phase {
            Phase::Idle => {
                if !a && b {
                    // A fell first
                    self.phase = Phase::CwStep1;
                } else if a && !b {
                    // B fell first
                    self.phase = Phase::CcwStep1;
                }
                None
            }
            Phase::CwStep1 | Phase::CcwStep1 => {
                if !a && !b {
                    self.phase = if self.phase == Phase::CwStep1 {
                        Phase::CwStep2
                    } else {
                        Phase::CcwStep2
                    };
                } else if a && b {
                    // Bounced back
                    self.phase = Phase::Idle;
                }
                None
            }
            Phase::CwStep2 => self.complete(a, b, Direction::Clockwise),
            Phase::CcwStep2 => self.complete(a, b, Direction::CounterClockwise),
        }
    }

    /// Leave the both-low state
    fn complete(&mut self, a: bool, b: bool, direction: Direction) -> Option<Direction> {
        let (exit, rewind) = match direction {
            Direction::Clockwise => ((true, false), Phase::CwStep1),
            Direction::CounterClockwise => ((false, true), Phase::CcwStep1),
        };

        if (a, b) == exit {
            self.phase = Phase::Idle;
            Some(direction)
        } else if a && b {
            // Both lines jumped, direction unknown
            self.phase = Phase::Idle;
            None
        } else {
            // Back on the entry edge
            self.phase = rewind;
            None
        }
    }
}
