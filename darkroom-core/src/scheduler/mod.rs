//! Main loop scheduling
//!
//! Wall-clock bookkeeping for the cooperative loop: the seconds counter of a
//! running session and the redraw rate limiter.

pub mod redraw;
pub mod session;

pub use redraw::RedrawGate;
pub use session::{Session, SECOND_MS};
