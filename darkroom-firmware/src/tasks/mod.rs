//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! [`crate::channels`].

pub mod button;
pub mod encoder;
pub mod ui;

pub use button::button_task;
pub use encoder::encoder_task;
pub use ui::ui_task;
