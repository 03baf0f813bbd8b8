//! Display adapter for the enlarger timer
//!
//! This crate provides:
//! - `GraphicsCanvas`, the timer's `DisplayAdapter` on top of any
//!   `embedded-graphics` monochrome `DrawTarget`
//! - `FlushTarget`, the "push the framebuffer" step that `DrawTarget` lacks
//!
//! With the `ssd1306` feature, SSD1306 panels in buffered graphics mode can
//! be used directly.

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod flush;

pub use canvas::GraphicsCanvas;
pub use flush::FlushTarget;
