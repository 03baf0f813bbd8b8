//! Board-agnostic core logic for the enlarger timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (rotary input, display, relay)
//! - State machine for menu navigation and exposures
//! - Loop scheduling (elapsed seconds, redraw rate limiting)
//! - Per-state screen rendering as draw-command lists
//! - Configuration types and the embedded config parser
//!
//! Everything here runs on the host for testing; the firmware crate only
//! wires hardware into [`controller::Controller`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod scheduler;
pub mod state;
pub mod traits;
pub mod ui;

pub use controller::{Controller, TickReport};
