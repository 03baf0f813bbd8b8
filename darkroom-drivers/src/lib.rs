//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in darkroom-core for the timer's peripherals:
//!
//! - Relay output on an `embedded-hal` GPIO pin
//! - Quadrature decoding for the rotary encoder

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod relay;
