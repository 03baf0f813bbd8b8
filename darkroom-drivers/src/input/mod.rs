//! Rotary encoder decoding

pub mod quadrature;

pub use quadrature::{Direction, QuadratureDecoder};
