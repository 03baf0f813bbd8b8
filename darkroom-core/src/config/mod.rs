//! Configuration types
//!
//! Timer settings plus UI and relay options. The firmware embeds a TOML
//! file and parses it at boot with [`parse_config`].

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
