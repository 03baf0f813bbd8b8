//! Configuration loading
//!
//! The timer configuration is compiled in from timer.toml (validated by
//! build.rs) and parsed with the no_std parser in darkroom-core.

use darkroom_core::config::{parse_config, TimerConfig};
use defmt::*;

/// Embedded configuration
/// Edit timer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../timer.toml");

/// Parse the embedded configuration, falling back to compiled defaults
pub fn load() -> TimerConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: default={}s min={}s max={}s step={}s",
                config.settings.default_time(),
                config.settings.min_time(),
                config.settings.max_time(),
                config.settings.second_increment()
            );
            config
        }
        Err(e) => {
            error!("Invalid embedded config: {:?}", e);
            warn!("Using compiled defaults");
            TimerConfig::default()
        }
    }
}
