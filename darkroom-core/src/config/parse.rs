//! Simple TOML parser for the timer configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the timer configuration. It does NOT support the full TOML grammar.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys

use super::types::{
    ConfigError, Settings, TimerConfig, DEFAULT_INCREMENT_S, DEFAULT_TIME_S, TIME_LIMIT_S,
};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range for its field
    InvalidValue,
    /// Key not known in its section
    UnknownKey,
    /// Values parsed but do not form valid settings
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timer,
    Ui,
    Relay,
}

/// Raw `[timer]` values, validated once the whole input is read
struct TimerValues {
    default_time: u16,
    min_time: u16,
    max_time: u16,
    second_increment: u16,
}

impl Default for TimerValues {
    fn default() -> Self {
        Self {
            default_time: DEFAULT_TIME_S,
            min_time: 0,
            max_time: TIME_LIMIT_S,
            second_increment: DEFAULT_INCREMENT_S,
        }
    }
}

/// Parse TOML configuration into a [`TimerConfig`]
///
/// Missing keys keep their compiled defaults.
pub fn parse_config(input: &str) -> Result<TimerConfig, ParseError> {
    let mut config = TimerConfig::default();
    let mut timer = TimerValues::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config, &mut timer)?;
    }

    config.settings = Settings::new(
        timer.default_time,
        timer.min_time,
        timer.max_time,
        timer.second_increment,
    )?;

    Ok(config)
}

/// Parse a `[name]` header line
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "timer" => Ok(Section::Timer),
        "ui" => Ok(Section::Ui),
        "relay" => Ok(Section::Relay),
        _ => Err(ParseError::InvalidSection),
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut TimerConfig,
    timer: &mut TimerValues,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Timer, "default_time") => timer.default_time = parse_int(value)?,
        (Section::Timer, "min_time") => timer.min_time = parse_int(value)?,
        (Section::Timer, "max_time") => timer.max_time = parse_int(value)?,
        (Section::Timer, "second_increment") => timer.second_increment = parse_int(value)?,

        (Section::Ui, "redraw_interval_ms") => config.ui.redraw_interval_ms = parse_int(value)?,
        (Section::Ui, "poll_interval_ms") => {
            let interval: u32 = parse_int(value)?;
            if interval == 0 {
                return Err(ParseError::InvalidValue);
            }
            config.ui.poll_interval_ms = interval;
        }
        (Section::Ui, "author") => {
            config.ui.author.clear();
            config
                .ui
                .author
                .push_str(parse_string(value))
                .map_err(|_| ParseError::InvalidValue)?;
        }

        (Section::Relay, "active_low") => config.relay.active_low = parse_bool(value)?,

        _ => return Err(ParseError::UnknownKey),
    }

    Ok(())
}
