//! Configuration type definitions
//!
//! Settings live in RAM for the lifetime of the process and are rebuilt
//! from compiled defaults on every power cycle.

use heapless::String;

/// Largest time that fits the four-digit time readout
pub const TIME_LIMIT_S: u16 = 9999;

/// Maximum author label length on the info screen
pub const MAX_AUTHOR_LEN: usize = 16;

/// Compiled default exposure time
pub const DEFAULT_TIME_S: u16 = 600;

/// Compiled default dial step
pub const DEFAULT_INCREMENT_S: u16 = 5;

/// Compiled default minimum redraw interval
pub const DEFAULT_REDRAW_INTERVAL_MS: u32 = 300;

/// Compiled default main loop period
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 2;

/// Settings validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `second_increment` must be at least one second
    ZeroIncrement,
    /// `min_time` is larger than `max_time`
    MinAboveMax,
    /// `default_time` lies outside `[min_time, max_time]`
    DefaultOutOfRange,
    /// `max_time` exceeds the readout limit
    MaxAboveLimit,
}

/// A field of [`Settings`] that the time editors can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingField {
    /// Preset for the time dial
    Default,
    /// Lower bound of the time dial
    Min,
    /// Upper bound of the time dial
    Max,
    /// Duration of the next timed exposure
    Last,
}

/// Timer settings, all in seconds
///
/// Invariant: `min_time <= last_time <= max_time`,
/// `min_time <= default_time <= max_time`, `max_time <= TIME_LIMIT_S`
/// and `second_increment > 0`. Fields are private so every mutation goes
/// through [`Settings::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    default_time: u16,
    min_time: u16,
    max_time: u16,
    last_time: u16,
    second_increment: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_time: DEFAULT_TIME_S,
            min_time: 0,
            max_time: TIME_LIMIT_S,
            last_time: DEFAULT_TIME_S,
            second_increment: DEFAULT_INCREMENT_S,
        }
    }
}

impl Settings {
    /// Build validated settings; `last_time` starts at `default_time`
    pub fn new(
        default_time: u16,
        min_time: u16,
        max_time: u16,
        second_increment: u16,
    ) -> Result<Self, ConfigError> {
        if second_increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if max_time > TIME_LIMIT_S {
            return Err(ConfigError::MaxAboveLimit);
        }
        if min_time > max_time {
            return Err(ConfigError::MinAboveMax);
        }
        if default_time < min_time || default_time > max_time {
            return Err(ConfigError::DefaultOutOfRange);
        }

        Ok(Self {
            default_time,
            min_time,
            max_time,
            last_time: default_time,
            second_increment,
        })
    }

    pub fn default_time(&self) -> u16 {
        self.default_time
    }

    pub fn min_time(&self) -> u16 {
        self.min_time
    }

    pub fn max_time(&self) -> u16 {
        self.max_time
    }

    pub fn last_time(&self) -> u16 {
        self.last_time
    }

    pub fn second_increment(&self) -> u16 {
        self.second_increment
    }

    /// Read a field by name
    pub fn get(&self, field: SettingField) -> u16 {
        match field {
            SettingField::Default => self.default_time,
            SettingField::Min => self.min_time,
            SettingField::Max => self.max_time,
            SettingField::Last => self.last_time,
        }
    }

    /// Dial position showing `seconds` (rounded down to a whole step)
    pub fn position_for(&self, seconds: u16) -> i32 {
        (seconds / self.second_increment) as i32
    }

    /// Seconds shown at a dial position
    ///
    /// Negative positions read as zero; the result saturates at `u16::MAX`
    /// and is clamped further by [`Settings::commit`].
    pub fn seconds_at(&self, position: i32) -> u16 {
        let steps = position.max(0) as u32;
        (steps * self.second_increment as u32).min(u16::MAX as u32) as u16
    }

    /// Lowest dial position whose value is not below `seconds`
    pub fn position_at_least(&self, seconds: u16) -> i32 {
        let inc = self.second_increment as i32;
        (seconds as i32 + inc - 1) / inc
    }

    /// Store an edited value, keeping every dependent field in range
    pub fn commit(&mut self, field: SettingField, seconds: u16) {
        match field {
            SettingField::Last => {
                self.last_time = clamp(seconds, self.min_time, self.max_time);
            }
            SettingField::Default => {
                self.default_time = clamp(seconds, self.min_time, self.max_time);
            }
            SettingField::Min => {
                self.min_time = seconds.min(self.max_time);
                self.restore_range();
            }
            SettingField::Max => {
                self.max_time = clamp(seconds, self.min_time, TIME_LIMIT_S);
                self.restore_range();
            }
        }
    }

    /// Pull `last_time` and `default_time` back into `[min_time, max_time]`
    fn restore_range(&mut self) {
        self.last_time = clamp(self.last_time, self.min_time, self.max_time);
        self.default_time = clamp(self.default_time, self.min_time, self.max_time);
    }
}

/// Clamp without `Ord::clamp`'s panic on an inverted range (upper wins)
fn clamp(value: u16, lower: u16, upper: u16) -> u16 {
    value.max(lower).min(upper)
}

/// User interface settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiConfig {
    /// Minimum time between two screen redraws (ms)
    pub redraw_interval_ms: u32,
    /// Main loop period (ms)
    pub poll_interval_ms: u32,
    /// Name shown on the info screen
    pub author: String<MAX_AUTHOR_LEN>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            redraw_interval_ms: DEFAULT_REDRAW_INTERVAL_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            author: String::new(),
        }
    }
}

/// Relay output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// If true, the lamp is ON when the pin is LOW
    pub active_low: bool,
}

/// Complete timer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    pub settings: Settings,
    pub ui: UiConfig,
    pub relay: RelayConfig,
}
