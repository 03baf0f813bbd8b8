//! State machine definition
//!
//! Relay, dial and settings behavior is a function of the current state
//! and an event.

use super::effects::{Effect, Transition};
use super::events::Event;
use crate::config::{SettingField, Settings, TIME_LIMIT_S};

/// Last row of the start menu (Start, Setup, Info)
const START_LAST: i32 = 2;
/// Last row of the exposure mode menu (Auto, Man., back icon)
const EXPOSURE_MODE_LAST: i32 = 2;
/// Last row of the settings menu (Default, Min, Max, back icon)
const SETTINGS_LAST: i32 = 3;
/// Last icon of the info screen
const INFO_LAST: i32 = 3;

/// Kind of running session a stop confirmation returns to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunMode {
    /// Open-ended manual exposure
    Manual,
    /// Countdown exposure
    Timed,
}

impl RunMode {
    /// State this session runs in
    pub fn state(self) -> State {
        match self {
            RunMode::Manual => State::Manual,
            RunMode::Timed => State::Exposing,
        }
    }
}

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Top menu: Start, Setup, Info
    Start,
    /// Choose timed (Auto) or manual exposure
    ExposureModeMenu,
    /// Manual exposure, relay toggled by the user
    Manual,
    /// Dialing the exposure time
    SetTime,
    /// Exposure time chosen, waiting for go or back
    SetTimeConfirm,
    /// Countdown exposure
    Exposing,
    /// Countdown reached zero
    ExposureDone,
    /// Asking whether to abort a running session
    ConfirmStop {
        /// Session to return to when the user declines
        resume: RunMode,
        /// Whether the lamp was lit when the question was asked
        relay_was_on: bool,
    },
    /// Choose which setting to edit
    SettingsMenu,
    /// Editing the dial preset
    SetDefault,
    /// Editing the lower dial bound
    SetMin,
    /// Editing the upper dial bound
    SetMax,
    /// Version and author
    Info,
}

impl State {
    /// Check if this state allows the relay to be energized
    pub fn relay_allowed(&self) -> bool {
        matches!(self, State::Manual | State::Exposing)
    }

    /// Check if this state counts down against `last_time`
    pub fn is_countdown(&self) -> bool {
        matches!(self, State::Exposing)
    }

    /// Setting written when a time editor is activated
    pub fn edited_field(&self) -> Option<SettingField> {
        match self {
            State::SetTime => Some(SettingField::Last),
            State::SetDefault => Some(SettingField::Default),
            State::SetMin => Some(SettingField::Min),
            State::SetMax => Some(SettingField::Max),
            _ => None,
        }
    }

    /// Value a time editor opens with
    fn preset_seconds(&self, settings: &Settings) -> Option<u16> {
        match self {
            State::SetTime => Some(settings.default_time()),
            _ => self.edited_field().map(|field| settings.get(field)),
        }
    }

    /// Dial position a time editor opens at, inside its bounds
    pub fn preset_position(&self, settings: &Settings) -> i32 {
        let (lower, upper) = self.position_bounds(settings);
        let seconds = self.preset_seconds(settings).unwrap_or(0);
        settings.position_for(seconds).max(lower).min(upper)
    }

    /// Seconds a time editor shows and commits at `position`
    ///
    /// The preset position stands for the exact preset, which need not lie
    /// on a whole step, so confirming an untouched dial changes nothing.
    pub fn dialed_seconds(&self, settings: &Settings, position: i32) -> u16 {
        match self.preset_seconds(settings) {
            Some(preset) if position == self.preset_position(settings) => preset,
            _ => settings.seconds_at(position),
        }
    }

    /// Legal dial range `(lower, upper)` in this state
    ///
    /// Time editors keep `position * second_increment` inside the range the
    /// edited field may take. The range can be empty (`lower > upper`) when
    /// the bounds do not fall on a whole step; clamping then favors `upper`
    /// and [`Settings::commit`] corrects the stored value.
    pub fn position_bounds(&self, settings: &Settings) -> (i32, i32) {
        match self {
            State::Start => (0, START_LAST),
            State::ExposureModeMenu => (0, EXPOSURE_MODE_LAST),
            State::SettingsMenu => (0, SETTINGS_LAST),
            State::Info => (0, INFO_LAST),
            State::SetTimeConfirm | State::Manual | State::Exposing | State::ConfirmStop { .. } => {
                (0, 1)
            }
            State::ExposureDone => (0, 0),
            State::SetTime | State::SetDefault => (
                settings.position_at_least(settings.min_time()),
                settings.position_for(settings.max_time()),
            ),
            State::SetMin => (0, settings.position_for(settings.max_time())),
            State::SetMax => (
                settings.position_at_least(settings.min_time()),
                settings.position_for(TIME_LIMIT_S),
            ),
        }
    }

    /// Process an event and return the next state with its effects
    ///
    /// `relay_on` is the current relay level, needed by the play/pause
    /// toggle and by the stop confirmation.
    pub fn transition(self, event: Event, settings: &Settings, relay_on: bool) -> Transition {
        use Event::*;
        use State::*;

        match (self, event) {
            // Start menu
            (Start, Activate(0)) => Transition::to(ExposureModeMenu).position(0),
            (Start, Activate(1)) => Transition::to(SettingsMenu).position(0),
            (Start, Activate(2)) => Transition::to(Info).position(0),

            // Exposure mode menu
            (ExposureModeMenu, Activate(0)) => {
                Transition::to(SetTime).position(SetTime.preset_position(settings))
            }
            (ExposureModeMenu, Activate(1)) => Transition::to(Manual)
                .with(Effect::ResetElapsed)
                .relay(true)
                .position(0),
            (ExposureModeMenu, Activate(2)) => Transition::to(Start).position(0),

            // Time dial: any position commits
            (SetTime, Activate(position)) => {
                commit_edit(self, settings, position, SetTimeConfirm, 1)
            }

            (SetTimeConfirm, Activate(0)) => Transition::to(ExposureModeMenu).position(2),
            (SetTimeConfirm, Activate(1)) => Transition::to(Exposing)
                .with(Effect::ResetElapsed)
                .relay(true)
                .position(0),

            // Running sessions: play/pause and stop
            (Manual | Exposing, Activate(0)) => {
                let toggled = if relay_on {
                    Transition::stay(self).relay(false)
                } else {
                    Transition::stay(self).with(Effect::StartClock).relay(true)
                };
                toggled.with(Effect::ForceRedraw)
            }
            (Manual, Activate(1)) => confirm_stop(RunMode::Manual, relay_on),
            (Exposing, Activate(1)) => confirm_stop(RunMode::Timed, relay_on),

            // Stop confirmation
            (
                ConfirmStop {
                    resume,
                    relay_was_on,
                },
                Activate(0),
            ) => {
                let back = Transition::to(resume.state());
                let back = if relay_was_on {
                    back.with(Effect::StartClock).relay(true)
                } else {
                    back
                };
                // Cursor returns to the stop icon that opened the question
                back.position(1)
            }
            (ConfirmStop { .. }, Activate(1)) => {
                Transition::to(Start).relay(false).position(0)
            }

            // Acknowledge screens
            (Info | ExposureDone, Activate(_)) => Transition::to(Start).position(0),

            // Settings menu
            (SettingsMenu, Activate(0)) => {
                Transition::to(SetDefault).position(SetDefault.preset_position(settings))
            }
            (SettingsMenu, Activate(1)) => {
                Transition::to(SetMin).position(SetMin.preset_position(settings))
            }
            (SettingsMenu, Activate(2)) => {
                Transition::to(SetMax).position(SetMax.preset_position(settings))
            }
            (SettingsMenu, Activate(3)) => Transition::to(Start).position(1),

            // Settings editors return to their row in the settings menu
            (SetDefault, Activate(position)) => {
                commit_edit(self, settings, position, SettingsMenu, 0)
            }
            (SetMin, Activate(position)) => {
                commit_edit(self, settings, position, SettingsMenu, 1)
            }
            (SetMax, Activate(position)) => {
                commit_edit(self, settings, position, SettingsMenu, 2)
            }

            // Countdown completion
            (Exposing, CountdownExpired) => Transition::to(ExposureDone).relay(false).position(0),

            // Default: stay in current state
            _ => Transition::stay(self),
        }
    }
}

/// Ask before aborting; the lamp is paused while the question is shown
fn confirm_stop(resume: RunMode, relay_on: bool) -> Transition {
    let ask = Transition::to(State::ConfirmStop {
        resume,
        relay_was_on: relay_on,
    });
    let ask = if relay_on { ask.relay(false) } else { ask };
    ask.position(0)
}

/// Store the dialed time of `editor` and move on to `next` at `row`
fn commit_edit(
    editor: State,
    settings: &Settings,
    position: i32,
    next: State,
    row: i32,
) -> Transition {
    let done = Transition::to(next);
    let done = match editor.edited_field() {
        Some(field) => done.with(Effect::Commit(
            field,
            editor.dialed_seconds(settings, position),
        )),
        None => done,
    };
    done.position(row)
}
