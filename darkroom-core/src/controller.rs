//! Timer controller
//!
//! Owns the state machine, settings, session clock and redraw gate, and
//! runs one iteration of the cooperative main loop per [`Controller::tick`]:
//!
//! 1. poll the rotary input
//! 2. clamp the dial to the legal range of the current state
//! 3. apply a pending button press
//! 4. count elapsed seconds while the lamp is lit, then check the countdown
//! 5. redraw the screen if something visible changed and the rate allows it

use crate::config::{Settings, TimerConfig};
use crate::scheduler::{RedrawGate, Session};
use crate::state::{check_position, Effect, Event, State};
use crate::traits::{DisplayAdapter, DisplayError, RelayOutput, RotaryInput};
use crate::ui::{render, Frame, InfoText, Label, View};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// State change as (from, to)
    pub transition: Option<(State, State)>,
    /// A whole second was counted
    pub second_elapsed: bool,
    /// The screen was redrawn and flushed
    pub rendered: bool,
}

/// Enlarger timer
pub struct Controller<I, R> {
    input: I,
    relay: R,
    state: State,
    settings: Settings,
    session: Session,
    redraw: RedrawGate,
    /// Dial position after the last clamp or preset
    position: i32,
    version: &'static str,
    author: Label,
}

impl<I: RotaryInput, R: RelayOutput> Controller<I, R> {
    /// Create a controller in the start menu with the relay released
    pub fn new(mut input: I, mut relay: R, config: &TimerConfig, version: &'static str) -> Self {
        relay.set_relay(false);
        input.reset_position(0);

        let mut author = Label::new();
        let _ = author.push_str(&config.ui.author);

        Self {
            input,
            relay,
            state: State::Start,
            settings: config.settings,
            session: Session::new(),
            redraw: RedrawGate::new(config.ui.redraw_interval_ms),
            position: 0,
            version,
            author,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_relay_on(&self) -> bool {
        self.relay.is_energized()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Run one loop iteration at `now_ms`
    ///
    /// Display errors are returned after the state has been fully updated,
    /// so a failing panel never stalls the timer. A failed render is
    /// repeated on a later tick.
    pub fn tick<D: DisplayAdapter + ?Sized>(
        &mut self,
        now_ms: u32,
        display: &mut D,
    ) -> Result<TickReport, DisplayError> {
        let mut report = TickReport::default();

        let raw = self.input.position();
        let pressed = self.input.poll_button_edge();

        self.position = match check_position(self.state, &self.settings, raw) {
            Some(clamped) => {
                self.input.reset_position(clamped);
                clamped
            }
            None => raw,
        };

        if pressed {
            report.transition = self.dispatch(Event::Activate(self.position), now_ms);
        }

        if self.relay.is_energized() && self.session.advance(now_ms) {
            report.second_elapsed = true;
            self.redraw.force();
        }

        if self.state.is_countdown() && self.session.remaining(self.settings.last_time()) <= 0 {
            if let Some(change) = self.dispatch(Event::CountdownExpired, now_ms) {
                report.transition = Some(change);
            }
        }

        if self.redraw.should_redraw(now_ms, self.state, self.position) {
            self.redraw.mark_rendered(now_ms, self.state, self.position);
            report.rendered = true;
            if let Err(e) = self.frame().draw(display) {
                // Retry once the redraw interval has passed again
                self.redraw.force();
                return Err(e);
            }
        }

        Ok(report)
    }

    /// Feed an event to the state machine and apply its effects
    ///
    /// Returns the state change, if the state changed.
    pub fn dispatch(&mut self, event: Event, now_ms: u32) -> Option<(State, State)> {
        let from = self.state;
        let transition = from.transition(event, &self.settings, self.relay.is_energized());

        for effect in &transition.effects {
            self.apply(*effect, transition.next, now_ms);
        }
        self.state = transition.next;

        (from != transition.next).then_some((from, transition.next))
    }

    fn apply(&mut self, effect: Effect, next: State, now_ms: u32) {
        match effect {
            // The lamp may only be lit in a running session
            Effect::SetRelay(on) => self.relay.set_relay(on && next.relay_allowed()),
            Effect::SetPosition(position) => {
                self.input.reset_position(position);
                self.position = position;
            }
            Effect::ResetElapsed => self.session.restart(now_ms),
            Effect::StartClock => self.session.resume_clock(now_ms),
            Effect::Commit(field, seconds) => self.settings.commit(field, seconds),
            Effect::ForceRedraw => self.redraw.force(),
        }
    }

    /// Screen for the current state
    pub fn frame(&self) -> Frame {
        render(&View {
            state: self.state,
            position: self.position,
            settings: &self.settings,
            elapsed_s: self.session.seconds_elapsed(),
            relay_on: self.relay.is_energized(),
            info: InfoText {
                version: self.version,
                author: &self.author,
            },
        })
    }
}
