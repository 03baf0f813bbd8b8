//! Hand-written collaborators for controller scenarios

#![allow(dead_code)]

use darkroom_core::config::TimerConfig;
use darkroom_core::traits::{Color, DisplayAdapter, DisplayError, Point, RelayOutput, RotaryInput};
use darkroom_core::{Controller, TickReport};

/// Encoder whose position and button are set by the test
#[derive(Debug, Default)]
pub struct MockInput {
    pub position: i32,
    pub pressed: bool,
    pub resets: Vec<i32>,
}

impl RotaryInput for MockInput {
    fn position(&mut self) -> i32 {
        self.position
    }

    fn reset_position(&mut self, position: i32) {
        self.position = position;
        self.resets.push(position);
    }

    fn poll_button_edge(&mut self) -> bool {
        core::mem::take(&mut self.pressed)
    }
}

#[derive(Debug, Default)]
pub struct MockRelay {
    pub on: bool,
    pub writes: usize,
}

impl RelayOutput for MockRelay {
    fn set_relay(&mut self, on: bool) {
        self.on = on;
        self.writes += 1;
    }

    fn is_energized(&self) -> bool {
        self.on
    }
}

/// Display keeping the text of the last flushed screen
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub flushes: usize,
    pub fail_flush: bool,
    inverted: bool,
    drawing: Vec<(String, bool)>,
    pub shown: Vec<(String, bool)>,
}

impl MockDisplay {
    pub fn shows(&self, text: &str) -> bool {
        self.shown.iter().any(|(t, _)| t == text)
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.shown
            .iter()
            .find(|(_, inverted)| *inverted)
            .map(|(t, _)| t.as_str())
    }
}

impl DisplayAdapter for MockDisplay {
    fn size(&self) -> (u16, u16) {
        (64, 48)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.drawing.clear();
        Ok(())
    }

    fn set_color(&mut self, _foreground: Color, background: Option<Color>) {
        self.inverted = background == Some(Color::On);
    }

    fn draw_text(&mut self, text: &str, _origin: Point, _scale: u8) -> Result<(), DisplayError> {
        self.drawing.push((text.to_string(), self.inverted));
        Ok(())
    }

    fn text_width(&self, text: &str, scale: u8) -> u16 {
        text.len() as u16 * 6 * scale as u16
    }

    fn fill_rect(&mut self, _: Point, _: u16, _: u16, _: Color) -> Result<(), DisplayError> {
        Ok(())
    }

    fn draw_rect(&mut self, _: Point, _: u16, _: u16, _: Color) -> Result<(), DisplayError> {
        Ok(())
    }

    fn fill_triangle(&mut self, _: Point, _: Point, _: Point, _: Color) -> Result<(), DisplayError> {
        Ok(())
    }

    fn draw_round_rect(
        &mut self,
        _: Point,
        _: u16,
        _: u16,
        _: u16,
        _: Color,
    ) -> Result<(), DisplayError> {
        Ok(())
    }

    fn draw_line(&mut self, _: Point, _: Point, _: Color) -> Result<(), DisplayError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Communication);
        }
        self.flushes += 1;
        self.shown = core::mem::take(&mut self.drawing);
        Ok(())
    }
}

/// Controller wired to mocks with a simulated clock
pub struct Bench {
    pub timer: Controller<MockInput, MockRelay>,
    pub display: MockDisplay,
    pub now: u32,
}

impl Bench {
    pub fn new() -> Self {
        Self::with_config(&TimerConfig::default())
    }

    pub fn with_config(config: &TimerConfig) -> Self {
        let mut bench = Self {
            timer: Controller::new(MockInput::default(), MockRelay::default(), config, "1.0.0"),
            display: MockDisplay::default(),
            now: 1_000,
        };
        bench.step(0);
        bench
    }

    /// Advance the clock by `ms` and run one tick
    pub fn step(&mut self, ms: u32) -> TickReport {
        self.now += ms;
        self.timer
            .tick(self.now, &mut self.display)
            .expect("display error")
    }

    pub fn turn_to(&mut self, position: i32) -> TickReport {
        self.timer.input_mut().position = position;
        self.step(2)
    }

    pub fn press(&mut self) -> TickReport {
        self.timer.input_mut().pressed = true;
        self.step(2)
    }

    /// Select `position` and press
    pub fn activate(&mut self, position: i32) -> TickReport {
        self.turn_to(position);
        self.press()
    }

    /// Let the redraw interval pass
    pub fn settle(&mut self) -> TickReport {
        self.step(400)
    }
}
