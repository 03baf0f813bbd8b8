//! Recording display for tests

use crate::traits::{Color, DisplayAdapter, DisplayError, Point};

/// Glyph width of the recorder's fixed font
pub const GLYPH_WIDTH: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clear,
    Color(Color, Option<Color>),
    Text(String, Point, u8),
    FillRect(Point, u16, u16, Color),
    DrawRect(Point, u16, u16, Color),
    Triangle(Point, Point, Point, Color),
    RoundRect(Point, u16, u16, u16, Color),
    Line(Point, Point, Color),
    Flush,
}

/// Display that records every call instead of drawing
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub fail_text: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayAdapter for Recorder {
    fn size(&self) -> (u16, u16) {
        (64, 48)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn set_color(&mut self, foreground: Color, background: Option<Color>) {
        self.calls.push(Call::Color(foreground, background));
    }

    fn draw_text(&mut self, text: &str, origin: Point, scale: u8) -> Result<(), DisplayError> {
        if self.fail_text {
            return Err(DisplayError::OutOfBounds);
        }
        self.calls.push(Call::Text(text.into(), origin, scale));
        Ok(())
    }

    fn text_width(&self, text: &str, scale: u8) -> u16 {
        text.len() as u16 * GLYPH_WIDTH * scale as u16
    }

    fn fill_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.calls.push(Call::FillRect(origin, width, height, color));
        Ok(())
    }

    fn draw_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.calls.push(Call::DrawRect(origin, width, height, color));
        Ok(())
    }

    fn fill_triangle(
        &mut self,
        a: Point,
        b: Point,
        c: Point,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.calls.push(Call::Triangle(a, b, c, color));
        Ok(())
    }

    fn draw_round_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        radius: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        self.calls
            .push(Call::RoundRect(origin, width, height, radius, color));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError> {
        self.calls.push(Call::Line(from, to, color));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.calls.push(Call::Flush);
        Ok(())
    }
}
