//! embedded-graphics canvas
//!
//! Maps the timer's drawing primitives onto `embedded-graphics` shapes and
//! mono fonts. Scale 1 text uses a 6x9 font, scale 2 a 9x15 font; text is
//! positioned by its top-left corner.

use darkroom_core::traits::{Color, DisplayAdapter, DisplayError, Point};
use embedded_graphics::mono_font::ascii::{FONT_6X9, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Dimensions, DrawTarget, Point as GfxPoint, Primitive, Size};
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

use crate::flush::FlushTarget;

/// Timer display on an `embedded-graphics` target
pub struct GraphicsCanvas<D> {
    target: D,
    text_color: BinaryColor,
    background: Option<BinaryColor>,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            text_color: BinaryColor::On,
            background: None,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Reject primitives that do not touch the canvas at all
    fn check_visible(&self, area: Rectangle) -> Result<(), DisplayError> {
        if area.intersection(&self.target.bounding_box()).is_zero_sized() {
            Err(DisplayError::OutOfBounds)
        } else {
            Ok(())
        }
    }

    fn draw<T>(&mut self, drawable: &T) -> Result<(), DisplayError>
    where
        T: Drawable<Color = BinaryColor> + Dimensions,
    {
        self.check_visible(drawable.bounding_box())?;
        drawable
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }
}

fn font(scale: u8) -> &'static MonoFont<'static> {
    if scale >= 2 {
        &FONT_9X15
    } else {
        &FONT_6X9
    }
}

fn color(color: Color) -> BinaryColor {
    match color {
        Color::On => BinaryColor::On,
        Color::Off => BinaryColor::Off,
    }
}

fn point(p: Point) -> GfxPoint {
    GfxPoint::new(p.x as i32, p.y as i32)
}

fn rectangle(origin: Point, width: u16, height: u16) -> Rectangle {
    Rectangle::new(point(origin), Size::new(width as u32, height as u32))
}

impl<D> DisplayAdapter for GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor> + FlushTarget,
{
    fn size(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (size.width as u16, size.height as u16)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn set_color(&mut self, foreground: Color, background: Option<Color>) {
        self.text_color = color(foreground);
        self.background = background.map(color);
    }

    fn draw_text(&mut self, text: &str, origin: Point, scale: u8) -> Result<(), DisplayError> {
        // Empty text has no extent and draws nothing
        if text.is_empty() {
            return Ok(());
        }

        let builder = MonoTextStyleBuilder::new()
            .font(font(scale))
            .text_color(self.text_color);
        let style = match self.background {
            Some(background) => builder.background_color(background).build(),
            None => builder.build(),
        };

        self.draw(&Text::with_baseline(text, point(origin), style, Baseline::Top))
    }

    fn text_width(&self, text: &str, scale: u8) -> u16 {
        let font = font(scale);
        let glyphs = text.chars().count() as u32;
        let spacing = glyphs.saturating_sub(1) * font.character_spacing;
        (glyphs * font.character_size.width + spacing) as u16
    }

    fn fill_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        fill: Color,
    ) -> Result<(), DisplayError> {
        let shape = rectangle(origin, width, height);
        self.draw(&shape.into_styled(PrimitiveStyle::with_fill(color(fill))))
    }

    fn draw_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        stroke: Color,
    ) -> Result<(), DisplayError> {
        let shape = rectangle(origin, width, height);
        self.draw(&shape.into_styled(PrimitiveStyle::with_stroke(color(stroke), 1)))
    }

    fn fill_triangle(
        &mut self,
        a: Point,
        b: Point,
        c: Point,
        fill: Color,
    ) -> Result<(), DisplayError> {
        let shape = Triangle::new(point(a), point(b), point(c));
        self.draw(&shape.into_styled(PrimitiveStyle::with_fill(color(fill))))
    }

    fn draw_round_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        radius: u16,
        stroke: Color,
    ) -> Result<(), DisplayError> {
        let radius = Size::new(radius as u32, radius as u32);
        let shape = RoundedRectangle::with_equal_corners(rectangle(origin, width, height), radius);
        self.draw(&shape.into_styled(PrimitiveStyle::with_stroke(color(stroke), 1)))
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: Color) -> Result<(), DisplayError> {
        let shape = Line::new(point(from), point(to));
        self.draw(&shape.into_styled(PrimitiveStyle::with_stroke(color(stroke), 1)))
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.target.flush_frame()
    }
}
