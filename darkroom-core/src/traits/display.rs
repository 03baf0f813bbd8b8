//! Display adapter trait
//!
//! Pixel-level drawing primitives for a small monochrome panel. All
//! coordinates are in pixels with the origin at the top-left corner.

/// Errors that can occur while drawing or flushing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
    /// A primitive could not be placed on the canvas
    OutOfBounds,
}

/// Pixel color of a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Lit pixel
    On,
    /// Dark pixel
    Off,
}

/// Pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Trait for drawing on the panel
///
/// Drawing happens in an off-screen buffer; nothing is visible until
/// [`DisplayAdapter::flush`] is called.
pub trait DisplayAdapter {
    /// Canvas size as (width, height)
    fn size(&self) -> (u16, u16);

    /// Clear the buffer to [`Color::Off`]
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Set the text colors
    ///
    /// `background` None draws glyphs transparently.
    fn set_color(&mut self, foreground: Color, background: Option<Color>);

    /// Draw text with its top-left corner at `origin`
    ///
    /// `scale` 1 is the small font, 2 the large one.
    fn draw_text(&mut self, text: &str, origin: Point, scale: u8) -> Result<(), DisplayError>;

    /// Width in pixels `text` occupies at `scale`
    fn text_width(&self, text: &str, scale: u8) -> u16;

    fn fill_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError>;

    fn draw_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError>;

    fn fill_triangle(
        &mut self,
        a: Point,
        b: Point,
        c: Point,
        color: Color,
    ) -> Result<(), DisplayError>;

    fn draw_round_rect(
        &mut self,
        origin: Point,
        width: u16,
        height: u16,
        radius: u16,
        color: Color,
    ) -> Result<(), DisplayError>;

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), DisplayError>;

    /// Push the buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
