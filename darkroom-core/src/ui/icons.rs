//! Icon glyphs
//!
//! Each glyph fits a 12x12 cell. The selection box uses the full cell; the
//! glyph itself stays inside the inner 8x8 area.

use super::frame::Glyph;
use crate::traits::{Color, DisplayAdapter, DisplayError, Point};

/// Edge length of an icon cell
pub const ICON_SIZE: u16 = 12;

/// Draw `glyph` with the top-left corner of its cell at `origin`
pub fn draw_icon<D: DisplayAdapter + ?Sized>(
    display: &mut D,
    glyph: Glyph,
    origin: Point,
    selected: bool,
) -> Result<(), DisplayError> {
    match glyph {
        Glyph::Stop => draw_stop(display, origin)?,
        Glyph::Pause => {
            draw_stop(display, origin)?;
            display.fill_rect(origin.offset(5, 2), 2, 8, Color::Off)?;
        }
        Glyph::Play => display.fill_triangle(
            origin.offset(2, 2),
            origin.offset(2, 9),
            origin.offset(9, 5),
            Color::On,
        )?,
        Glyph::Back => {
            display.draw_round_rect(origin.offset(2, 2), 9, 6, 3, Color::On)?;
            // Cut the upper left corner open, then add the arrow head
            display.fill_rect(origin.offset(2, 2), 4, 4, Color::Off)?;
            display.fill_triangle(
                origin.offset(1, 7),
                origin.offset(3, 9),
                origin.offset(3, 5),
                Color::On,
            )?;
        }
    }

    if selected {
        draw_selection(display, origin)?;
    }

    Ok(())
}

fn draw_stop<D: DisplayAdapter + ?Sized>(display: &mut D, origin: Point) -> Result<(), DisplayError> {
    display.fill_rect(origin.offset(2, 2), 8, 8, Color::On)
}

/// Frame around the cell with a gap in the middle of both vertical sides
fn draw_selection<D: DisplayAdapter + ?Sized>(
    display: &mut D,
    origin: Point,
) -> Result<(), DisplayError> {
    let last = ICON_SIZE as i16 - 1;
    display.draw_rect(origin, ICON_SIZE, ICON_SIZE, Color::On)?;
    display.draw_line(origin.offset(0, 2), origin.offset(0, 9), Color::Off)?;
    display.draw_line(origin.offset(last, 2), origin.offset(last, 9), Color::Off)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::recorder::{Call, Recorder};

    fn drawn(glyph: Glyph, selected: bool) -> Vec<Call> {
        let mut display = Recorder::new();
        draw_icon(&mut display, glyph, Point::new(52, 36), selected).unwrap();
        display.calls
    }

    #[test]
    fn test_stop_is_filled_square() {
        assert_eq!(
            drawn(Glyph::Stop, false),
            vec![Call::FillRect(Point::new(54, 38), 8, 8, Color::On)]
        );
    }

    #[test]
    fn test_pause_cuts_stop_in_half() {
        assert_eq!(
            drawn(Glyph::Pause, false),
            vec![
                Call::FillRect(Point::new(54, 38), 8, 8, Color::On),
                Call::FillRect(Point::new(57, 38), 2, 8, Color::Off),
            ]
        );
    }

    #[test]
    fn test_play_triangle() {
        assert_eq!(
            drawn(Glyph::Play, false),
            vec![Call::Triangle(
                Point::new(54, 38),
                Point::new(54, 45),
                Point::new(61, 41),
                Color::On
            )]
        );
    }

    #[test]
    fn test_back_arrow() {
        let calls = drawn(Glyph::Back, false);
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[0],
            Call::RoundRect(Point::new(54, 38), 9, 6, 3, Color::On)
        );
        assert_eq!(calls[1], Call::FillRect(Point::new(54, 38), 4, 4, Color::Off));
    }

    #[test]
    fn test_selection_box_has_side_gaps() {
        let calls = drawn(Glyph::Stop, true);
        assert_eq!(
            &calls[1..],
            &[
                Call::DrawRect(Point::new(52, 36), 12, 12, Color::On),
                Call::Line(Point::new(52, 38), Point::new(52, 45), Color::Off),
                Call::Line(Point::new(63, 38), Point::new(63, 45), Color::Off),
            ]
        );
    }
}
