//! Draw command buffer
//!
//! A [`Frame`] is the complete content of one screen. Building it touches no
//! hardware, so screens can be compared in tests without a panel.

use heapless::{String, Vec};

use super::icons::draw_icon;
use crate::config::MAX_AUTHOR_LEN;
use crate::traits::{Color, DisplayAdapter, DisplayError, Point};

/// Maximum draw commands in one frame
pub const MAX_COMMANDS: usize = 16;

/// Text of a single draw command
pub type Label = String<MAX_AUTHOR_LEN>;

/// Text rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextStyle {
    /// Lit text on a transparent background
    Normal,
    /// Dark text on a lit background (selected item)
    Inverted,
}

impl TextStyle {
    pub fn selected_if(selected: bool) -> Self {
        if selected {
            TextStyle::Inverted
        } else {
            TextStyle::Normal
        }
    }
}

/// Icon shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Play,
    Pause,
    Stop,
    Back,
}

/// A single drawing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Blank the whole canvas
    Clear,
    /// Text with its top-left corner at `origin`
    Text {
        text: Label,
        origin: Point,
        scale: u8,
        style: TextStyle,
    },
    /// Text centered horizontally on the canvas
    CenteredText {
        text: Label,
        y: i16,
        scale: u8,
        style: TextStyle,
    },
    /// Icon cell, boxed when selected
    Icon {
        glyph: Glyph,
        origin: Point,
        selected: bool,
    },
}

impl DrawCommand {
    /// Text carried by this command, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } | DrawCommand::CenteredText { text, .. } => {
                Some(text.as_str())
            }
            _ => None,
        }
    }
}

/// Content of one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    commands: Vec<DrawCommand, MAX_COMMANDS>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create a frame that starts by clearing the canvas
    pub fn new() -> Self {
        let mut commands = Vec::new();
        let _ = commands.push(DrawCommand::Clear);
        Self { commands }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate over all text on the screen, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Check if `text` appears on the screen
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }

    /// Text drawn inverted, i.e. the selected menu item
    pub fn highlighted_text(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text {
                text,
                style: TextStyle::Inverted,
                ..
            }
            | DrawCommand::CenteredText {
                text,
                style: TextStyle::Inverted,
                ..
            } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Icon drawn with a selection box
    pub fn selected_icon(&self) -> Option<(Glyph, Point)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Icon {
                glyph,
                origin,
                selected: true,
            } => Some((*glyph, *origin)),
            _ => None,
        })
    }

    pub fn text(&mut self, text: &str, origin: Point, scale: u8, style: TextStyle) {
        self.push(DrawCommand::Text {
            text: label(text),
            origin,
            scale,
            style,
        });
    }

    pub fn centered(&mut self, text: &str, y: i16, scale: u8, style: TextStyle) {
        self.push(DrawCommand::CenteredText {
            text: label(text),
            y,
            scale,
            style,
        });
    }

    pub fn icon(&mut self, glyph: Glyph, origin: Point, selected: bool) {
        self.push(DrawCommand::Icon {
            glyph,
            origin,
            selected,
        });
    }

    fn push(&mut self, command: DrawCommand) {
        // Every screen layout stays below the capacity
        let _ = self.commands.push(command);
    }

    /// Replay the frame on `display`, then flush it once
    pub fn draw<D: DisplayAdapter + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        for command in &self.commands {
            match command {
                DrawCommand::Clear => display.clear()?,
                DrawCommand::Text {
                    text,
                    origin,
                    scale,
                    style,
                } => {
                    apply_style(display, *style);
                    display.draw_text(text, *origin, *scale)?;
                }
                DrawCommand::CenteredText {
                    text,
                    y,
                    scale,
                    style,
                } => {
                    let (width, _) = display.size();
                    let text_width = display.text_width(text, *scale);
                    let x = (width / 2) as i16 - (text_width / 2) as i16;
                    apply_style(display, *style);
                    display.draw_text(text, Point::new(x, *y), *scale)?;
                }
                DrawCommand::Icon {
                    glyph,
                    origin,
                    selected,
                } => draw_icon(display, *glyph, *origin, *selected)?,
            }
        }

        display.flush()
    }
}

fn apply_style<D: DisplayAdapter + ?Sized>(display: &mut D, style: TextStyle) {
    match style {
        TextStyle::Normal => display.set_color(Color::On, None),
        TextStyle::Inverted => display.set_color(Color::Off, Some(Color::On)),
    }
}

/// Truncate `text` to the label capacity
fn label(text: &str) -> Label {
    let mut label = Label::new();
    for c in text.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}
