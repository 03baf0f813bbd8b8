//! Per-state screen layouts for a 64x48 panel
//!
//! Scale 1 text rows are 8 px apart, scale 2 text is about 15 px high.
//! Icons sit on the bottom row at y = 36.

use core::fmt::Write;

use super::frame::{Frame, Glyph, Label, TextStyle};
use crate::config::Settings;
use crate::state::State;
use crate::traits::Point;

/// Top of the icon row
const ICON_ROW: i16 = 36;
/// Icon cell on the left edge
const LEFT_ICON: Point = Point::new(0, ICON_ROW);
/// Icon cell on the right edge
const RIGHT_ICON: Point = Point::new(52, ICON_ROW);
/// Row pitch of scale 2 menus
const MENU_PITCH: i16 = 17;
/// Row pitch of the settings overview
const SETTINGS_PITCH: i16 = 11;

const START_MENU: [&str; 3] = ["Start", "Setup", "Info"];
const EXPOSURE_MODE_MENU: [&str; 2] = ["Auto", "Man."];
const SETTINGS_ROWS: [&str; 3] = ["Def", "Min", "Max"];

/// Static text of the info screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoText<'a> {
    pub version: &'a str,
    pub author: &'a str,
}

/// Everything a screen shows
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: State,
    pub position: i32,
    pub settings: &'a Settings,
    pub elapsed_s: u32,
    pub relay_on: bool,
    pub info: InfoText<'a>,
}

/// Build the screen for the current state
pub fn render(view: &View) -> Frame {
    let mut frame = Frame::new();
    let position = view.position;
    let settings = view.settings;

    match view.state {
        State::Start => menu(&mut frame, &START_MENU, position),
        State::ExposureModeMenu => {
            menu(&mut frame, &EXPOSURE_MODE_MENU, position);
            frame.icon(Glyph::Back, LEFT_ICON, position == 2);
        }
        State::SettingsMenu => {
            let values = [
                settings.default_time(),
                settings.min_time(),
                settings.max_time(),
            ];
            for (row, (name, value)) in SETTINGS_ROWS.iter().zip(values).enumerate() {
                let mut line = Label::new();
                let _ = write!(line, "{} {}", name, value);
                frame.text(
                    &line,
                    Point::new(0, row as i16 * SETTINGS_PITCH),
                    1,
                    TextStyle::selected_if(position == row as i32),
                );
            }
            frame.icon(Glyph::Back, LEFT_ICON, position == 3);
        }
        State::SetTime | State::SetDefault | State::SetMin | State::SetMax => {
            let title = match view.state {
                State::SetDefault => "Default",
                State::SetMin => "Min",
                State::SetMax => "Max",
                _ => "Time",
            };
            let seconds = view.state.dialed_seconds(settings, position);
            readout(&mut frame, title, seconds as i32, 32);
            frame.icon(Glyph::Back, LEFT_ICON, false);
            frame.icon(Glyph::Play, RIGHT_ICON, false);
        }
        State::SetTimeConfirm => {
            readout(&mut frame, "Time", settings.last_time() as i32, 32);
            frame.icon(Glyph::Back, LEFT_ICON, position == 0);
            frame.icon(Glyph::Play, RIGHT_ICON, position == 1);
        }
        State::Manual => {
            readout(&mut frame, "On since", view.elapsed_s as i32, 33);
            session_controls(&mut frame, view.relay_on, position);
        }
        State::Exposing => {
            let remaining = settings.last_time() as i32 - view.elapsed_s as i32;
            readout(&mut frame, "Time left", remaining, 33);
            session_controls(&mut frame, view.relay_on, position);
        }
        State::ExposureDone => {
            frame.centered("DONE!", 10, 2, TextStyle::Normal);
            frame.centered("OK", 39, 1, TextStyle::Inverted);
        }
        State::ConfirmStop { .. } => {
            frame.centered("Stop?", 10, 2, TextStyle::Normal);
            frame.text("NO", LEFT_ICON, 1, TextStyle::selected_if(position == 0));
            frame.text(
                "YES",
                Point::new(46, ICON_ROW),
                1,
                TextStyle::selected_if(position == 1),
            );
        }
        State::Info => {
            frame.centered("Version:", 0, 1, TextStyle::Normal);
            frame.centered(view.info.version, 8, 1, TextStyle::Normal);
            frame.centered("Author:", 16, 1, TextStyle::Normal);
            frame.centered(view.info.author, 24, 1, TextStyle::Normal);
            let icons = [Glyph::Pause, Glyph::Stop, Glyph::Play, Glyph::Back];
            for (i, glyph) in icons.into_iter().enumerate() {
                let origin = Point::new(i as i16 * 12, ICON_ROW);
                frame.icon(glyph, origin, position == i as i32);
            }
        }
    }

    frame
}

/// Scale 2 text menu, one item per row, selected item inverted
fn menu(frame: &mut Frame, items: &[&str], position: i32) {
    for (i, item) in items.iter().enumerate() {
        frame.text(
            item,
            Point::new(0, i as i16 * MENU_PITCH),
            2,
            TextStyle::selected_if(position == i as i32),
        );
    }
}

/// Title, large number and unit, centered
fn readout(frame: &mut Frame, title: &str, seconds: i32, unit_y: i16) {
    let mut value = Label::new();
    let _ = write!(value, "{}", seconds);
    frame.centered(title, 0, 1, TextStyle::Normal);
    frame.centered(&value, 13, 2, TextStyle::Normal);
    frame.centered("sec", unit_y, 1, TextStyle::Normal);
}

/// Play/pause on the left, stop on the right
fn session_controls(frame: &mut Frame, relay_on: bool, position: i32) {
    let toggle = if relay_on { Glyph::Pause } else { Glyph::Play };
    frame.icon(toggle, LEFT_ICON, position == 0);
    frame.icon(Glyph::Stop, RIGHT_ICON, position == 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RunMode;
    use crate::ui::frame::DrawCommand;

    const INFO: InfoText<'static> = InfoText {
        version: "0.1.0",
        author: "F. S.",
    };

    fn screen(state: State, position: i32, settings: &Settings) -> Frame {
        render(&View {
            state,
            position,
            settings,
            elapsed_s: 0,
            relay_on: false,
            info: INFO,
        })
    }

    #[test]
    fn test_start_menu_highlights_position() {
        let s = Settings::default();
        for (position, item) in START_MENU.iter().enumerate() {
            let frame = screen(State::Start, position as i32, &s);
            assert_eq!(frame.highlighted_text(), Some(*item));
        }
        let frame = screen(State::Start, 1, &s);
        assert_eq!(
            frame.commands()[2],
            DrawCommand::Text {
                text: "Setup".try_into().unwrap(),
                origin: Point::new(0, 17),
                scale: 2,
                style: TextStyle::Inverted,
            }
        );
    }

    #[test]
    fn test_exposure_menu_back_icon() {
        let s = Settings::default();
        let frame = screen(State::ExposureModeMenu, 2, &s);
        assert_eq!(frame.highlighted_text(), None);
        assert_eq!(frame.selected_icon(), Some((Glyph::Back, LEFT_ICON)));

        let frame = screen(State::ExposureModeMenu, 1, &s);
        assert_eq!(frame.highlighted_text(), Some("Man."));
        assert_eq!(frame.selected_icon(), None);
    }

    #[test]
    fn test_set_time_shows_dialed_seconds() {
        let s = Settings::default();
        let frame = screen(State::SetTime, 120, &s);
        assert!(frame.contains_text("Time"));
        assert!(frame.contains_text("600"));
        assert!(frame.contains_text("sec"));
        assert_eq!(frame.selected_icon(), None);
    }

    #[test]
    fn test_settings_editors_have_titles() {
        let s = Settings::default();
        assert!(screen(State::SetDefault, 10, &s).contains_text("Default"));
        assert!(screen(State::SetMin, 10, &s).contains_text("Min"));
        assert!(screen(State::SetMax, 10, &s).contains_text("50"));
    }

    #[test]
    fn test_untouched_editor_shows_exact_value() {
        let s = Settings::default();
        assert!(screen(State::SetMax, 1999, &s).contains_text("9999"));
        assert!(screen(State::SetMax, 1998, &s).contains_text("9990"));
    }

    #[test]
    fn test_settings_menu_lists_values() {
        let s = Settings::default();
        let frame = screen(State::SettingsMenu, 1, &s);
        assert!(frame.contains_text("Def 600"));
        assert!(frame.contains_text("Max 9999"));
        assert_eq!(frame.highlighted_text(), Some("Min 0"));

        let frame = screen(State::SettingsMenu, 3, &s);
        assert_eq!(frame.selected_icon(), Some((Glyph::Back, LEFT_ICON)));
    }

    #[test]
    fn test_confirm_time_selection() {
        let s = Settings::default();
        let frame = screen(State::SetTimeConfirm, 1, &s);
        assert!(frame.contains_text("600"));
        assert_eq!(frame.selected_icon(), Some((Glyph::Play, RIGHT_ICON)));

        let frame = screen(State::SetTimeConfirm, 0, &s);
        assert_eq!(frame.selected_icon(), Some((Glyph::Back, LEFT_ICON)));
    }

    #[test]
    fn test_exposing_shows_time_left() {
        let s = Settings::default();
        let frame = render(&View {
            state: State::Exposing,
            position: 0,
            settings: &s,
            elapsed_s: 42,
            relay_on: true,
            info: INFO,
        });
        assert!(frame.contains_text("Time left"));
        assert!(frame.contains_text("558"));
        assert_eq!(frame.selected_icon(), Some((Glyph::Pause, LEFT_ICON)));
    }

    #[test]
    fn test_manual_paused_shows_play() {
        let s = Settings::default();
        let frame = render(&View {
            state: State::Manual,
            position: 1,
            settings: &s,
            elapsed_s: 7,
            relay_on: false,
            info: INFO,
        });
        assert!(frame.contains_text("On since"));
        assert!(frame.contains_text("7"));
        assert!(frame
            .commands()
            .contains(&DrawCommand::Icon {
                glyph: Glyph::Play,
                origin: LEFT_ICON,
                selected: false
            }));
        assert_eq!(frame.selected_icon(), Some((Glyph::Stop, RIGHT_ICON)));
    }

    #[test]
    fn test_done_and_stop_screens() {
        let s = Settings::default();
        let frame = screen(State::ExposureDone, 0, &s);
        assert!(frame.contains_text("DONE!"));
        assert_eq!(frame.highlighted_text(), Some("OK"));

        let asking = State::ConfirmStop {
            resume: RunMode::Timed,
            relay_was_on: true,
        };
        assert_eq!(screen(asking, 0, &s).highlighted_text(), Some("NO"));
        assert_eq!(screen(asking, 1, &s).highlighted_text(), Some("YES"));
    }

    #[test]
    fn test_info_screen() {
        let s = Settings::default();
        let frame = screen(State::Info, 2, &s);
        assert!(frame.contains_text("0.1.0"));
        assert!(frame.contains_text("F. S."));
        assert_eq!(
            frame.selected_icon(),
            Some((Glyph::Play, Point::new(24, ICON_ROW)))
        );
    }
}
