//! Dial position clamping

use super::machine::State;
use crate::config::Settings;

/// Position the dial must be moved to, if `raw` is outside the legal range
///
/// Negative readings always reset to zero, even where the lower bound is
/// higher; the next poll then lifts the dial to the lower bound.
pub fn check_position(state: State, settings: &Settings, raw: i32) -> Option<i32> {
    if raw < 0 {
        return Some(0);
    }

    let (lower, upper) = state.position_bounds(settings);
    let clamped = raw.max(lower).min(upper);

    if clamped == raw {
        None
    } else {
        Some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RunMode;
    use proptest::prelude::*;

    fn states() -> impl Strategy<Value = State> {
        prop_oneof![
            Just(State::Start),
            Just(State::ExposureModeMenu),
            Just(State::Manual),
            Just(State::SetTime),
            Just(State::SetTimeConfirm),
            Just(State::Exposing),
            Just(State::ExposureDone),
            Just(State::ConfirmStop {
                resume: RunMode::Manual,
                relay_was_on: false
            }),
            Just(State::ConfirmStop {
                resume: RunMode::Timed,
                relay_was_on: true
            }),
            Just(State::SettingsMenu),
            Just(State::SetDefault),
            Just(State::SetMin),
            Just(State::SetMax),
            Just(State::Info),
        ]
    }

    #[test]
    fn test_in_range_is_untouched() {
        let s = Settings::default();
        assert_eq!(check_position(State::Start, &s, 2), None);
        assert_eq!(check_position(State::SetTime, &s, 1999), None);
        assert_eq!(check_position(State::ExposureDone, &s, 0), None);
    }

    #[test]
    fn test_upper_clamp() {
        let s = Settings::default();
        assert_eq!(check_position(State::Start, &s, 3), Some(2));
        assert_eq!(check_position(State::SetTime, &s, 2000), Some(1999));
        assert_eq!(check_position(State::Manual, &s, 7), Some(1));
        assert_eq!(check_position(State::ExposureDone, &s, 1), Some(0));
    }

    #[test]
    fn test_negative_resets_to_zero() {
        let s = Settings::new(60, 30, 120, 5).unwrap();
        assert_eq!(check_position(State::Start, &s, -1), Some(0));
        // Lower bound is 6 here, reached on the following poll
        assert_eq!(check_position(State::SetTime, &s, -4), Some(0));
        assert_eq!(check_position(State::SetTime, &s, 0), Some(6));
    }

    proptest! {
        #[test]
        fn prop_clamped_position_is_stable(
            state in states(),
            raw in -50i32..5000,
            min in 0u16..200,
            span in 0u16..2000,
            inc in 1u16..30,
        ) {
            let s = Settings::new(min, min, min + span, inc).unwrap();
            let (lower, upper) = state.position_bounds(&s);

            let settled = match check_position(state, &s, raw) {
                Some(p) => check_position(state, &s, p).unwrap_or(p),
                None => raw,
            };

            // Two polls always reach a fixed point
            prop_assert_eq!(check_position(state, &s, settled), None);
            prop_assert!(settled >= 0);
            if lower <= upper {
                prop_assert!(settled >= lower && settled <= upper);
            } else {
                prop_assert_eq!(settled, upper);
            }
        }
    }
}
