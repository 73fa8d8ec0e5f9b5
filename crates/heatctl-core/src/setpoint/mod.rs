//! Setpoint adjustment arithmetic.
//!
//! The browser UI shows each numeric setting with two nudge controls.  The
//! rules differ by field kind, and the difference is normative:
//!
//! - **Temperature** fields step by ±0.1 °C and *clamp* at [15, 26].
//!   Repeated increments stop dead at 26.0; decrements stop at 15.0.
//! - **Hour** fields step by ±1 and *wrap* around the 24-hour cycle.
//!   Incrementing 23 yields 0; decrementing 0 yields 23.
//!
//! The increment guard for hours is `< 23` (not `< 24`), which makes 23 the
//! practical ceiling before wraparound.  That off-by-one is part of the
//! observed contract and is preserved exactly.
//!
//! This module is the canonical implementation; the served client script
//! (`static/js/setpoints.js`) mirrors it so the value a user sees in the
//! browser always matches what these functions compute.

use thiserror::Error;

/// Lower clamp bound for temperature setpoints, in °C.
pub const TEMP_MIN: f64 = 15.0;
/// Upper clamp bound for temperature setpoints, in °C.
pub const TEMP_MAX: f64 = 26.0;
/// Temperature step size, in °C.
pub const TEMP_STEP: f64 = 0.1;
/// Highest hour value before an increment wraps to 0.
pub const HOUR_CEILING: i32 = 23;

/// Errors that can occur when applying an adjustment to displayed text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetpointError {
    /// The displayed text could not be parsed as a number.
    #[error("not a numeric setpoint value: '{input}'")]
    NotNumeric { input: String },
}

/// One of the four nudge controls attached to a setpoint field.
///
/// Each variant corresponds to a button label in the UI.  Temperature
/// variants clamp; hour variants wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// `+0.1` — raise a temperature, clamping at [`TEMP_MAX`].
    TempUp,
    /// `-0.1` — lower a temperature, clamping at [`TEMP_MIN`].
    TempDown,
    /// `+1` — advance an hour, wrapping 23 → 0.
    HourUp,
    /// `-1` — rewind an hour, wrapping 0 → 23.
    HourDown,
}

impl Adjustment {
    /// Returns the UI button label for this adjustment.
    pub fn label(self) -> &'static str {
        match self {
            Adjustment::TempUp => "+0.1",
            Adjustment::TempDown => "-0.1",
            Adjustment::HourUp => "+1",
            Adjustment::HourDown => "-1",
        }
    }

    /// Looks up the adjustment for a UI button label.
    ///
    /// Returns `None` for unrecognized labels so a stray element with an
    /// unexpected caption is ignored rather than misinterpreted.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "+0.1" => Some(Adjustment::TempUp),
            "-0.1" => Some(Adjustment::TempDown),
            "+1" => Some(Adjustment::HourUp),
            "-1" => Some(Adjustment::HourDown),
            _ => None,
        }
    }

    /// Applies this adjustment to a parsed numeric value.
    ///
    /// Temperature results are rounded to one decimal place; hour results
    /// stay whole when the input is whole.  Out-of-range inputs follow the
    /// same guards as in-range ones: a temperature already at or above the
    /// upper bound snaps to the bound, and an hour of 23 or more wraps to 0
    /// on increment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heatctl_core::setpoint::Adjustment;
    ///
    /// assert_eq!(Adjustment::TempUp.apply(21.5), 21.6);
    /// assert_eq!(Adjustment::TempUp.apply(26.0), 26.0); // clamp
    /// assert_eq!(Adjustment::HourUp.apply(23.0), 0.0);  // wrap
    /// assert_eq!(Adjustment::HourDown.apply(0.0), 23.0);
    /// ```
    pub fn apply(self, old: f64) -> f64 {
        match self {
            Adjustment::TempUp => {
                if old < TEMP_MAX {
                    round1(old + TEMP_STEP)
                } else {
                    TEMP_MAX
                }
            }
            Adjustment::TempDown => {
                if old > TEMP_MIN {
                    round1(old - TEMP_STEP)
                } else {
                    TEMP_MIN
                }
            }
            Adjustment::HourUp => {
                // Guard is `< 23`, not `< 24`: incrementing from 23 wraps.
                if old < f64::from(HOUR_CEILING) {
                    old + 1.0
                } else {
                    0.0
                }
            }
            Adjustment::HourDown => {
                if old > 0.0 {
                    old - 1.0
                } else {
                    f64::from(HOUR_CEILING)
                }
            }
        }
    }

    /// Applies this adjustment to the text currently displayed in an input
    /// field and returns the text to write back.
    ///
    /// Temperatures render with exactly one decimal digit (`"21.6"`); hours
    /// render the way the number prints naturally (`"6"`, not `"6.0"`).
    ///
    /// # Errors
    ///
    /// Returns [`SetpointError::NotNumeric`] if `displayed` does not parse
    /// as a number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heatctl_core::setpoint::Adjustment;
    ///
    /// assert_eq!(Adjustment::TempDown.apply_to_display("21.5").unwrap(), "21.4");
    /// assert_eq!(Adjustment::HourUp.apply_to_display("6").unwrap(), "7");
    /// assert!(Adjustment::HourUp.apply_to_display("noon").is_err());
    /// ```
    pub fn apply_to_display(self, displayed: &str) -> Result<String, SetpointError> {
        let old: f64 = displayed
            .trim()
            .parse()
            .map_err(|_| SetpointError::NotNumeric {
                input: displayed.to_string(),
            })?;

        let new = self.apply(old);

        Ok(match self {
            Adjustment::TempUp | Adjustment::TempDown => format!("{new:.1}"),
            Adjustment::HourUp | Adjustment::HourDown => format!("{new}"),
        })
    }
}

/// Rounds to one decimal place, half away from zero.
///
/// Needed because repeated binary additions of 0.1 drift (21.5 + 0.1 is not
/// exactly 21.6 in f64); rounding after every step keeps the displayed value
/// on the 0.1 grid.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Labels ────────────────────────────────────────────────────────────────

    #[test]
    fn test_label_round_trips_through_from_label() {
        for adj in [
            Adjustment::TempUp,
            Adjustment::TempDown,
            Adjustment::HourUp,
            Adjustment::HourDown,
        ] {
            assert_eq!(Adjustment::from_label(adj.label()), Some(adj));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown_caption() {
        assert_eq!(Adjustment::from_label("+2"), None);
        assert_eq!(Adjustment::from_label(""), None);
        assert_eq!(Adjustment::from_label("+0.5"), None);
    }

    // ── Temperature: step and clamp ───────────────────────────────────────────

    #[test]
    fn test_temp_up_steps_by_one_tenth() {
        assert_eq!(Adjustment::TempUp.apply(21.5), 21.6);
    }

    #[test]
    fn test_temp_down_steps_by_one_tenth() {
        assert_eq!(Adjustment::TempDown.apply(21.5), 21.4);
    }

    #[test]
    fn test_temp_up_clamps_at_upper_bound() {
        // Boundary scenario from the observed contract: 26 + 0.1 stays 26.
        assert_eq!(Adjustment::TempUp.apply(26.0), 26.0);
    }

    #[test]
    fn test_temp_up_from_just_below_bound_reaches_bound_exactly() {
        assert_eq!(Adjustment::TempUp.apply(25.9), 26.0);
    }

    #[test]
    fn test_temp_down_clamps_at_lower_bound() {
        assert_eq!(Adjustment::TempDown.apply(15.0), 15.0);
    }

    #[test]
    fn test_temp_down_from_just_above_bound_reaches_bound_exactly() {
        assert_eq!(Adjustment::TempDown.apply(15.1), 15.0);
    }

    #[test]
    fn test_temp_up_snaps_out_of_range_value_to_bound() {
        // A hand-edited file can hold 30.0; the guard snaps it back to 26.
        assert_eq!(Adjustment::TempUp.apply(30.0), 26.0);
    }

    #[test]
    fn test_temp_down_snaps_out_of_range_value_to_bound() {
        assert_eq!(Adjustment::TempDown.apply(10.0), 15.0);
    }

    #[test]
    fn test_repeated_temp_up_never_exceeds_max() {
        // Clamp property: walk upward from 25.9 and verify the ceiling holds.
        let mut value = 25.9;
        for _ in 0..50 {
            value = Adjustment::TempUp.apply(value);
            assert!(value <= TEMP_MAX, "exceeded clamp bound: {value}");
        }
        assert_eq!(value, TEMP_MAX);
    }

    #[test]
    fn test_repeated_temp_down_never_goes_below_min() {
        let mut value = 15.1;
        for _ in 0..50 {
            value = Adjustment::TempDown.apply(value);
            assert!(value >= TEMP_MIN, "went below clamp bound: {value}");
        }
        assert_eq!(value, TEMP_MIN);
    }

    #[test]
    fn test_repeated_temp_steps_stay_on_tenth_grid() {
        // Per-step rounding must absorb binary float drift.
        let mut value = 18.0;
        for _ in 0..30 {
            value = Adjustment::TempUp.apply(value);
            let scaled = value * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "value drifted off the 0.1 grid: {value}"
            );
        }
    }

    // ── Hours: step and wrap ──────────────────────────────────────────────────

    #[test]
    fn test_hour_up_steps_by_one() {
        assert_eq!(Adjustment::HourUp.apply(6.0), 7.0);
    }

    #[test]
    fn test_hour_down_steps_by_one() {
        assert_eq!(Adjustment::HourDown.apply(6.0), 5.0);
    }

    #[test]
    fn test_hour_up_wraps_from_23_to_0() {
        // Wrap, not clamp — this is the deliberate asymmetry with temperatures.
        assert_eq!(Adjustment::HourUp.apply(23.0), 0.0);
    }

    #[test]
    fn test_hour_down_wraps_from_0_to_23() {
        assert_eq!(Adjustment::HourDown.apply(0.0), 23.0);
    }

    #[test]
    fn test_hour_up_from_22_reaches_23_before_wrapping() {
        // `< 23` guard: 22 → 23 is still a plain increment.
        assert_eq!(Adjustment::HourUp.apply(22.0), 23.0);
    }

    #[test]
    fn test_hour_up_wraps_out_of_range_value_to_0() {
        // 25 fails the `< 23` guard, so it wraps rather than incrementing.
        assert_eq!(Adjustment::HourUp.apply(25.0), 0.0);
    }

    #[test]
    fn test_hour_cycle_is_24_steps_long() {
        // Wrap property: 24 increments from any hour return to the start.
        let mut value = 9.0;
        for _ in 0..24 {
            value = Adjustment::HourUp.apply(value);
        }
        assert_eq!(value, 9.0);
    }

    #[test]
    fn test_hour_down_cycle_is_24_steps_long() {
        let mut value = 17.0;
        for _ in 0..24 {
            value = Adjustment::HourDown.apply(value);
        }
        assert_eq!(value, 17.0);
    }

    // ── Display-text API ──────────────────────────────────────────────────────

    #[test]
    fn test_display_temp_renders_one_decimal() {
        // Arrange / Act
        let shown = Adjustment::TempUp.apply_to_display("21.5").unwrap();

        // Assert
        assert_eq!(shown, "21.6");
    }

    #[test]
    fn test_display_temp_clamped_value_renders_one_decimal() {
        assert_eq!(Adjustment::TempUp.apply_to_display("26").unwrap(), "26.0");
    }

    #[test]
    fn test_display_hour_renders_without_decimal() {
        assert_eq!(Adjustment::HourUp.apply_to_display("6").unwrap(), "7");
    }

    #[test]
    fn test_display_hour_wrap_renders_zero() {
        assert_eq!(Adjustment::HourUp.apply_to_display("23").unwrap(), "0");
    }

    #[test]
    fn test_display_trims_surrounding_whitespace() {
        assert_eq!(Adjustment::HourDown.apply_to_display(" 6 ").unwrap(), "5");
    }

    #[test]
    fn test_display_non_numeric_input_is_error() {
        let err = Adjustment::TempUp.apply_to_display("warm").unwrap_err();
        assert_eq!(
            err,
            SetpointError::NotNumeric {
                input: "warm".to_string()
            }
        );
    }

    #[test]
    fn test_display_empty_input_is_error() {
        assert!(Adjustment::HourUp.apply_to_display("").is_err());
    }
}
