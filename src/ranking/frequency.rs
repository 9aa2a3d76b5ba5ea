//! Relative frequency presentation: slider mapping and displayed practice rate.
//!
//! The frequency control is a slider over `[0.0, 1.0]` covering relative
//! frequencies `[0.1, 10.0]`, centred on `1.0` at position `0.5`. The mapping is
//! two-piece and nonlinear so that the quarter tick marks land close to the
//! "2x" and "0.5x" practice rates. Moving the slider right lowers the relative
//! frequency, which raises the score, so the item is practiced more often.
//!
//! The two directions are inverses only up to floating point error.

use super::score::clamp_frequency;
use super::{AVG_FREQUENCY, MAX_FREQUENCY, MIN_FREQUENCY};
use std::cmp::Ordering;

/// Slider centre, corresponding to [`AVG_FREQUENCY`].
const SLIDER_CENTER: f64 = 0.5;

/// Curve exponent for relative frequencies below average.
const LOW_EXPONENT: f64 = 1.07;

/// Curve exponent for relative frequencies above average.
const HIGH_EXPONENT: f64 = 3.5;

/// Maps a relative frequency in `[0.1, 10.0]` to a slider position in `[0.0, 1.0]`.
///
/// Values outside the frequency range are clamped first.
///
/// # Examples
///
/// ```
/// use practicio::ranking::slider_from_frequency;
///
/// assert_eq!(slider_from_frequency(1.0), 0.5);
/// assert_eq!(slider_from_frequency(0.1), 1.0);
/// assert_eq!(slider_from_frequency(10.0), 0.0);
/// ```
#[must_use]
pub fn slider_from_frequency(frequency: f64) -> f64 {
    let frequency = clamp_frequency(frequency);

    match frequency.partial_cmp(&AVG_FREQUENCY) {
        Some(Ordering::Less) => {
            let fraction = (frequency - MIN_FREQUENCY) / (AVG_FREQUENCY - MIN_FREQUENCY);
            1.0 - fraction.powf(1.0 / LOW_EXPONENT) * SLIDER_CENTER
        }
        Some(Ordering::Greater) => {
            let fraction = (frequency - AVG_FREQUENCY) / (MAX_FREQUENCY - AVG_FREQUENCY);
            SLIDER_CENTER - fraction.powf(1.0 / HIGH_EXPONENT) * SLIDER_CENTER
        }
        _ => SLIDER_CENTER,
    }
}

/// Maps a slider position in `[0.0, 1.0]` to a relative frequency in `[0.1, 10.0]`.
///
/// Positions outside the slider range are clamped first; `NaN` maps to the centre.
///
/// # Examples
///
/// ```
/// use practicio::ranking::frequency_from_slider;
///
/// assert_eq!(frequency_from_slider(0.5), 1.0);
/// assert_eq!(frequency_from_slider(1.0), 0.1);
/// assert_eq!(frequency_from_slider(0.0), 10.0);
/// ```
#[must_use]
pub fn frequency_from_slider(slider: f64) -> f64 {
    let slider = if slider.is_nan() {
        SLIDER_CENTER
    } else {
        slider.clamp(0.0, 1.0)
    };
    let inverted = 1.0 - slider;

    match inverted.partial_cmp(&SLIDER_CENTER) {
        Some(Ordering::Less) => {
            MIN_FREQUENCY
                + (inverted / SLIDER_CENTER).powf(LOW_EXPONENT) * (AVG_FREQUENCY - MIN_FREQUENCY)
        }
        Some(Ordering::Greater) => {
            AVG_FREQUENCY
                + ((inverted - SLIDER_CENTER) / SLIDER_CENTER).powf(HIGH_EXPONENT)
                    * (MAX_FREQUENCY - AVG_FREQUENCY)
        }
        _ => AVG_FREQUENCY,
    }
}

/// Practice rate shown to the user, rounded to one decimal.
///
/// The rate is the reciprocal of the relative frequency: an item scored with
/// frequency `0.5` comes up twice as often, so it displays as `2.0`.
///
/// # Examples
///
/// ```
/// use practicio::ranking::display_frequency;
///
/// assert_eq!(display_frequency(0.5), 2.0);
/// assert_eq!(display_frequency(4.0), 0.3);
/// ```
#[must_use]
pub fn display_frequency(relative_frequency: f64) -> f64 {
    let rate = 1.0 / clamp_frequency(relative_frequency);
    (10.0 * rate).round() / 10.0
}

/// Formats the displayed practice rate, e.g. `"2.0x (more often)"`.
///
/// Rates above `1.1` are annotated "(more often)", rates below `0.9`
/// "(less often)"; rates in between carry no annotation.
#[must_use]
pub fn frequency_label(relative_frequency: f64) -> String {
    let rate = display_frequency(relative_frequency);

    if rate > 1.1 {
        format!("{rate:.1}x (more often)")
    } else if rate < 0.9 {
        format!("{rate:.1}x (less often)")
    } else {
        format!("{rate:.1}x")
    }
}
