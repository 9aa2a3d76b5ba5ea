//! Urgency score calculation.
//!
//! ```text
//! score = age_days / clamp(relative_frequency, 0.1, 10.0)
//! ```
//!
//! Higher scores are more overdue. A small relative frequency inflates the score
//! for a given age, so the item comes up more often; a large one deflates it.

use super::age::compute_age;
use super::{AVG_FREQUENCY, MAX_FREQUENCY, MIN_FREQUENCY};
use crate::domain::PracticeItem;
use chrono::{DateTime, TimeZone};

/// Clamps a relative frequency into `[MIN_FREQUENCY, MAX_FREQUENCY]`.
///
/// Out-of-range values are silently clamped. `NaN` is treated as the average
/// frequency.
///
/// # Examples
///
/// ```
/// use practicio::ranking::clamp_frequency;
///
/// assert_eq!(clamp_frequency(0.0), 0.1);
/// assert_eq!(clamp_frequency(42.0), 10.0);
/// assert_eq!(clamp_frequency(2.5), 2.5);
/// ```
#[must_use]
pub fn clamp_frequency(frequency: f64) -> f64 {
    if frequency.is_nan() {
        return AVG_FREQUENCY;
    }
    frequency.clamp(MIN_FREQUENCY, MAX_FREQUENCY)
}

/// Calculates the urgency score of an item at `now`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use practicio::domain::{CategoryId, PracticeItem};
/// use practicio::ranking::compute_score;
///
/// let now = Utc::now();
/// let mut item = PracticeItem::new(CategoryId::new(), "Scales");
/// item.last_practice = Some(now - Duration::days(4));
/// item.relative_frequency = 2.0;
///
/// assert_eq!(compute_score(&item, &now), 2.0);
/// ```
#[must_use]
pub fn compute_score<Tz: TimeZone>(item: &PracticeItem, now: &DateTime<Tz>) -> f64 {
    let frequency = clamp_frequency(item.relative_frequency);
    let age = compute_age(item.last_practice, now);

    #[allow(clippy::cast_precision_loss)]
    let age = age as f64;

    age / frequency
}
