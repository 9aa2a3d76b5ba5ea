//! Population-relative color tiers.
//!
//! Thresholds are derived from the score distribution of the items being shown
//! together (usually one category), so "high" always means urgent relative to
//! the rest of the list:
//!
//! ```text
//! medium = (3 × mean + max) / 4
//! high   = (mean + 2 × max) / 3
//! ```
//!
//! The two thresholds are not forced into order.

use super::age::is_practiced_today;
use super::score::compute_score;
use crate::domain::PracticeItem;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Coarse urgency classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Default styling: not notably overdue, or already practiced today.
    #[default]
    Neutral,
    Medium,
    High,
}

/// Score thresholds above which items are classified medium and high.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierThresholds {
    pub medium: f64,
    pub high: f64,
}

impl TierThresholds {
    /// Classifies a raw score. Comparisons are strict: a score equal to a
    /// threshold stays in the lower tier.
    #[must_use]
    pub fn tier_for_score(&self, score: f64) -> Tier {
        if score > self.high {
            Tier::High
        } else if score > self.medium {
            Tier::Medium
        } else {
            Tier::Neutral
        }
    }
}

/// Computes medium and high thresholds from the scores of `items`.
///
/// - No items: `(0.0, 0.0)`
/// - One item: both thresholds equal its score
/// - Otherwise the mean/max formulas from the module documentation
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use practicio::domain::{CategoryId, PracticeItem};
/// use practicio::ranking::compute_tier_thresholds;
///
/// let now = Utc::now();
/// let category = CategoryId::new();
/// let mut stale = PracticeItem::new(category, "stale");
/// stale.last_practice = Some(now - Duration::days(8));
/// let mut fresh = PracticeItem::new(category, "fresh");
/// fresh.last_practice = Some(now - Duration::days(1));
///
/// let thresholds = compute_tier_thresholds(&[stale, fresh], &now);
/// assert!((thresholds.medium - 5.375).abs() < 1e-9);
/// assert!((thresholds.high - 20.5 / 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_tier_thresholds<Tz: TimeZone>(items: &[PracticeItem], now: &DateTime<Tz>) -> TierThresholds {
    let scores: Vec<f64> = items.iter().map(|item| compute_score(item, now)).collect();

    match scores.as_slice() {
        [] => TierThresholds::default(),
        [only] => TierThresholds {
            medium: *only,
            high: *only,
        },
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            TierThresholds {
                medium: (3.0 * mean + max) / 4.0,
                high: (mean + 2.0 * max) / 3.0,
            }
        }
    }
}

/// Classifies an item against precomputed thresholds.
///
/// Items practiced today are always [`Tier::Neutral`], whatever their score.
#[must_use]
pub fn classify_tier<Tz: TimeZone>(item: &PracticeItem, thresholds: &TierThresholds, now: &DateTime<Tz>) -> Tier {
    if is_practiced_today(item.last_practice, now) {
        return Tier::Neutral;
    }
    thresholds.tier_for_score(compute_score(item, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryId;
    use chrono::{Duration, Utc};

    fn practiced(days_ago: i64, frequency: f64, now: &DateTime<Utc>) -> PracticeItem {
        let mut item = PracticeItem::new(CategoryId::new(), format!("{days_ago} days"));
        item.relative_frequency = frequency;
        item.last_practice = Some(*now - Duration::days(days_ago));
        item
    }

    #[test]
    fn test_empty_population() {
        let now = Utc::now();
        assert_eq!(compute_tier_thresholds(&[], &now), TierThresholds { medium: 0.0, high: 0.0 });
    }

    #[test]
    fn test_single_item_population() {
        let now = Utc::now();
        let item = practiced(4, 0.5, &now);
        let thresholds = compute_tier_thresholds(std::slice::from_ref(&item), &now);

        assert!((thresholds.medium - 8.0).abs() < 1e-9);
        assert!((thresholds.high - 8.0).abs() < 1e-9);
        assert_eq!(classify_tier(&item, &thresholds, &now), Tier::Neutral);
    }

    #[test]
    fn test_classification_against_population() {
        let now = Utc::now();
        let items = vec![
            practiced(8, 1.0, &now),
            practiced(6, 1.0, &now),
            practiced(1, 1.0, &now),
        ];
        // mean 5, max 8: medium 5.75, high 7.0
        let thresholds = compute_tier_thresholds(&items, &now);

        let tiers: Vec<Tier> = items
            .iter()
            .map(|item| classify_tier(item, &thresholds, &now))
            .collect();
        assert_eq!(tiers, vec![Tier::High, Tier::Medium, Tier::Neutral]);
    }

    #[test]
    fn test_practiced_today_is_always_neutral() {
        let now = Utc::now();
        let today = practiced(0, 0.1, &now);
        let thresholds = TierThresholds {
            medium: -10.0,
            high: -5.0,
        };

        assert_eq!(thresholds.tier_for_score(compute_score(&today, &now)), Tier::High);
        assert_eq!(classify_tier(&today, &thresholds, &now), Tier::Neutral);
    }

    #[test]
    fn test_thresholds_are_not_reordered() {
        let thresholds = TierThresholds {
            medium: 6.0,
            high: 5.0,
        };
        assert_eq!(thresholds.tier_for_score(5.5), Tier::High);
        assert_eq!(thresholds.tier_for_score(5.0), Tier::Neutral);
    }
}
