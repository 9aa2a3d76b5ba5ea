//! Sort policies for practice item lists.
//!
//! All policies use a stable sort, so items that compare equal keep their input
//! order. Sorting is a pure recomputation: callers re-sort whenever item data,
//! the current time, or the selected policy changes.

use super::score::compute_score;
use crate::domain::{PracticeItem, PracticioError};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// User-selectable ordering of a practice item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Ascending by name; a missing name sorts as the empty string.
    Alphabetical,
    /// Ascending by last practice; never-practiced items come first.
    LastPracticed,
    /// Ascending by raw (unclamped) relative frequency.
    Frequency,
    /// Descending by urgency score.
    #[default]
    Score,
}

impl SortPolicy {
    /// Every policy, in menu order.
    pub const ALL: [Self; 4] = [Self::Alphabetical, Self::LastPracticed, Self::Frequency, Self::Score];

    /// Identifier used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::LastPracticed => "last_practiced",
            Self::Frequency => "frequency",
            Self::Score => "score",
        }
    }

    /// Menu label for the policy.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alphabetical => "Sort Alphabetically",
            Self::LastPracticed => "Sort by Last Practiced",
            Self::Frequency => "Sort by Frequency",
            Self::Score => "Sort by Ranking",
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortPolicy {
    type Err = PracticioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PracticioError::Config(format!("unknown sort policy: {s}")))
    }
}

/// Returns `items` ordered by `policy`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use practicio::domain::{CategoryId, PracticeItem};
/// use practicio::ranking::{sort_items, SortPolicy};
///
/// let category = CategoryId::new();
/// let items = vec![
///     PracticeItem::new(category, "Banana"),
///     PracticeItem::new(category, "Apple"),
/// ];
///
/// let sorted = sort_items(&items, SortPolicy::Alphabetical, &Utc::now());
/// let names: Vec<&str> = sorted.iter().map(PracticeItem::display_name).collect();
/// assert_eq!(names, ["Apple", "Banana"]);
/// ```
#[must_use]
pub fn sort_items<Tz: TimeZone>(items: &[PracticeItem], policy: SortPolicy, now: &DateTime<Tz>) -> Vec<PracticeItem> {
    let _span = tracing::trace_span!("sort_items", policy = %policy, count = items.len()).entered();

    let mut sorted = items.to_vec();
    match policy {
        SortPolicy::Alphabetical => {
            sorted.sort_by(|a, b| a.sort_name().cmp(b.sort_name()));
        }
        SortPolicy::LastPracticed => {
            // `None` orders before any `Some`, i.e. never practiced sorts first.
            sorted.sort_by_key(|item| item.last_practice);
        }
        SortPolicy::Frequency => {
            sorted.sort_by(|a, b| {
                a.relative_frequency
                    .partial_cmp(&b.relative_frequency)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortPolicy::Score => {
            let mut scored: Vec<(f64, PracticeItem)> = sorted
                .into_iter()
                .map(|item| (compute_score(&item, now), item))
                .collect();
            scored.sort_by(|(score_a, _), (score_b, _)| {
                score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal)
            });
            sorted = scored.into_iter().map(|(_, item)| item).collect();
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryId;
    use chrono::{Duration, Utc};

    fn named(name: Option<&str>) -> PracticeItem {
        let mut item = PracticeItem::new(CategoryId::new(), "");
        item.name = name.map(String::from);
        item
    }

    fn names(items: &[PracticeItem]) -> Vec<&str> {
        items.iter().map(PracticeItem::sort_name).collect()
    }

    #[test]
    fn test_alphabetical_puts_missing_names_first() {
        let items = vec![named(Some("Scales")), named(None), named(Some("Etudes"))];
        let sorted = sort_items(&items, SortPolicy::Alphabetical, &Utc::now());
        assert_eq!(names(&sorted), ["", "Etudes", "Scales"]);
    }

    #[test]
    fn test_last_practiced_puts_never_practiced_first() {
        let now = Utc::now();
        let mut recent = named(Some("recent"));
        recent.last_practice = Some(now - Duration::days(1));
        let mut old = named(Some("old"));
        old.last_practice = Some(now - Duration::days(10));
        let never = named(Some("never"));

        let sorted = sort_items(&[recent, old, never], SortPolicy::LastPracticed, &now);
        assert_eq!(names(&sorted), ["never", "old", "recent"]);
    }

    #[test]
    fn test_frequency_uses_raw_values() {
        let mut above = named(Some("above range"));
        above.relative_frequency = 50.0;
        let mut top = named(Some("top of range"));
        top.relative_frequency = 10.0;
        let mut below = named(Some("below range"));
        below.relative_frequency = 0.01;

        let sorted = sort_items(&[above, top, below], SortPolicy::Frequency, &Utc::now());
        assert_eq!(names(&sorted), ["below range", "top of range", "above range"]);
    }

    #[test]
    fn test_score_is_descending_and_stable() {
        let now = Utc::now();
        let mut first_tie = named(Some("first tie"));
        first_tie.last_practice = Some(now - Duration::days(2));
        let mut urgent = named(Some("urgent"));
        urgent.last_practice = Some(now - Duration::days(2));
        urgent.relative_frequency = 0.5;
        let mut second_tie = named(Some("second tie"));
        second_tie.last_practice = Some(now - Duration::days(2));

        let sorted = sort_items(&[first_tie, urgent, second_tie], SortPolicy::Score, &now);
        assert_eq!(names(&sorted), ["urgent", "first tie", "second tie"]);
    }

    #[test]
    fn test_policy_parsing() {
        for policy in SortPolicy::ALL {
            assert_eq!(policy.as_str().parse::<SortPolicy>().ok(), Some(policy));
        }
        assert_eq!(" Score ".parse::<SortPolicy>().ok(), Some(SortPolicy::Score));
        assert!("random".parse::<SortPolicy>().is_err());
        assert_eq!(SortPolicy::default(), SortPolicy::Score);
    }
}
