//! Practice item model.
//!
//! A `PracticeItem` is a plain snapshot: the ranking engine reads it and never
//! mutates it. The store owns mutation, including the "practiced today" toggle,
//! which is modelled here as a two-slot history (`last_practice` and
//! `last_last_practice`) with no deeper undo stack.

use super::category::CategoryId;
use crate::ranking::{self, AVG_FREQUENCY};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Name given to items created without one.
pub const NEW_ITEM_NAME: &str = "New Item";

/// Opaque identity of a practice item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Something to practice, e.g. "C Major Scale".
///
/// # Fields
///
/// - `id`: Opaque identity generated by the store
/// - `category_id`: Category this item belongs to
/// - `name`: Display name; `None` sorts as an empty string
/// - `relative_frequency`: Cadence multiplier, clamped to `[0.1, 10.0]` when scored
/// - `last_practice`: Most recent practice instant, `None` if never practiced
/// - `last_last_practice`: Practice instant restored when "practiced today" is undone
/// - `notes`: Free-form user notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeItem {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub name: Option<String>,
    pub relative_frequency: f64,
    pub last_practice: Option<DateTime<Utc>>,
    pub last_last_practice: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl PracticeItem {
    /// Creates a never-practiced item with average frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use practicio::domain::{CategoryId, PracticeItem};
    ///
    /// let item = PracticeItem::new(CategoryId::new(), "Arpeggios");
    /// assert_eq!(item.relative_frequency, 1.0);
    /// assert!(item.last_practice.is_none());
    /// assert!(item.notes.is_none());
    /// ```
    #[must_use]
    pub fn new(category_id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            category_id,
            name: Some(name.into()),
            relative_frequency: AVG_FREQUENCY,
            last_practice: None,
            last_last_practice: None,
            notes: None,
        }
    }

    /// Name shown to the user; `"Unknown"` when the store has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Name used for ordering; a missing name orders as the empty string.
    #[must_use]
    pub fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Whether the item still carries the placeholder name.
    #[must_use]
    pub fn has_placeholder_name(&self) -> bool {
        self.name.as_deref() == Some(NEW_ITEM_NAME)
    }

    /// Whether the last practice falls on the same calendar day as `now`.
    #[must_use]
    pub fn is_practiced_today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        ranking::is_practiced_today(self.last_practice, now)
    }

    /// Records a practice at `now`, shifting the current practice into the
    /// previous slot.
    pub fn mark_practiced<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.last_last_practice = self.last_practice;
        self.last_practice = Some(now.with_timezone(&Utc));
    }

    /// Restores the previous practice instant. The previous slot is emptied,
    /// so a second undo leaves the item as never practiced.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use practicio::domain::{CategoryId, PracticeItem};
    ///
    /// let now = Utc::now();
    /// let earlier = now - Duration::days(3);
    ///
    /// let mut item = PracticeItem::new(CategoryId::new(), "Etude");
    /// item.last_practice = Some(earlier);
    ///
    /// item.mark_practiced(&now);
    /// assert_eq!(item.last_last_practice, Some(earlier));
    ///
    /// item.undo_practice();
    /// assert_eq!(item.last_practice, Some(earlier));
    /// ```
    pub fn undo_practice(&mut self) {
        self.last_practice = self.last_last_practice.take();
    }
}
