//! Practice category model.
//!
//! A category only groups items; membership is recorded on each item through
//! [`PracticeItem::category_id`](super::PracticeItem::category_id). Tier
//! thresholds are computed over the items of one category.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Name given to categories created without one.
pub const NEW_CATEGORY_NAME: &str = "New Category";

/// Opaque identity of a practice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named group of practice items, e.g. "Exercises" or "Repertoire".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeCategory {
    pub id: CategoryId,
    pub name: Option<String>,
}

impl PracticeCategory {
    /// Creates a category with a fresh identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use practicio::domain::PracticeCategory;
    ///
    /// let category = PracticeCategory::new("Exercises");
    /// assert_eq!(category.display_name(), "Exercises");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: Some(name.into()),
        }
    }

    /// Name shown to the user; `"Unknown"` when the store has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Whether the category still carries the placeholder name.
    #[must_use]
    pub fn has_placeholder_name(&self) -> bool {
        self.name.as_deref() == Some(NEW_CATEGORY_NAME)
    }
}

impl Default for PracticeCategory {
    fn default() -> Self {
        Self::new(NEW_CATEGORY_NAME)
    }
}
