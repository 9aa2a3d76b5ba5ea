//! View model types representing presentable application state.
//!
//! View models are created by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by whatever front end embeds the crate. They contain no
//! business logic, only display-ready data: ordering, tiers and labels are
//! already resolved by the ranking engine.

use crate::domain::{CategoryId, ItemId};
use crate::ranking::{SortPolicy, Tier, TierThresholds};

/// Hint shown when there are no categories yet.
pub const NO_CATEGORIES_HINT: &str = "Add your first category (examples: Exercises, New Pieces, Repertoire, etc.)";

/// Hint shown while a category still has its placeholder name.
pub const UNNAMED_CATEGORY_HINT: &str =
    "Set the name for this practice category by tapping on \"New Category\"";

/// Hint shown when a category has no items yet.
pub const NO_ITEMS_HINT: &str =
    "Add your first practice item (examples: C Major Scale, Mary Had a Little Lamb, etc.)";

/// The screen to present.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Categories(CategoryListView),
    Category(CategoryView),
}

/// List of all categories, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListView {
    pub rows: Vec<CategoryRow>,

    /// Onboarding hints, shown in order.
    pub hints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,

    /// Alternating background stripe (every odd row).
    pub is_striped: bool,
}

/// One category with its ranked items.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub id: CategoryId,
    pub title: String,
    pub sort_policy: SortPolicy,

    /// Menu label of `sort_policy`, e.g. "Sort by Ranking".
    pub sort_label: &'static str,

    /// Thresholds used to compute each row's tier.
    pub thresholds: TierThresholds,

    /// Items ordered by `sort_policy`.
    pub rows: Vec<ItemRow>,

    /// Onboarding hints, shown in order.
    pub hints: Vec<String>,

    /// Editor for the selected item, if any.
    pub detail: Option<ItemDetail>,
}

/// Display information for a single practice item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub tier: Tier,

    /// Practiced on the current calendar day; rendered struck through with a
    /// checked mark instead of a "mark practiced" button.
    pub practiced_today: bool,

    /// Alternating background stripe (every odd row).
    pub is_striped: bool,
    pub is_selected: bool,
}

/// Editor contents for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub id: ItemId,

    /// Editable title; empty while the item still has its placeholder name.
    pub title: String,

    /// Slider position in `[0.0, 1.0]` for the item's relative frequency.
    pub slider_position: f64,

    /// e.g. "Practice frequency: 2.0x (more often)".
    pub frequency_label: String,

    /// e.g. "Last practiced: 3 days ago".
    pub last_practiced_label: String,
    pub notes: String,
}
