//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the navigation and preference state of a
//! practice session: which category and item are open and how items are
//! sorted. Practice data itself lives in a [`Storage`]; view models are
//! recomputed from fresh store snapshots on demand, so nothing here can go
//! stale.
//!
//! # Example
//!
//! ```rust
//! use chrono::Local;
//! use practicio::app::{AppState, ViewModel};
//! use practicio::storage::MemoryStorage;
//!
//! let storage = MemoryStorage::new();
//! let state = AppState::default();
//!
//! let viewmodel = state.compute_viewmodel(&storage, &Local::now())?;
//! assert!(matches!(viewmodel, ViewModel::Categories(_)));
//! # Ok::<(), practicio::PracticioError>(())
//! ```

use super::viewmodel::{
    CategoryListView, CategoryRow, CategoryView, ItemDetail, ItemRow, ViewModel, NO_CATEGORIES_HINT,
    NO_ITEMS_HINT, UNNAMED_CATEGORY_HINT,
};
use crate::domain::error::{PracticioError, Result};
use crate::domain::{CategoryId, ItemId, PracticeItem};
use crate::ranking::{
    classify_tier, compute_tier_thresholds, frequency_label, last_practiced_label, slider_from_frequency,
    sort_items, SortPolicy,
};
use crate::storage::Storage;
use chrono::{DateTime, TimeZone};

/// Navigation and preference state.
///
/// Mutated by the event handler in response to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    /// Ordering applied to item lists.
    pub sort_policy: SortPolicy,

    /// Open category; `None` shows the category list.
    pub selected_category: Option<CategoryId>,

    /// Item whose editor is open within the selected category.
    pub selected_item: Option<ItemId>,
}

impl AppState {
    #[must_use]
    pub fn new(sort_policy: SortPolicy) -> Self {
        Self {
            sort_policy,
            ..Self::default()
        }
    }

    /// Returns to the category list.
    pub fn clear_selection(&mut self) {
        self.selected_category = None;
        self.selected_item = None;
    }

    /// Computes the view model for the current screen.
    ///
    /// Reads fresh snapshots from `storage` and runs them through the ranking
    /// engine at `now`. Calendar-day decisions ("practiced today") use `now`'s
    /// time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected category no longer exists or the store
    /// fails to read.
    pub fn compute_viewmodel<S, Tz>(&self, storage: &S, now: &DateTime<Tz>) -> Result<ViewModel>
    where
        S: Storage + ?Sized,
        Tz: TimeZone,
    {
        let _span = tracing::debug_span!("compute_viewmodel",
            sort_policy = %self.sort_policy,
            in_category = self.selected_category.is_some()
        )
        .entered();

        match self.selected_category {
            None => Self::compute_category_list(storage).map(ViewModel::Categories),
            Some(category) => self
                .compute_category_view(storage, category, now)
                .map(ViewModel::Category),
        }
    }

    fn compute_category_list<S: Storage + ?Sized>(storage: &S) -> Result<CategoryListView> {
        let rows: Vec<CategoryRow> = storage
            .get_all_categories()?
            .into_iter()
            .enumerate()
            .map(|(index, category)| CategoryRow {
                id: category.id,
                name: category.display_name().to_string(),
                is_striped: index % 2 == 1,
            })
            .collect();

        let hints = if rows.is_empty() {
            vec![NO_CATEGORIES_HINT.to_string()]
        } else {
            vec![]
        };

        Ok(CategoryListView { rows, hints })
    }

    fn compute_category_view<S, Tz>(&self, storage: &S, id: CategoryId, now: &DateTime<Tz>) -> Result<CategoryView>
    where
        S: Storage + ?Sized,
        Tz: TimeZone,
    {
        let category = storage
            .get_category(id)?
            .ok_or(PracticioError::CategoryNotFound(id))?;
        let items = storage.get_items_in_category(id)?;

        let thresholds = compute_tier_thresholds(&items, now);
        let rows: Vec<ItemRow> = sort_items(&items, self.sort_policy, now)
            .iter()
            .enumerate()
            .map(|(index, item)| ItemRow {
                id: item.id,
                name: item.display_name().to_string(),
                tier: classify_tier(item, &thresholds, now),
                practiced_today: item.is_practiced_today(now),
                is_striped: index % 2 == 1,
                is_selected: self.selected_item == Some(item.id),
            })
            .collect();

        let mut hints = Vec::new();
        if category.has_placeholder_name() {
            hints.push(UNNAMED_CATEGORY_HINT.to_string());
        }
        if items.is_empty() {
            hints.push(NO_ITEMS_HINT.to_string());
        }

        let detail = self
            .selected_item
            .and_then(|selected| items.iter().find(|item| item.id == selected))
            .map(|item| Self::compute_item_detail(item, now));

        tracing::debug!(
            row_count = rows.len(),
            medium = thresholds.medium,
            high = thresholds.high,
            "category view computed"
        );

        Ok(CategoryView {
            id,
            title: category.display_name().to_string(),
            sort_policy: self.sort_policy,
            sort_label: self.sort_policy.label(),
            thresholds,
            rows,
            hints,
            detail,
        })
    }

    fn compute_item_detail<Tz: TimeZone>(item: &PracticeItem, now: &DateTime<Tz>) -> ItemDetail {
        let title = if item.has_placeholder_name() {
            String::new()
        } else {
            item.sort_name().to_string()
        };

        ItemDetail {
            id: item.id,
            title,
            slider_position: slider_from_frequency(item.relative_frequency),
            frequency_label: format!("Practice frequency: {}", frequency_label(item.relative_frequency)),
            last_practiced_label: last_practiced_label(item.last_practice, now),
            notes: item.notes.clone().unwrap_or_default(),
        }
    }
}
