//! Event handling and state transition logic.
//!
//! This module processes user intents, applying them to the [`AppState`] and
//! routing data edits into the [`Storage`]. It is the only place where user
//! input turns into store mutations.
//!
//! # Architecture
//!
//! 1. The front end translates input into an [`Event`]
//! 2. [`handle_event`] updates navigation state and/or the store
//! 3. It reports whether the current view must be recomputed
//! 4. The front end calls [`AppState::compute_viewmodel`] when it does
//!
//! # Example
//!
//! ```rust
//! use chrono::Local;
//! use practicio::app::{handle_event, AppState, Event};
//! use practicio::storage::MemoryStorage;
//!
//! let mut storage = MemoryStorage::new();
//! let mut state = AppState::default();
//!
//! let refresh = handle_event(&mut state, &mut storage, &Event::AddCategory, &Local::now())?;
//! assert!(refresh);
//! assert!(state.selected_category.is_some());
//! # Ok::<(), practicio::PracticioError>(())
//! ```

use super::AppState;
use crate::domain::category::NEW_CATEGORY_NAME;
use crate::domain::error::{PracticioError, Result};
use crate::domain::{CategoryId, ItemId};
use crate::ranking::{frequency_from_slider, SortPolicy};
use crate::storage::Storage;
use chrono::{DateTime, TimeZone, Utc};

/// User intents, in the vocabulary of the category and item screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Creates a placeholder-named category and opens it.
    AddCategory,
    SelectCategory(CategoryId),
    RenameCategory {
        id: CategoryId,
        name: String,
    },
    /// Deletes a category with all its items; returns to the list if it was open.
    DeleteCategory(CategoryId),
    /// Returns to the category list.
    Back,

    SetSortPolicy(SortPolicy),

    /// Creates a placeholder-named item in the open category and opens its editor.
    AddItem,
    /// Opens the item's editor, or closes it if already open.
    SelectItem(ItemId),
    /// Closes the item editor.
    DismissItem,
    /// Marks the item practiced today, or undoes today's practice.
    TogglePracticed(ItemId),
    RenameItem {
        id: ItemId,
        name: String,
    },
    /// Slider position in `[0.0, 1.0]`; converted to a relative frequency.
    SetFrequencySlider {
        id: ItemId,
        slider: f64,
    },
    SetNotes {
        id: ItemId,
        notes: String,
    },
    DeleteItem(ItemId),
}

/// Processes an event, mutating state and store.
///
/// Returns `true` when rankings or navigation changed and the view model must
/// be recomputed. Notes edits do not affect ranking and return `false`.
///
/// # Errors
///
/// Returns store errors, e.g. when an event references a deleted item.
pub fn handle_event<S, Tz>(state: &mut AppState, storage: &mut S, event: &Event, now: &DateTime<Tz>) -> Result<bool>
where
    S: Storage + ?Sized,
    Tz: TimeZone,
{
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    apply_event(state, storage, event, now).map_err(|e| {
        tracing::warn!(error = %e, "event rejected");
        e
    })
}

fn apply_event<S, Tz>(state: &mut AppState, storage: &mut S, event: &Event, now: &DateTime<Tz>) -> Result<bool>
where
    S: Storage + ?Sized,
    Tz: TimeZone,
{
    match event {
        Event::AddCategory => {
            let category = storage.add_category(NEW_CATEGORY_NAME)?;
            state.selected_category = Some(category.id);
            state.selected_item = None;
            Ok(true)
        }
        Event::SelectCategory(id) => {
            storage.get_category(*id)?.ok_or(PracticioError::CategoryNotFound(*id))?;
            state.selected_category = Some(*id);
            state.selected_item = None;
            Ok(true)
        }
        Event::RenameCategory { id, name } => {
            storage.rename_category(*id, name)?;
            Ok(true)
        }
        Event::DeleteCategory(id) => {
            storage.delete_category(*id)?;
            if state.selected_category == Some(*id) {
                state.clear_selection();
            }
            Ok(true)
        }
        Event::Back => {
            state.clear_selection();
            Ok(true)
        }
        Event::SetSortPolicy(policy) => {
            let changed = state.sort_policy != *policy;
            state.sort_policy = *policy;
            Ok(changed)
        }
        Event::AddItem => {
            let Some(category) = state.selected_category else {
                tracing::debug!("no category open, ignoring add item");
                return Ok(false);
            };
            let item = storage.add_item(category)?;
            state.selected_item = Some(item.id);
            Ok(true)
        }
        Event::SelectItem(id) => {
            if state.selected_item == Some(*id) {
                state.selected_item = None;
                return Ok(true);
            }
            storage
                .get_item(*id)?
                .filter(|item| state.selected_category == Some(item.category_id))
                .ok_or(PracticioError::ItemNotFound(*id))?;
            state.selected_item = Some(*id);
            Ok(true)
        }
        Event::DismissItem => {
            let was_open = state.selected_item.take().is_some();
            Ok(was_open)
        }
        Event::TogglePracticed(id) => {
            let item = storage.get_item(*id)?.ok_or(PracticioError::ItemNotFound(*id))?;

            // Decided in the caller's zone, the same calendar the view uses.
            let practiced = if item.is_practiced_today(now) {
                storage.undo_item_practiced(*id)?;
                false
            } else {
                storage.mark_item_practiced(*id, now.with_timezone(&Utc))?;
                true
            };

            tracing::debug!(item_id = %id, practiced, "practice toggled");
            Ok(true)
        }
        Event::RenameItem { id, name } => {
            storage.rename_item(*id, name)?;
            Ok(true)
        }
        Event::SetFrequencySlider { id, slider } => {
            let frequency = frequency_from_slider(*slider);
            tracing::debug!(item_id = %id, slider, frequency, "frequency changed");
            storage.set_item_frequency(*id, frequency)?;
            Ok(true)
        }
        Event::SetNotes { id, notes } => {
            storage.set_item_notes(*id, notes)?;
            Ok(false)
        }
        Event::DeleteItem(id) => {
            storage.delete_item(*id)?;
            if state.selected_item == Some(*id) {
                state.selected_item = None;
            }
            Ok(true)
        }
    }
}
