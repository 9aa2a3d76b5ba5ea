//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait: the external collaborator that
//! owns categories and items. The ranking engine never talks to it; the
//! application layer reads snapshots from it, hands them to the engine, and
//! routes user edits back into it.
//!
//! # Design Philosophy
//!
//! The trait is minimal and maps directly onto user actions, not onto a
//! generic repository. Every successful mutation emits exactly one
//! [`StoreEvent`] to subscribers, which is the signal to recompute rankings.

use crate::domain::error::Result;
use crate::domain::{CategoryId, ItemId, PracticeCategory, PracticeItem};
use crate::storage::events::StoreEvent;
use chrono::{DateTime, Utc};
use std::sync::mpsc::Receiver;

/// Abstraction over practice item stores.
///
/// # Implementations
///
/// - [`MemoryStorage`](crate::storage::MemoryStorage): In-process store (default)
///
/// # Examples
///
/// ```
/// use practicio::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// let category = storage.add_category("Scales")?;
/// let item = storage.add_item(category.id)?;
///
/// assert_eq!(storage.get_items_in_category(category.id)?, vec![item]);
/// # Ok::<(), practicio::PracticioError>(())
/// ```
pub trait Storage: Send {
    /// Creates a category with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store the category.
    fn add_category(&mut self, name: &str) -> Result<PracticeCategory>;

    /// Renames a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNotFound`](crate::PracticioError::CategoryNotFound)
    /// if the category does not exist.
    fn rename_category(&mut self, id: CategoryId, name: &str) -> Result<()>;

    /// Deletes a category together with all of its items.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNotFound`](crate::PracticioError::CategoryNotFound)
    /// if the category does not exist.
    fn delete_category(&mut self, id: CategoryId) -> Result<()>;

    /// Retrieves a single category.
    ///
    /// Returns `Ok(None)` if the category doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_category(&self, id: CategoryId) -> Result<Option<PracticeCategory>>;

    /// Retrieves all categories, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_all_categories(&self) -> Result<Vec<PracticeCategory>>;

    /// Creates a never-practiced item with the placeholder name in a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNotFound`](crate::PracticioError::CategoryNotFound)
    /// if the category does not exist.
    fn add_item(&mut self, category: CategoryId) -> Result<PracticeItem>;

    /// Renames an item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`](crate::PracticioError::ItemNotFound) if the
    /// item does not exist.
    fn rename_item(&mut self, id: ItemId, name: &str) -> Result<()>;

    /// Sets an item's relative frequency. The stored value is clamped into the
    /// valid frequency range.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`](crate::PracticioError::ItemNotFound) if the
    /// item does not exist.
    fn set_item_frequency(&mut self, id: ItemId, relative_frequency: f64) -> Result<()>;

    /// Replaces an item's notes.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`](crate::PracticioError::ItemNotFound) if the
    /// item does not exist.
    fn set_item_notes(&mut self, id: ItemId, notes: &str) -> Result<()>;

    /// Records a practice at `at`, shifting the current practice instant into
    /// the previous slot.
    ///
    /// Whether the item was already practiced today is the caller's decision:
    /// it depends on the caller's calendar, which the store does not know.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`](crate::PracticioError::ItemNotFound) if the
    /// item does not exist.
    fn mark_item_practiced(&mut self, id: ItemId, at: DateTime<Utc>) -> Result<()>;

    /// Restores the previous practice instant and empties the previous slot.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`](crate::PracticioError::ItemNotFound) if the
    /// item does not exist.
    fn undo_item_practiced(&mut self, id: ItemId) -> Result<()>;

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemNotFound`](crate::PracticioError::ItemNotFound) if the
    /// item does not exist.
    fn delete_item(&mut self, id: ItemId) -> Result<()>;

    /// Retrieves a single item.
    ///
    /// Returns `Ok(None)` if the item doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get_item(&self, id: ItemId) -> Result<Option<PracticeItem>>;

    /// Retrieves the items of a category in insertion order. Ordering for
    /// display is the caller's job, see [`crate::ranking::sort_items`].
    ///
    /// # Errors
    ///
    /// Returns [`CategoryNotFound`](crate::PracticioError::CategoryNotFound)
    /// if the category does not exist.
    fn get_items_in_category(&self, category: CategoryId) -> Result<Vec<PracticeItem>>;

    /// Registers an observer for change events.
    fn subscribe(&mut self) -> Receiver<StoreEvent>;
}
