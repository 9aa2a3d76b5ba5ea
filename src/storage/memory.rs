//! In-memory storage backend.
//!
//! Keeps categories and items in insertion order and publishes a
//! [`StoreEvent`] after every successful mutation. Persisting the data is left
//! to whoever embeds the store; the contents are plain serde-serializable
//! snapshots.
//!
//! # Thread Safety
//!
//! This type is `Send` but not `Sync`. Mutation requires `&mut self`; observers
//! on other threads receive events through channels.

use crate::domain::category::NEW_CATEGORY_NAME;
use crate::domain::error::{PracticioError, Result};
use crate::domain::item::NEW_ITEM_NAME;
use crate::domain::{CategoryId, ItemId, PracticeCategory, PracticeItem};
use crate::ranking::clamp_frequency;
use crate::storage::backend::Storage;
use crate::storage::events::{EventBus, StoreEvent};
use chrono::{DateTime, Utc};
use std::sync::mpsc::Receiver;

/// In-process practice item store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    categories: Vec<PracticeCategory>,
    items: Vec<PracticeItem>,
    events: EventBus,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with snapshots, e.g. loaded by the host.
    ///
    /// Items whose category is not among `categories` are dropped.
    #[must_use]
    pub fn with_contents(categories: Vec<PracticeCategory>, items: Vec<PracticeItem>) -> Self {
        let (items, orphans): (Vec<_>, Vec<_>) = items
            .into_iter()
            .partition(|item| categories.iter().any(|c| c.id == item.category_id));

        if !orphans.is_empty() {
            tracing::warn!(count = orphans.len(), "dropping items without a category");
        }

        tracing::debug!(
            category_count = categories.len(),
            item_count = items.len(),
            "storage initialized"
        );

        Self {
            categories,
            items,
            events: EventBus::new(),
        }
    }

    /// All stored items across categories, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[PracticeItem] {
        &self.items
    }

    fn category_mut(&mut self, id: CategoryId) -> Result<&mut PracticeCategory> {
        self.categories
            .iter_mut()
            .find(|category| category.id == id)
            .ok_or(PracticioError::CategoryNotFound(id))
    }

    fn ensure_category(&self, id: CategoryId) -> Result<()> {
        if self.categories.iter().any(|category| category.id == id) {
            Ok(())
        } else {
            Err(PracticioError::CategoryNotFound(id))
        }
    }

    /// Applies `update` to an item and publishes `ItemUpdated`.
    fn update_item<T>(&mut self, id: ItemId, update: impl FnOnce(&mut PracticeItem) -> T) -> Result<T> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(PracticioError::ItemNotFound(id))?;

        let output = update(item);
        let category = item.category_id;

        self.events.publish(StoreEvent::ItemUpdated { item: id, category });
        Ok(output)
    }
}

impl Storage for MemoryStorage {
    fn add_category(&mut self, name: &str) -> Result<PracticeCategory> {
        let _span = tracing::debug_span!("memory_add_category", name = %name).entered();

        let name = if name.is_empty() { NEW_CATEGORY_NAME } else { name };
        let category = PracticeCategory::new(name);
        self.categories.push(category.clone());

        self.events.publish(StoreEvent::CategoryAdded(category.id));
        tracing::debug!(category_id = %category.id, "category added");
        Ok(category)
    }

    fn rename_category(&mut self, id: CategoryId, name: &str) -> Result<()> {
        let _span = tracing::debug_span!("memory_rename_category", category_id = %id).entered();

        self.category_mut(id)?.name = Some(name.to_string());

        self.events.publish(StoreEvent::CategoryRenamed(id));
        Ok(())
    }

    fn delete_category(&mut self, id: CategoryId) -> Result<()> {
        let _span = tracing::debug_span!("memory_delete_category", category_id = %id).entered();

        self.ensure_category(id)?;
        self.categories.retain(|category| category.id != id);

        let before = self.items.len();
        self.items.retain(|item| item.category_id != id);

        self.events.publish(StoreEvent::CategoryDeleted(id));
        tracing::debug!(removed_items = before - self.items.len(), "category deleted");
        Ok(())
    }

    fn get_category(&self, id: CategoryId) -> Result<Option<PracticeCategory>> {
        Ok(self.categories.iter().find(|category| category.id == id).cloned())
    }

    fn get_all_categories(&self) -> Result<Vec<PracticeCategory>> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| {
            a.name
                .as_deref()
                .unwrap_or("")
                .cmp(b.name.as_deref().unwrap_or(""))
        });

        tracing::trace!(count = categories.len(), "retrieved categories");
        Ok(categories)
    }

    fn add_item(&mut self, category: CategoryId) -> Result<PracticeItem> {
        let _span = tracing::debug_span!("memory_add_item", category_id = %category).entered();

        self.ensure_category(category)?;
        let item = PracticeItem::new(category, NEW_ITEM_NAME);
        self.items.push(item.clone());

        self.events.publish(StoreEvent::ItemAdded { item: item.id, category });
        tracing::debug!(item_id = %item.id, "item added");
        Ok(item)
    }

    fn rename_item(&mut self, id: ItemId, name: &str) -> Result<()> {
        let _span = tracing::debug_span!("memory_rename_item", item_id = %id).entered();

        self.update_item(id, |item| item.name = Some(name.to_string()))
    }

    fn set_item_frequency(&mut self, id: ItemId, relative_frequency: f64) -> Result<()> {
        let _span = tracing::debug_span!("memory_set_item_frequency",
            item_id = %id,
            relative_frequency
        )
        .entered();

        let clamped = clamp_frequency(relative_frequency);
        if (clamped - relative_frequency).abs() > f64::EPSILON {
            tracing::debug!(clamped, "frequency out of range, clamping");
        }

        self.update_item(id, |item| item.relative_frequency = clamped)
    }

    fn set_item_notes(&mut self, id: ItemId, notes: &str) -> Result<()> {
        let _span = tracing::debug_span!("memory_set_item_notes", item_id = %id).entered();

        self.update_item(id, |item| item.notes = Some(notes.to_string()))
    }

    fn mark_item_practiced(&mut self, id: ItemId, at: DateTime<Utc>) -> Result<()> {
        let _span = tracing::debug_span!("memory_mark_item_practiced", item_id = %id, %at).entered();

        self.update_item(id, |item| item.mark_practiced(&at))
    }

    fn undo_item_practiced(&mut self, id: ItemId) -> Result<()> {
        let _span = tracing::debug_span!("memory_undo_item_practiced", item_id = %id).entered();

        self.update_item(id, PracticeItem::undo_practice)
    }

    fn delete_item(&mut self, id: ItemId) -> Result<()> {
        let _span = tracing::debug_span!("memory_delete_item", item_id = %id).entered();

        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(PracticioError::ItemNotFound(id))?;
        let item = self.items.remove(position);

        self.events.publish(StoreEvent::ItemDeleted {
            item: id,
            category: item.category_id,
        });
        Ok(())
    }

    fn get_item(&self, id: ItemId) -> Result<Option<PracticeItem>> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    fn get_items_in_category(&self, category: CategoryId) -> Result<Vec<PracticeItem>> {
        self.ensure_category(category)?;

        let items: Vec<PracticeItem> = self
            .items
            .iter()
            .filter(|item| item.category_id == category)
            .cloned()
            .collect();

        tracing::trace!(count = items.len(), "retrieved items");
        Ok(items)
    }

    fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
