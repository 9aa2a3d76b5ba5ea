//! Change events emitted by stores.
//!
//! Observers treat any event as a recompute trigger: rankings and tiers are
//! derived on demand, so there is no cache to invalidate beyond re-running the
//! engine on fresh snapshots.

use crate::domain::{CategoryId, ItemId};
use std::sync::mpsc::{self, Receiver, Sender};

/// A successful mutation of store contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    CategoryAdded(CategoryId),
    CategoryRenamed(CategoryId),
    /// Also implies deletion of every item in the category.
    CategoryDeleted(CategoryId),
    ItemAdded {
        item: ItemId,
        category: CategoryId,
    },
    ItemUpdated {
        item: ItemId,
        category: CategoryId,
    },
    ItemDeleted {
        item: ItemId,
        category: CategoryId,
    },
}

impl StoreEvent {
    /// Category whose item list is affected by the event.
    #[must_use]
    pub const fn category(&self) -> CategoryId {
        match *self {
            Self::CategoryAdded(category)
            | Self::CategoryRenamed(category)
            | Self::CategoryDeleted(category)
            | Self::ItemAdded { category, .. }
            | Self::ItemUpdated { category, .. }
            | Self::ItemDeleted { category, .. } => category,
        }
    }
}

/// Fan-out of store events to any number of channel subscribers.
///
/// Subscribers whose receiver has been dropped are pruned on the next publish.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<StoreEvent>>,
}

impl EventBus {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Delivers `event` to every live subscriber.
    pub fn publish(&mut self, event: StoreEvent) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event).is_ok());

        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            tracing::debug!(pruned, "dropped disconnected subscribers");
        }
        tracing::trace!(?event, subscribers = self.subscribers.len(), "published store event");
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let mut bus = EventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();
        let category = CategoryId::new();

        bus.publish(StoreEvent::CategoryAdded(category));

        assert_eq!(first.try_recv().ok(), Some(StoreEvent::CategoryAdded(category)));
        assert_eq!(second.try_recv().ok(), Some(StoreEvent::CategoryAdded(category)));
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut bus = EventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(StoreEvent::CategoryRenamed(CategoryId::new()));

        assert_eq!(bus.subscriber_count(), 1);
        assert!(kept.try_recv().is_ok());
    }
}
