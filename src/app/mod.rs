//! Application layer coordinating navigation state, store edits and views.
//!
//! This module sits between a front end and the storage/ranking layers. It is
//! the reference collaborator for the ranking engine: it reads item snapshots
//! from the store, asks the engine for orderings and tiers, and routes user
//! edits back into the store.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handle_event → Store Mutations ──► StoreEvent
//!                           │                                  │
//!                           ▼                                  ▼
//!                      AppState ──► compute_viewmodel ◄── recompute trigger
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Navigation state and view model computation
//! - [`viewmodel`]: Display-ready output types

pub mod handler;
pub mod state;
pub mod viewmodel;

pub use handler::{handle_event, Event};
pub use state::AppState;
pub use viewmodel::{CategoryListView, CategoryRow, CategoryView, ItemDetail, ItemRow, ViewModel};
