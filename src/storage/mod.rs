//! Storage layer: the collaborator that owns practice data.
//!
//! The ranking engine is pure and never calls into storage. Stores own
//! create/update/delete of categories and items, generate identities, and
//! notify observers after each mutation so rankings can be recomputed.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `memory`: In-process storage implementation
//! - `events`: Change events and their channel fan-out

pub mod backend;
pub mod events;
pub mod memory;

pub use backend::Storage;
pub use events::{EventBus, StoreEvent};
pub use memory::MemoryStorage;
