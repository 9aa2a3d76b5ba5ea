//! Domain layer for Practicio.
//!
//! Plain data types shared by the ranking engine, the item store and the
//! application layer. Nothing here depends on storage or presentation.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Practice items and their two-slot practice history
//! - [`category`]: Practice categories grouping items
//!
//! # Examples
//!
//! ```
//! use practicio::domain::{PracticeCategory, PracticeItem};
//!
//! let category = PracticeCategory::new("Scales");
//! let item = PracticeItem::new(category.id, "C Major Scale");
//! assert_eq!(item.category_id, category.id);
//! assert!(item.last_practice.is_none());
//! ```

pub mod category;
pub mod error;
pub mod item;

pub use category::{CategoryId, PracticeCategory};
pub use error::{PracticioError, Result};
pub use item::{ItemId, PracticeItem};
