//! Practice-priority ranking engine.
//!
//! Every function in this module is a pure computation over item snapshots and
//! an injected "now": nothing is cached, nothing is mutated, nothing fails.
//! Missing data is replaced by defaults instead of producing errors.
//!
//! ```text
//! item snapshot ──► age (calendar days) ──► score = age / frequency
//!                                              │
//!                         ┌────────────────────┼───────────────────┐
//!                         ▼                    ▼                   ▼
//!                  tier thresholds       classify tier        sort policies
//! ```
//!
//! # Modules
//!
//! - `age`: Calendar-day age of the last practice
//! - `score`: Urgency score from age and clamped relative frequency
//! - `frequency`: Slider mapping and displayed practice rate
//! - `tier`: Population-relative color tiers
//! - `sort`: The four user-selectable sort policies

mod age;
mod frequency;
mod score;
mod sort;
mod tier;

pub use age::{compute_age, is_practiced_today, last_practiced_label};
pub use frequency::{display_frequency, frequency_from_slider, frequency_label, slider_from_frequency};
pub use score::{clamp_frequency, compute_score};
pub use sort::{sort_items, SortPolicy};
pub use tier::{classify_tier, compute_tier_thresholds, Tier, TierThresholds};

/// Lowest relative frequency; items at this value are scored most urgently.
pub const MIN_FREQUENCY: f64 = 0.1;

/// Average cadence, the centre of the frequency slider.
pub const AVG_FREQUENCY: f64 = 1.0;

/// Highest relative frequency; items at this value are scored least urgently.
pub const MAX_FREQUENCY: f64 = 10.0;

/// Age in days assumed for items that have never been practiced.
///
/// Treats a new item as moderately stale rather than infinitely so.
pub const DEFAULT_ITEM_AGE: i64 = 7;
