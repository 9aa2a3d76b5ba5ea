//! Practicio: practice-priority ranking for personal practice tracking.
//!
//! Users organize practice items (scales, etudes, pieces) into categories and
//! mark them as practiced. Practicio ranks items by urgency so the user knows
//! what to practice next:
//! - Calendar-day age of the last practice
//! - Urgency score weighted by a per-item relative frequency
//! - Population-relative color tiers (neutral, medium, high)
//! - Four sort policies (alphabetical, last practiced, frequency, score)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Front end (not part of this crate)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │ Event          ▲ ViewModel
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, navigation state                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!            │                              │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ Storage (storage/)    │   │ Ranking (ranking/)      │
//! │ - Storage trait       │   │ - Age, score            │
//! │ - In-memory store     │   │ - Slider mapping        │
//! │ - Change events       │   │ - Tiers, sort policies  │
//! └───────────────────────┘   └─────────────────────────┘
//!            │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): items, categories, errors        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The ranking engine is pure: it reads item snapshots and an injected "now"
//! and never fails. Missing practice dates default to an age of seven days and
//! out-of-range frequencies are clamped.
//!
//! # Modules
//!
//! - [`ranking`]: The scoring and sorting engine
//! - [`domain`]: Core domain types (items, categories, errors)
//! - [`storage`]: Store abstraction, in-memory store and change events
//! - [`app`]: Event handling and view models
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Rotating-file tracing setup
//!
//! # Configuration
//!
//! ```toml
//! default_sort = "score"          # alphabetical | last_practiced | frequency | score
//! trace_level = "info"
//! data_dir = "~/.local/share/practicio"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use practicio::domain::{CategoryId, PracticeItem};
//! use practicio::ranking::{classify_tier, compute_tier_thresholds, sort_items, SortPolicy, Tier};
//!
//! let now = Utc::now();
//! let category = CategoryId::new();
//!
//! let mut scales = PracticeItem::new(category, "Scales");
//! scales.last_practice = Some(now - Duration::days(8));
//! let mut etude = PracticeItem::new(category, "Etude");
//! etude.last_practice = Some(now - Duration::days(1));
//!
//! let items = vec![etude, scales];
//! let thresholds = compute_tier_thresholds(&items, &now);
//! let ranked = sort_items(&items, SortPolicy::Score, &now);
//!
//! assert_eq!(ranked[0].display_name(), "Scales");
//! assert_eq!(classify_tier(&ranked[0], &thresholds, &now), Tier::High);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ranking;
pub mod storage;

pub use app::{handle_event, AppState, Event, ViewModel};
pub use domain::{PracticioError, Result};
pub use ranking::{SortPolicy, Tier, TierThresholds};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration.
///
/// Loaded either from a string map (lenient) or a TOML file (strict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sort policy applied when the application starts. Default: `score`
    pub default_sort: SortPolicy,

    /// Tracing filter directive, e.g. `debug` or `practicio=trace`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory holding the log file. Default: see
    /// [`infrastructure::get_data_dir`].
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sort: SortPolicy::default(),
            trace_level: None,
            data_dir: infrastructure::get_data_dir(),
        }
    }
}

/// On-disk shape of the TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    default_sort: Option<SortPolicy>,
    trace_level: Option<String>,
    data_dir: Option<String>,
}

impl Config {
    /// Parses configuration from a key/value map, e.g. host-provided settings.
    ///
    /// # Parsing Rules
    ///
    /// - `default_sort`: policy name (falls back to `score` on parse error)
    /// - `trace_level`: String → `Option<String>`
    /// - `data_dir`: path with `~` expansion
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use practicio::{Config, SortPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_sort".to_string(), "alphabetical".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_sort, SortPolicy::Alphabetical);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let default_sort = map
            .get("default_sort")
            .and_then(|value| {
                value
                    .parse::<SortPolicy>()
                    .map_err(|e| tracing::debug!(error = %e, "invalid default_sort, using default"))
                    .ok()
            })
            .unwrap_or_default();

        let data_dir = map
            .get("data_dir")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(infrastructure::get_data_dir, |value| {
                infrastructure::expand_tilde(value.trim())
            });

        Self {
            default_sort,
            trace_level: map.get("trace_level").cloned(),
            data_dir,
        }
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PracticioError::Config`] on invalid TOML, unknown keys, or an
    /// unknown sort policy.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let defaults = Self::default();

        Ok(Self {
            default_sort: file.default_sort.unwrap_or(defaults.default_sort),
            trace_level: file.trace_level,
            data_dir: file
                .data_dir
                .map_or(defaults.data_dir, |dir| infrastructure::expand_tilde(&dir)),
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates the initial application state for a configuration.
///
/// # Example
///
/// ```rust
/// use practicio::{initialize, Config, SortPolicy};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.sort_policy, SortPolicy::Score);
/// assert!(state.selected_category.is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(default_sort = %config.default_sort, "initializing practicio");
    AppState::new(config.default_sort)
}
