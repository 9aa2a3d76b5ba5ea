//! Error types for Practicio.
//!
//! The ranking engine itself never fails: missing data is replaced by defaults.
//! Errors only arise at the collaborator boundary (the item store, configuration
//! loading and log file setup), and all of them are collected in
//! [`PracticioError`] with the [`Result`] alias used throughout the crate.

use super::category::CategoryId;
use super::item::ItemId;
use thiserror::Error;

/// The main error type for Practicio operations.
///
/// # Examples
///
/// ```
/// use practicio::PracticioError;
///
/// fn validate_config() -> Result<(), PracticioError> {
///     Err(PracticioError::Config("unknown sort policy".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PracticioError {
    /// A category referenced by id is not present in the store.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// An item referenced by id is not present in the store.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. reading a
    /// configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PracticioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("failed to parse TOML: {err}"))
    }
}

/// A specialized `Result` type for Practicio operations.
pub type Result<T> = std::result::Result<T, PracticioError>;
