//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → practicio.log (+ rotated backups)
//! ```
//!
//! The log lives in the configured data directory and rotates at 10 MB,
//! keeping three backups.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`

mod file_writer;
mod init;

pub use file_writer::{FileWriter, FileWriterHandle};
pub use init::{init_tracing, LOG_FILE_NAME};
