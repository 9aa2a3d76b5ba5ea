//! Path helpers for configuration and data locations.
//!
//! Resolves the per-user data directory (used for log files) and expands `~`
//! in user-supplied paths using the `HOME` environment variable.

use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "practicio";

/// Returns the data directory for Practicio files.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/practicio`
/// 2. `$HOME/.local/share/practicio`
/// 3. `./practicio` when neither variable is set
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    xdg_data_home
        .filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when `HOME` is unset, are returned as-is.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(rest.trim_start_matches('/')),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = Some(PathBuf::from("/home/player"));

        assert_eq!(expand_tilde_with("~/logs", home.clone()), PathBuf::from("/home/player/logs"));
        assert_eq!(expand_tilde_with("~", home.clone()), PathBuf::from("/home/player"));
        assert_eq!(expand_tilde_with("~other/x", home.clone()), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("/abs/path", home), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde_with("~/logs", None), PathBuf::from("~/logs"));
    }

    #[test]
    fn test_data_dir_resolution() {
        assert_eq!(
            data_dir_from(Some(PathBuf::from("/xdg")), Some(PathBuf::from("/home/p"))),
            PathBuf::from("/xdg/practicio")
        );
        assert_eq!(
            data_dir_from(Some(PathBuf::from("relative")), Some(PathBuf::from("/home/p"))),
            PathBuf::from("/home/p/.local/share/practicio")
        );
        assert_eq!(data_dir_from(None, None), PathBuf::from("./practicio"));
    }
}
