//! Path helpers for configuration, catalog and log locations.
//!
//! Paths in configuration may start with `~`, which is expanded against the home
//! directory. Default locations come from the platform's data and config
//! directories as reported by `dirs` (XDG on Linux).

use std::path::{Path, PathBuf};

const APP_DIR: &str = "showroom";

/// Expands a leading `~` against `home`, leaving other paths untouched.
fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use showroom::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/srv/catalog.toml"), PathBuf::from("/srv/catalog.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

/// Directory for runtime data such as log files.
///
/// `<platform data dir>/showroom`, or `./.showroom` when the platform has none.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".showroom"), |base| base.join(APP_DIR))
}

/// Resolves a configured runtime file: `~` is expanded, and relative paths are
/// placed under [`data_dir`].
#[must_use]
pub fn resolve_data_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_relative() {
        data_dir().join(expanded)
    } else {
        expanded
    }
}

/// Location the binary looks for a configuration file when none is given.
///
/// `<platform config dir>/showroom/config.toml`, e.g. `~/.config/showroom/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join("config.toml"))
}
