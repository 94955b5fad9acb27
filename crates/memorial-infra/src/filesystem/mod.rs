//! Data directory layout for the memorial client.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "MEMORIAL_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `MEMORIAL_DATA_DIR`, then `~/.memorial`, then `./.memorial`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".memorial");
    }

    PathBuf::from(".memorial")
}

/// Path of the config file inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}
