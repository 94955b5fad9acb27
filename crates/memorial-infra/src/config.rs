//! Configuration loader for the memorial client.
//!
//! Reads `config.toml` from the data directory (`~/.memorial/` by default)
//! and deserializes it into [`MemorialConfig`]. Falls back to defaults when
//! the file is missing or malformed, then applies environment overrides for
//! the backend URL and key.

use std::path::Path;

use memorial_types::config::MemorialConfig;

use crate::filesystem::config_path;

/// Environment variables checked for the backend URL, highest priority first.
pub const URL_ENV_VARS: &[&str] = &["MEMORIAL_SUPABASE_URL", "SUPABASE_URL"];

/// Environment variables checked for the backend key, highest priority first.
pub const KEY_ENV_VARS: &[&str] = &["MEMORIAL_SUPABASE_KEY", "SUPABASE_ANON_KEY"];

/// Load configuration from `{data_dir}/config.toml` plus the process environment.
pub async fn load_config(data_dir: &Path) -> MemorialConfig {
    let config = load_config_file(data_dir).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Load `{data_dir}/config.toml` without consulting the environment.
///
/// - If the file does not exist, returns [`MemorialConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_config_file(data_dir: &Path) -> MemorialConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return MemorialConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return MemorialConfig::default();
        }
    };

    match toml::from_str::<MemorialConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            MemorialConfig::default()
        }
    }
}

/// Overlay backend URL/key from the environment.
///
/// `lookup` resolves a variable name to its value. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: MemorialConfig, lookup: F) -> MemorialConfig
where
    F: Fn(&str) -> Option<String>,
{
    let first_set = |names: &[&str]| {
        names
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
    };

    if let Some(url) = first_set(URL_ENV_VARS) {
        config.supabase_url = Some(url);
    }
    if let Some(key) = first_set(KEY_ENV_VARS) {
        config.supabase_key = Some(key);
    }
    config
}
