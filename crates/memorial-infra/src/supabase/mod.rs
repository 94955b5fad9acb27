//! Supabase backend adapter.
//!
//! [`SupabaseGateway`] implements the `StorageGateway` port against a
//! Supabase project: Storage API for attachments, PostgREST for records.

pub mod client;

use std::time::Duration;

use memorial_types::config::MemorialConfig;
use memorial_types::error::ConfigError;
use secrecy::SecretString;

pub use client::SupabaseGateway;

/// Connection settings resolved from [`MemorialConfig`].
pub struct BackendSettings {
    /// Project base URL without a trailing slash.
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout: Duration,
}

impl BackendSettings {
    /// Validate the backend fields of `config`.
    pub fn from_config(config: &MemorialConfig) -> Result<Self, ConfigError> {
        let raw_url = config
            .supabase_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let parsed =
            reqwest::Url::parse(raw_url).map_err(|_| ConfigError::InvalidUrl(raw_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(raw_url.to_string()));
        }

        let key = config
            .supabase_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;

        Ok(Self {
            base_url: raw_url.trim_end_matches('/').to_string(),
            api_key: SecretString::from(key.to_string()),
            timeout: Duration::from_secs(config.request_timeout_secs.max(1)),
        })
    }
}
