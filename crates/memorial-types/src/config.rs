//! Client configuration types.
//!
//! `MemorialConfig` represents the `config.toml` in the data directory that
//! points the client at its backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::submission::{SUBMISSION_BUCKET, SUBMISSION_TABLE};

/// Top-level configuration for the memorial client.
///
/// Loaded from `~/.memorial/config.toml`. Every field has a default; the
/// backend URL and key have no usable default and must come from the file or
/// the environment before a submission can be sent.
#[derive(Clone, Serialize, Deserialize)]
pub struct MemorialConfig {
    /// Base URL of the Supabase project (e.g. `https://xyz.supabase.co`).
    #[serde(default)]
    pub supabase_url: Option<String>,

    /// Public (anon) API key for the project.
    #[serde(default)]
    pub supabase_key: Option<String>,

    /// Storage bucket for attachments.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Table for submission records.
    #[serde(default = "default_table")]
    pub table: String,

    /// Per-request timeout for backend calls.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Deployment environment label ("development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Name used in the thank-you message.
    #[serde(default = "default_honoree")]
    pub honoree: String,
}

fn default_bucket() -> String {
    SUBMISSION_BUCKET.to_string()
}

fn default_table() -> String {
    SUBMISSION_TABLE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_honoree() -> String {
    "Dean".to_string()
}

impl Default for MemorialConfig {
    fn default() -> Self {
        Self {
            supabase_url: None,
            supabase_key: None,
            bucket: default_bucket(),
            table: default_table(),
            request_timeout_secs: default_request_timeout_secs(),
            environment: default_environment(),
            honoree: default_honoree(),
        }
    }
}

// Hand-written so the API key never reaches logs.
impl fmt::Debug for MemorialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorialConfig")
            .field("supabase_url", &self.supabase_url)
            .field(
                "supabase_key",
                &self.supabase_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("bucket", &self.bucket)
            .field("table", &self.table)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("environment", &self.environment)
            .field("honoree", &self.honoree)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MemorialConfig::default();
        assert_eq!(config.bucket, "memorial-submissions");
        assert_eq!(config.table, "memorial_submissions");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.environment, "development");
        assert_eq!(config.honoree, "Dean");
        assert!(config.supabase_url.is_none());
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: MemorialConfig = toml::from_str("").unwrap();
        assert_eq!(config.bucket, "memorial-submissions");
        assert!(config.supabase_key.is_none());
    }

    #[test]
    fn test_deserialize_with_values() {
        let toml_str = r#"
supabase_url = "https://example.supabase.co"
supabase_key = "anon-key"
bucket = "uploads"
request_timeout_secs = 10
"#;
        let config: MemorialConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.supabase_url.as_deref(),
            Some("https://example.supabase.co")
        );
        assert_eq!(config.bucket, "uploads");
        assert_eq!(config.table, "memorial_submissions");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = MemorialConfig {
            supabase_key: Some("super-secret".to_string()),
            ..MemorialConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
