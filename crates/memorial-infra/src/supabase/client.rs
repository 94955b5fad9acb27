//! SupabaseGateway -- concrete [`StorageGateway`] implementation for Supabase.
//!
//! Uploads go to the Storage API (`/storage/v1/object/{bucket}/{name}`),
//! records go to PostgREST (`/rest/v1/{table}`). Both requests carry the
//! project key as `apikey` and as a bearer token. Bucket, object name and
//! table are pushed as percent-encoded path segments, so a name containing
//! `#`, `?` or spaces reaches the server intact.
//!
//! The key is wrapped in [`secrecy::SecretString`] and is never logged.

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use memorial_core::storage::gateway::StorageGateway;
use memorial_types::error::GatewayError;
use memorial_types::submission::SubmissionRecord;

use crate::storage::detect_mime;

use super::BackendSettings;

/// Supabase storage + table gateway.
///
/// Intentionally does not derive Debug; the key lives in a `SecretString`.
pub struct SupabaseGateway {
    client: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl SupabaseGateway {
    /// Build a gateway from validated settings.
    pub fn new(settings: BackendSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("memorial/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::new(format!("failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(&settings.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| GatewayError::new(format!("invalid base URL: {}", settings.base_url)))?;

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key,
        })
    }

    /// Base URL with `segments` appended, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn object_url(&self, bucket: &str, name: &str) -> Url {
        self.endpoint(&["storage", "v1", "object", bucket, name])
    }

    fn table_url(&self, table: &str) -> Url {
        self.endpoint(&["rest", "v1", table])
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let key = self.api_key.expose_secret();
        builder
            .header("apikey", key)
            .header("Authorization", format!("Bearer {key}"))
    }

    async fn check(response: reqwest::Response) -> Result<(), GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::new(error_message(status, &body)))
    }
}

/// Error body shapes returned by Storage, PostgREST and Auth.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    msg: Option<String>,
}

/// Pick the most descriptive message out of an error response.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = [parsed.message, parsed.error, parsed.msg]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
        {
            return message;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    }
}

impl StorageGateway for SupabaseGateway {
    async fn upload_blob(&self, bucket: &str, name: &str, data: &[u8]) -> Result<(), GatewayError> {
        let url = self.object_url(bucket, name);
        debug!(%url, size_bytes = data.len(), "POST storage object");

        let response = self
            .authorized(self.client.post(url))
            .header("Content-Type", detect_mime(name))
            .header("x-upsert", "false")
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| GatewayError::new(format!("HTTP request failed: {e}")))?;

        Self::check(response).await
    }

    async fn insert_record(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> Result<(), GatewayError> {
        let url = self.table_url(table);
        debug!(%url, "POST table row");

        let response = self
            .authorized(self.client.post(url))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| GatewayError::new(format!("HTTP request failed: {e}")))?;

        Self::check(response).await
    }
}
