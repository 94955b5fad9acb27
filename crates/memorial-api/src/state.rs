//! Application state shared by CLI commands.
//!
//! AppState holds the resolved data directory and configuration, and wires
//! the submission workflow to the concrete Supabase gateway on demand.

use std::path::PathBuf;

use anyhow::Context;

use memorial_core::submission::workflow::SubmissionWorkflow;
use memorial_infra::config::load_config;
use memorial_infra::filesystem::resolve_data_dir;
use memorial_infra::supabase::{BackendSettings, SupabaseGateway};
use memorial_types::config::MemorialConfig;

/// Workflow pinned to the Supabase adapter.
pub type ConcreteWorkflow = SubmissionWorkflow<SupabaseGateway>;

pub struct AppState {
    pub data_dir: PathBuf,
    pub config: MemorialConfig,
}

impl AppState {
    /// Resolve the data directory and load configuration.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await;
        tracing::debug!(data_dir = %data_dir.display(), ?config, "configuration loaded");
        Ok(Self { data_dir, config })
    }

    /// Build a submission workflow for the configured backend.
    ///
    /// Fails when the backend URL or key is missing or invalid.
    pub fn workflow(&self) -> anyhow::Result<ConcreteWorkflow> {
        let settings = BackendSettings::from_config(&self.config)
            .context("backend is not configured; run `memorial config` for details")?;
        let gateway = SupabaseGateway::new(settings)?;
        Ok(SubmissionWorkflow::new(gateway)
            .with_bucket(self.config.bucket.clone())
            .with_table(self.config.table.clone()))
    }
}
