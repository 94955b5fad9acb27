//! In-memory gateway used by unit tests in this crate.

use std::sync::Mutex;

use memorial_types::error::GatewayError;
use memorial_types::submission::SubmissionRecord;

use crate::storage::gateway::StorageGateway;

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub bucket: String,
    pub name: String,
    pub size: usize,
}

/// Records every call and fails on demand.
#[derive(Default)]
pub struct RecordingGateway {
    pub upload_error: Option<String>,
    pub insert_error: Option<String>,
    pub uploads: Mutex<Vec<Upload>>,
    pub inserts: Mutex<Vec<(String, SubmissionRecord)>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_upload(message: &str) -> Self {
        Self {
            upload_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_insert(message: &str) -> Self {
        Self {
            insert_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn inserts(&self) -> Vec<(String, SubmissionRecord)> {
        self.inserts.lock().unwrap().clone()
    }
}

impl StorageGateway for RecordingGateway {
    async fn upload_blob(&self, bucket: &str, name: &str, data: &[u8]) -> Result<(), GatewayError> {
        self.uploads.lock().unwrap().push(Upload {
            bucket: bucket.to_string(),
            name: name.to_string(),
            size: data.len(),
        });
        match &self.upload_error {
            Some(message) => Err(GatewayError::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn insert_record(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> Result<(), GatewayError> {
        self.inserts
            .lock()
            .unwrap()
            .push((table.to_string(), record.clone()));
        match &self.insert_error {
            Some(message) => Err(GatewayError::new(message.clone())),
            None => Ok(()),
        }
    }
}

/// Gateway whose calls never complete.
pub struct StalledGateway;

impl StorageGateway for StalledGateway {
    async fn upload_blob(
        &self,
        _bucket: &str,
        _name: &str,
        _data: &[u8],
    ) -> Result<(), GatewayError> {
        std::future::pending().await
    }

    async fn insert_record(
        &self,
        _table: &str,
        _record: &SubmissionRecord,
    ) -> Result<(), GatewayError> {
        std::future::pending().await
    }
}
