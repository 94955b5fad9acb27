//! Upload-then-insert submission pipeline.
//!
//! A submit attempt is two sequential gateway calls: the optional attachment
//! upload, then the record insert that references it. The first failure ends
//! the attempt. Nothing is retried and nothing is rolled back: an upload
//! followed by a failed insert leaves the blob in storage.

use memorial_types::error::SubmitError;
use memorial_types::submission::{
    DraftSubmission, StoredReference, SubmissionRecord, SUBMISSION_BUCKET, SUBMISSION_TABLE,
};
use tracing::{debug, info, warn};

use crate::storage::gateway::StorageGateway;

use super::naming::generate_stored_name;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was inserted.
    Succeeded { stored: Option<StoredReference> },
    /// The attachment upload failed; no insert was attempted.
    UploadFailed { message: String },
    /// The insert failed. `stored` names any blob uploaded in this attempt,
    /// which is now unreferenced.
    InsertFailed {
        stored: Option<StoredReference>,
        message: String,
    },
}

impl SubmitOutcome {
    /// Name of the blob uploaded during this attempt, if any.
    pub fn stored_reference(&self) -> Option<&StoredReference> {
        match self {
            SubmitOutcome::Succeeded { stored } | SubmitOutcome::InsertFailed { stored, .. } => {
                stored.as_ref()
            }
            SubmitOutcome::UploadFailed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }

    pub fn into_result(self) -> Result<Option<StoredReference>, SubmitError> {
        match self {
            SubmitOutcome::Succeeded { stored } => Ok(stored),
            SubmitOutcome::UploadFailed { message } => Err(SubmitError::Upload(message)),
            SubmitOutcome::InsertFailed { message, .. } => Err(SubmitError::Insert(message)),
        }
    }
}

/// Sends drafts to a [`StorageGateway`].
///
/// Generic over the gateway so memorial-core never depends on the HTTP
/// adapter in memorial-infra.
pub struct SubmissionWorkflow<G: StorageGateway> {
    gateway: G,
    bucket: String,
    table: String,
}

impl<G: StorageGateway> SubmissionWorkflow<G> {
    /// Workflow targeting the default bucket and table.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            bucket: SUBMISSION_BUCKET.to_string(),
            table: SUBMISSION_TABLE.to_string(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Run one submit attempt for `draft`.
    ///
    /// Does not check required fields or re-entry; that is the form's job.
    pub async fn submit(&self, draft: &DraftSubmission) -> SubmitOutcome {
        let stored = match &draft.file {
            Some(file) => {
                let name = generate_stored_name(file);
                debug!(
                    bucket = %self.bucket,
                    name = %name,
                    size_bytes = file.size_bytes(),
                    "uploading attachment"
                );
                if let Err(err) = self
                    .gateway
                    .upload_blob(&self.bucket, name.as_str(), &file.data)
                    .await
                {
                    warn!(name = %name, "attachment upload failed: {err}");
                    return SubmitOutcome::UploadFailed {
                        message: err.message,
                    };
                }
                debug!(name = %name, "attachment uploaded");
                Some(name)
            }
            None => None,
        };

        let record = SubmissionRecord::from_draft(draft, stored.as_ref());
        debug!(table = %self.table, has_file = stored.is_some(), "inserting submission record");
        match self.gateway.insert_record(&self.table, &record).await {
            Ok(()) => {
                info!(
                    table = %self.table,
                    tags = draft.tags.len(),
                    has_file = stored.is_some(),
                    "memory submitted"
                );
                SubmitOutcome::Succeeded { stored }
            }
            Err(err) => {
                if let Some(name) = &stored {
                    warn!(orphaned = %name, "record insert failed after upload: {err}");
                } else {
                    warn!("record insert failed: {err}");
                }
                SubmitOutcome::InsertFailed {
                    stored,
                    message: err.message,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingGateway;
    use memorial_types::submission::SelectedFile;

    fn draft(file: Option<SelectedFile>) -> DraftSubmission {
        DraftSubmission {
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            notify_when_ready: true,
            memory: "Sunday drives to the coast.".to_string(),
            tags: ["1985", "Springfield"].into_iter().collect(),
            file,
        }
    }

    fn photo() -> SelectedFile {
        SelectedFile::new("lake.jpg", vec![7; 32])
    }

    #[tokio::test]
    async fn no_file_skips_upload() {
        let workflow = SubmissionWorkflow::new(RecordingGateway::new());
        let outcome = workflow.submit(&draft(None)).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded { stored: None });
        assert!(workflow.gateway().uploads().is_empty());
        let inserts = workflow.gateway().inserts();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].0, "memorial_submissions");
        assert_eq!(inserts[0].1.file_path, None);
        assert_eq!(inserts[0].1.tags.as_deref(), Some("1985; Springfield"));
        assert_eq!(inserts[0].1.recaptcha_token, "local-test");
    }

    #[tokio::test]
    async fn file_is_uploaded_before_insert() {
        let workflow = SubmissionWorkflow::new(RecordingGateway::new());
        let outcome = workflow.submit(&draft(Some(photo()))).await;

        let stored = outcome.stored_reference().cloned().unwrap();
        assert!(stored.as_str().ends_with(".jpg"));

        let uploads = workflow.gateway().uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].bucket, "memorial-submissions");
        assert_eq!(uploads[0].name, stored.as_str());
        assert_eq!(uploads[0].size, 32);

        let inserts = workflow.gateway().inserts();
        assert_eq!(inserts[0].1.file_path.as_deref(), Some(stored.as_str()));
    }

    #[tokio::test]
    async fn upload_failure_stops_before_insert() {
        let workflow =
            SubmissionWorkflow::new(RecordingGateway::failing_upload("Bucket not found"));
        let outcome = workflow.submit(&draft(Some(photo()))).await;

        assert_eq!(
            outcome,
            SubmitOutcome::UploadFailed {
                message: "Bucket not found".to_string()
            }
        );
        assert!(workflow.gateway().inserts().is_empty());
        assert_eq!(
            outcome.into_result().unwrap_err().to_string(),
            "File upload failed: Bucket not found"
        );
    }

    #[tokio::test]
    async fn insert_failure_keeps_orphaned_name() {
        let workflow =
            SubmissionWorkflow::new(RecordingGateway::failing_insert("new row violates policy"));
        let outcome = workflow.submit(&draft(Some(photo()))).await;

        let orphan = outcome.stored_reference().cloned();
        assert!(orphan.is_some());
        assert!(!outcome.is_success());
        assert_eq!(workflow.gateway().uploads().len(), 1);
        assert_eq!(
            outcome.into_result().unwrap_err(),
            SubmitError::Insert("new row violates policy".to_string())
        );
    }

    #[tokio::test]
    async fn empty_tags_insert_null() {
        let workflow = SubmissionWorkflow::new(RecordingGateway::new());
        let mut d = draft(None);
        d.tags = Default::default();
        workflow.submit(&d).await;
        assert_eq!(workflow.gateway().inserts()[0].1.tags, None);
    }

    #[tokio::test]
    async fn custom_bucket_and_table() {
        let workflow = SubmissionWorkflow::new(RecordingGateway::new())
            .with_bucket("staging-uploads")
            .with_table("staging_submissions");
        workflow.submit(&draft(Some(photo()))).await;
        assert_eq!(workflow.gateway().uploads()[0].bucket, "staging-uploads");
        assert_eq!(workflow.gateway().inserts()[0].0, "staging_submissions");
    }
}
