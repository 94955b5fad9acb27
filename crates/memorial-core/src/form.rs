//! "Share a Memory" form state.
//!
//! `MemorialForm` owns one draft (fields, tag editor, file selector) and the
//! single [`FormStatus`] that decides what the contributor sees. The status
//! only changes through [`MemorialForm::submit`] and through edits after a
//! failure.

use memorial_types::error::SubmitError;
use memorial_types::status::FormStatus;
use memorial_types::submission::{DraftSubmission, SelectedFile, StoredReference};
use tracing::debug;

use crate::file_select::FileSelector;
use crate::storage::gateway::StorageGateway;
use crate::submission::workflow::SubmissionWorkflow;
use crate::tags::{TagEditor, TagKey};

/// Form state for one memory contribution.
#[derive(Debug, Clone)]
pub struct MemorialForm {
    name: String,
    email: String,
    notify_when_ready: bool,
    memory: String,
    tags: TagEditor,
    file: FileSelector,
    status: FormStatus,
    /// Blob uploaded by the most recent attempt, kept even if the insert failed.
    last_stored_reference: Option<StoredReference>,
}

impl Default for MemorialForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorialForm {
    /// Open an empty form. Notification opt-in starts checked.
    pub fn new() -> Self {
        let draft = DraftSubmission::default();
        Self {
            name: draft.name,
            email: draft.email,
            notify_when_ready: draft.notify_when_ready,
            memory: draft.memory,
            tags: TagEditor::new(),
            file: FileSelector::new(),
            status: FormStatus::Editing,
            last_stored_reference: None,
        }
    }

    // --- Field edits ---

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    pub fn set_notify_when_ready(&mut self, notify: bool) {
        self.notify_when_ready = notify;
        self.touch();
    }

    pub fn set_memory(&mut self, memory: impl Into<String>) {
        self.memory = memory.into();
        self.touch();
    }

    pub fn set_pending_tag(&mut self, text: impl Into<String>) {
        self.tags.set_pending(text);
        self.touch();
    }

    pub fn add_tag(&mut self, candidate: &str) -> bool {
        self.touch();
        self.tags.add(candidate)
    }

    pub fn add_pending_tag(&mut self) -> bool {
        self.touch();
        self.tags.add_pending()
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.touch();
        self.tags.remove(tag)
    }

    /// Route a key press from the tag input. Returns whether it was consumed.
    pub fn tag_key(&mut self, key: TagKey) -> bool {
        self.touch();
        self.tags.handle_key(key)
    }

    pub fn select_files<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        self.file.select(files);
        self.touch();
    }

    pub fn clear_file(&mut self) {
        self.file.clear();
        self.touch();
    }

    /// Leave the failed view once the contributor edits anything.
    fn touch(&mut self) {
        if matches!(self.status, FormStatus::Failed { .. }) {
            self.status = FormStatus::Editing;
        }
    }

    // --- Reads ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn notify_when_ready(&self) -> bool {
        self.notify_when_ready
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn tags(&self) -> &TagEditor {
        &self.tags
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.current()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn last_stored_reference(&self) -> Option<&StoredReference> {
        self.last_stored_reference.as_ref()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status.can_start_submit()
    }

    /// Snapshot of the current input as a draft.
    pub fn draft(&self) -> DraftSubmission {
        DraftSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            notify_when_ready: self.notify_when_ready,
            memory: self.memory.clone(),
            tags: self.tags.tags().clone(),
            file: self.file.current().cloned(),
        }
    }

    // --- Submit ---

    /// Validate and send the draft through `workflow`.
    ///
    /// Blank required fields and re-entry are rejected without touching the
    /// status. Gateway failures move the form to `Failed` and are also
    /// returned; the draft itself is left unchanged so the contributor can
    /// retry.
    pub async fn submit<G: StorageGateway>(
        &mut self,
        workflow: &SubmissionWorkflow<G>,
    ) -> Result<(), SubmitError> {
        match self.status {
            FormStatus::Submitting => return Err(SubmitError::AlreadySubmitting),
            FormStatus::Succeeded => return Err(SubmitError::AlreadySubmitted),
            FormStatus::Editing | FormStatus::Failed { .. } => {}
        }

        let draft = self.draft();
        if let Some(field) = draft.missing_required_field() {
            debug!(field, "submit blocked by empty required field");
            return Err(SubmitError::MissingField(field));
        }

        self.status = FormStatus::Submitting;
        let outcome = workflow.submit(&draft).await;
        self.last_stored_reference = outcome.stored_reference().cloned();

        match outcome.into_result() {
            Ok(_) => {
                self.status = FormStatus::Succeeded;
                Ok(())
            }
            Err(err) => {
                self.status = FormStatus::Failed {
                    message: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// Thank-you text shown after a successful submit.
    pub fn success_message(&self, honoree: &str) -> String {
        let mut message = format!(
            "Your memory has been received and will be part of {honoree}'s lasting legacy."
        );
        if self.notify_when_ready {
            message.push_str(" We'll notify you when the full archive is ready.");
        }
        message
    }

    /// Close the form, discarding the draft.
    pub fn close(self) -> FormStatus {
        debug!(status = %self.status, "memorial form closed");
        self.status
    }
}
