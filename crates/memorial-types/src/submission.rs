//! Memory submission types.
//!
//! A [`DraftSubmission`] is the in-memory form state for one contribution.
//! A [`SubmissionRecord`] is its flattened, write-only projection as stored
//! by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::TagSet;

/// Storage bucket that receives uploaded attachments.
pub const SUBMISSION_BUCKET: &str = "memorial-submissions";

/// Table that receives submission records.
pub const SUBMISSION_TABLE: &str = "memorial_submissions";

/// Value sent in the anti-abuse token column.
///
/// Verification is bypassed; the backend accepts this placeholder while no
/// production token flow exists.
pub const ANTI_ABUSE_PLACEHOLDER: &str = "local-test";

/// A local file chosen for upload alongside a memory.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name as chosen by the user (no directory component).
    pub file_name: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    /// Extension used when naming the stored blob.
    ///
    /// Everything after the last `.`; a name without a dot yields the whole
    /// name.
    pub fn extension(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => &self.file_name,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

// File contents are left out of Debug output.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("size_bytes", &self.data.len())
            .finish()
    }
}

/// Not-yet-persisted user input for one memory contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSubmission {
    pub name: String,
    pub email: String,
    /// Whether the contributor wants to hear when the full archive is ready.
    pub notify_when_ready: bool,
    pub memory: String,
    pub tags: TagSet,
    pub file: Option<SelectedFile>,
}

impl Default for DraftSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            notify_when_ready: true,
            memory: String::new(),
            tags: TagSet::new(),
            file: None,
        }
    }
}

impl DraftSubmission {
    /// First required field that is blank, if any.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("memory", &self.memory),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Opaque name of an uploaded blob inside the submission bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredReference(pub String);

impl StoredReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoredReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submission as persisted in the backend table.
///
/// Field names match the table's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub notify_when_ready: bool,
    pub memory: String,
    /// Tags joined with `"; "`, or null when there are none.
    pub tags: Option<String>,
    pub file_path: Option<String>,
    pub recaptcha_token: String,
}

impl SubmissionRecord {
    /// Project a draft into its stored form.
    pub fn from_draft(draft: &DraftSubmission, file: Option<&StoredReference>) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            notify_when_ready: draft.notify_when_ready,
            memory: draft.memory.clone(),
            tags: draft.tags.serialize_joined(),
            file_path: file.map(|r| r.0.clone()),
            recaptcha_token: ANTI_ABUSE_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> DraftSubmission {
        DraftSubmission {
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            notify_when_ready: false,
            memory: "He taught me to fish.".to_string(),
            tags: ["1985", "Springfield"].into_iter().collect(),
            file: None,
        }
    }

    #[test]
    fn test_default_draft_notifies() {
        let draft = DraftSubmission::default();
        assert!(draft.notify_when_ready);
        assert!(draft.tags.is_empty());
        assert!(draft.file.is_none());
    }

    #[test]
    fn test_extension_rules() {
        assert_eq!(SelectedFile::new("photo.jpeg", vec![]).extension(), "jpeg");
        assert_eq!(SelectedFile::new("scan.final.pdf", vec![]).extension(), "pdf");
        assert_eq!(SelectedFile::new("README", vec![]).extension(), "README");
        assert_eq!(SelectedFile::new("trailing.", vec![]).extension(), "");
    }

    #[test]
    fn test_debug_omits_contents() {
        let file = SelectedFile::new("a.txt", b"secret bytes".to_vec());
        let debug = format!("{file:?}");
        assert!(debug.contains("a.txt"));
        assert!(debug.contains("size_bytes: 12"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_missing_required_field() {
        let mut draft = sample_draft();
        assert_eq!(draft.missing_required_field(), None);
        draft.email = "   ".to_string();
        assert_eq!(draft.missing_required_field(), Some("email"));
        draft.name.clear();
        assert_eq!(draft.missing_required_field(), Some("name"));
    }

    #[test]
    fn test_record_from_draft_without_file() {
        let record = SubmissionRecord::from_draft(&sample_draft(), None);
        assert_eq!(record.tags.as_deref(), Some("1985; Springfield"));
        assert_eq!(record.file_path, None);
        assert_eq!(record.recaptcha_token, ANTI_ABUSE_PLACEHOLDER);
        assert!(!record.notify_when_ready);
    }

    #[test]
    fn test_record_serializes_nulls() {
        let mut draft = sample_draft();
        draft.tags = TagSet::new();
        let record = SubmissionRecord::from_draft(&draft, None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["tags"].is_null());
        assert!(json["file_path"].is_null());
        assert_eq!(json["notify_when_ready"], false);
        assert_eq!(json["recaptcha_token"], "local-test");
    }

    #[test]
    fn test_record_carries_stored_reference() {
        let reference = StoredReference("1700000000000-abc12.pdf".to_string());
        let record = SubmissionRecord::from_draft(&sample_draft(), Some(&reference));
        assert_eq!(record.file_path.as_deref(), Some("1700000000000-abc12.pdf"));
    }
}
