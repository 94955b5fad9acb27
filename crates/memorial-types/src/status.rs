//! Form status shown to the contributor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which view the submission form renders.
///
/// Allowed transitions:
/// - Editing -> Submitting
/// - Submitting -> Succeeded | Failed
/// - Failed -> Editing (user edits) or Submitting (user retries)
///
/// Succeeded is terminal for a form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed { message: String },
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Error text to show inline, if the last attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Whether a new submit attempt may start from this status.
    pub fn can_start_submit(&self) -> bool {
        matches!(self, FormStatus::Editing | FormStatus::Failed { .. })
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormStatus::Editing => write!(f, "editing"),
            FormStatus::Submitting => write!(f, "submitting"),
            FormStatus::Succeeded => write!(f, "succeeded"),
            FormStatus::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}
