//! Ordered, duplicate-free tag set attached to a memory submission.

use serde::{Deserialize, Serialize};

/// Separator used when tags are flattened into a single column.
pub const TAG_SEPARATOR: &str = "; ";

/// Insertion-ordered set of free-text labels.
///
/// Entries are always trimmed, non-empty, and unique (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Trim `candidate` and append it.
    ///
    /// Returns `false` (and leaves the set untouched) when the trimmed value
    /// is empty or already present.
    pub fn insert(&mut self, candidate: &str) -> bool {
        let trimmed = candidate.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.0.push(trimmed.to_string());
        true
    }

    /// Remove an exact match. Returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Flatten into the single-column form stored remotely.
    ///
    /// An empty set serializes to `None`, never to an empty string.
    pub fn serialize_joined(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(TAG_SEPARATOR))
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}
