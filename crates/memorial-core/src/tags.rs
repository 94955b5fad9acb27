//! Tag editor for the submission form.
//!
//! Couples the committed [`TagSet`] with the text the contributor is still
//! typing. Tags are committed with an explicit "add" action or with Enter.

use memorial_types::tag::TagSet;
use tracing::debug;

/// Key events the tag input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Enter,
    Backspace,
    Char(char),
}

/// Editable tag list plus its pending input buffer.
#[derive(Debug, Clone, Default)]
pub struct TagEditor {
    tags: TagSet,
    pending: String,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Commit `candidate` as a tag.
    ///
    /// Blank or duplicate candidates are ignored and leave the pending input
    /// as it was. A committed tag clears the pending input.
    pub fn add(&mut self, candidate: &str) -> bool {
        let added = self.tags.insert(candidate);
        if added {
            self.pending.clear();
            debug!(count = self.tags.len(), "tag added");
        }
        added
    }

    /// Commit whatever is currently in the pending input.
    pub fn add_pending(&mut self) -> bool {
        let candidate = std::mem::take(&mut self.pending);
        let added = self.add(&candidate);
        if !added {
            self.pending = candidate;
        }
        added
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Feed one key event to the tag input.
    ///
    /// Returns `true` when the key was consumed. Enter is always consumed so
    /// it never submits the surrounding form, whether or not a tag was added.
    pub fn handle_key(&mut self, key: TagKey) -> bool {
        match key {
            TagKey::Enter => {
                self.add_pending();
                true
            }
            TagKey::Backspace => {
                self.pending.pop();
                false
            }
            TagKey::Char(c) => {
                self.pending.push(c);
                false
            }
        }
    }

    pub fn into_tags(self) -> TagSet {
        self.tags
    }
}
