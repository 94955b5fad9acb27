//! Single-file attachment selector.

use std::path::Path;

use memorial_types::submission::SelectedFile;

/// File kinds the picker suggests: images, PDF and Word documents.
///
/// Advisory only; nothing is rejected for falling outside it.
pub const SUGGESTED_ACCEPT: &str = "image/*,.pdf,.doc,.docx";

const SUGGESTED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "heic",
    "svg",
];

/// Holds at most one chosen file.
#[derive(Debug, Clone, Default)]
pub struct FileSelector {
    current: Option<SelectedFile>,
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a picker result.
    ///
    /// The first file replaces any prior choice; an empty result (the picker
    /// was dismissed) keeps the prior choice.
    pub fn select<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        if let Some(file) = files.into_iter().next() {
            self.current = Some(file);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&SelectedFile> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<SelectedFile> {
        self.current.take()
    }
}

/// Whether `file_name` matches the picker's suggested file kinds.
pub fn is_suggested(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUGGESTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, vec![1, 2, 3])
    }

    #[test]
    fn reselect_replaces() {
        let mut selector = FileSelector::new();
        selector.select([file("a.png")]);
        selector.select([file("b.pdf")]);
        assert_eq!(selector.current().unwrap().file_name, "b.pdf");
    }

    #[test]
    fn only_first_of_many_is_kept() {
        let mut selector = FileSelector::new();
        selector.select([file("first.jpg"), file("second.jpg")]);
        assert_eq!(selector.current().unwrap().file_name, "first.jpg");
    }

    #[test]
    fn empty_selection_keeps_prior() {
        let mut selector = FileSelector::new();
        selector.select([file("a.png")]);
        selector.select(Vec::new());
        assert_eq!(selector.current().unwrap().file_name, "a.png");
    }

    #[test]
    fn clear_and_take() {
        let mut selector = FileSelector::new();
        selector.select([file("a.png")]);
        assert!(selector.take().is_some());
        assert!(selector.current().is_none());
        selector.select([file("b.png")]);
        selector.clear();
        assert!(selector.current().is_none());
    }

    #[test]
    fn suggested_kinds() {
        assert!(is_suggested("photo.JPG"));
        assert!(is_suggested("letter.docx"));
        assert!(is_suggested("scan.pdf"));
        assert!(!is_suggested("song.mp3"));
        assert!(!is_suggested("README"));
    }
}
