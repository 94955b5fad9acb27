//! Attachment helpers shared by the gateway and the CLI.

use std::path::Path;

use memorial_types::submission::SelectedFile;

/// Detect MIME type from file extension.
///
/// Sent as the upload's `Content-Type` so the bucket serves the blob back
/// with a sensible type.
pub fn detect_mime(filename: &str) -> String {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",

        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "rtf" => "application/rtf",

        // Audio / video
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",

        // Default
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Read a local file into a [`SelectedFile`].
///
/// The stored file name is the path's final component.
pub async fn load_selected_file(path: &Path) -> std::io::Result<SelectedFile> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("'{}' has no usable file name", path.display()),
            )
        })?
        .to_string();

    let data = tokio::fs::read(path).await?;
    Ok(SelectedFile::new(file_name, data))
}
