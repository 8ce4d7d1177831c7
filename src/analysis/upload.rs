use std::path::Path;

use tracing::{debug, warn};

use super::types::UploadedFile;
use super::UploadError;

/// Uploads above this size are refused.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Stand-in content for files that cannot be read as text.
pub const IMAGE_PLACEHOLDER: &str = "Image file detected - analyzing visual content...";

/// Whether the file's content is read as text (text and PDF types).
pub fn is_text_readable(file: &UploadedFile) -> bool {
    let mime = file.mime_type.to_lowercase();
    mime.contains("text") || mime.contains("pdf")
}

/// Text handed to analysis for a file with the given raw bytes.
pub fn content_for(file: &UploadedFile, bytes: &[u8]) -> String {
    if is_text_readable(file) {
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        IMAGE_PLACEHOLDER.to_string()
    }
}

/// Read an upload from disk: metadata, inferred MIME type and text content.
pub fn read_upload(path: &Path) -> Result<(UploadedFile, String), UploadError> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(UploadError::NotAFile(path.display().to_string()));
    }

    let size_bytes = metadata.len();
    if size_bytes > MAX_UPLOAD_BYTES {
        warn!(size_bytes, "Upload rejected: too large");
        return Err(UploadError::TooLarge {
            size_bytes,
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default();
    let file = UploadedFile::new(name, mime_type, size_bytes);

    let content = if is_text_readable(&file) {
        content_for(&file, &std::fs::read(path)?)
    } else {
        IMAGE_PLACEHOLDER.to_string()
    };

    debug!(name = %file.name, mime = %file.mime_type, size_bytes, "Upload read");
    Ok((file, content))
}

/// Synthetic user message announcing an upload.
pub fn upload_message(file: &UploadedFile) -> String {
    format!("📎 Uploaded file: {} ({:.2} MB)", file.name, file.size_mb())
}
