use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum file size for JSONL transcripts: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size check applies to the same file
/// that is read afterwards.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Open a transcript file for reading, rejecting directories and oversized files
pub fn safe_open_file(path: &Path) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    validate_file_size(&file, path)?;

    Ok(file)
}
