use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum catalog/config file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a file after checking that it is a regular, non-symlinked file
/// within `MAX_FILE_SIZE`.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human-readable name used in error messages (e.g. "catalog file")
///
/// # Errors
/// Returns `CatalogError::SecurityError` for symlinks and oversized files,
/// and a plain error when metadata or content cannot be read.
pub fn read_checked_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point to the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

fn validate_file_size(file_size: u64, path: &Path) -> Result<()> {
    if file_size > MAX_FILE_SIZE {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, MAX_FILE_SIZE
            ),
            hint: "Split the catalog or export only the categories you need".to_string(),
        }
        .into());
    }
    Ok(())
}
