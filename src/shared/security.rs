use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
/// This prevents DoS attacks via excessively large files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a whole file as UTF-8 after checking that it is a regular,
/// non-symlinked file no larger than [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - File to read
/// * `file_description` - Human readable name used in error messages
///   (e.g. "licenses-npm.json", "report template")
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    read_checked(path, file_description, &metadata)
}

/// Like [`read_regular_file`], but resolves symbolic links first.
///
/// The link target must still be a regular file within [`MAX_FILE_SIZE`].
/// Used for checked-out assets such as the report template, which are
/// commonly linked into the project.
pub fn read_file_following_symlinks(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    read_checked(path, file_description, &metadata)
}

fn read_checked(path: &Path, file_description: &str, metadata: &fs::Metadata) -> Result<String> {
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("SOUP.md");
        fs::write(&file_path, "test").unwrap();

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/file.txt");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "[]").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = read_regular_file(&link, "inventory").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_file_following_symlinks_reads_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.md");
        let link = temp_dir.path().join("link.md");
        fs::write(&target, "# SOUP").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(
            read_file_following_symlinks(&link, "report template").unwrap(),
            "# SOUP"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_read_file_following_symlinks_rejects_linked_directory() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("dir-link");
        std::os::unix::fs::symlink(temp_dir.path(), &link).unwrap();

        let err = read_file_following_symlinks(&link, "report template").unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("licenses-poetry.json");
        fs::write(&file_path, "[]").unwrap();

        assert_eq!(read_regular_file(&file_path, "inventory").unwrap(), "[]");
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_regular_file(temp_dir.path(), "inventory").unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.txt");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
