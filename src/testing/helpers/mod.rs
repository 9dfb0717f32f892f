//! Test helper functions and custom assertions

pub mod assertions;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory holding the checked-in test data files
pub fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Path of one checked-in test data file
pub fn test_data_path(name: &str) -> PathBuf {
    test_data_dir().join(name)
}

/// Copy a test data file into `dir` under `dest_name`, returning the new path
///
/// Tests mutate the copy, never the checked-in original.
pub fn copy_test_data(name: &str, dir: &Path, dest_name: &str) -> Result<PathBuf> {
    let source = test_data_path(name);
    let content = std::fs::read_to_string(&source)
        .with_context(|| format!("Failed to read test data {}", source.display()))?;
    create_file(dir, dest_name, &content)
}

/// Create a test file with content in a directory
pub fn create_file(dir: &Path, relative_path: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_infile_is_checked_in() {
        assert!(test_data_path("infile.txt").is_file());
    }

    #[test]
    fn test_copy_test_data() {
        let temp_dir = TempDir::new().unwrap();
        let copy = copy_test_data("infile.txt", temp_dir.path(), "testfile.txt").unwrap();

        assert_eq!(copy, temp_dir.path().join("testfile.txt"));
        assert_eq!(
            std::fs::read_to_string(copy).unwrap().trim(),
            "Awesome test data!"
        );
    }

    #[test]
    fn test_copy_missing_test_data() {
        let temp_dir = TempDir::new().unwrap();
        let err = copy_test_data("nope.txt", temp_dir.path(), "x.txt").unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_create_file_nested() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_file(temp_dir.path(), "a/b/c.txt", "content").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}
