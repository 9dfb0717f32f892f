//! Rewrites a text file in place with a fixed decoration.

use crate::env::{FileEnv, RealFileEnv};
use crate::error::Result;
use std::path::Path;
use tracing::debug;

pub const PREFIX: &str = "Check this out: ";
pub const SUFFIX: &str = " BAM!";

/// The decorated form of `contents`
pub fn decorate(contents: &str) -> String {
    format!("{PREFIX}{}{SUFFIX}", contents.trim())
}

/// Decorate the file at `path` on the real file system
pub fn update_file_via_path(path: impl AsRef<Path>) -> Result<String> {
    update_file(&RealFileEnv::new(), path.as_ref())
}

/// Read, decorate, write back, and return the new contents
///
/// Not idempotent: a second call decorates the already decorated text.
pub fn update_file<E: FileEnv + ?Sized>(fs: &E, path: &Path) -> Result<String> {
    let contents = fs.read_to_string(path)?;
    let new_contents = decorate(&contents);
    fs.write(path, &new_contents)?;

    debug!(path = %path.display(), bytes = new_contents.len(), "Updated file");
    Ok(new_contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockFileEnv;
    use crate::error::Error;

    #[test]
    fn test_decorate_trims_whitespace() {
        assert_eq!(
            decorate("  Awesome test data!\n"),
            "Check this out: Awesome test data! BAM!"
        );
    }

    #[test]
    fn test_update_file_persists_return_value() {
        let fs = MockFileEnv::new();
        fs.add_file("infile.txt", "Awesome test data!\n");

        let returned = update_file(&fs, Path::new("infile.txt")).unwrap();

        assert_eq!(returned, "Check this out: Awesome test data! BAM!");
        assert_eq!(fs.file("infile.txt"), Some(returned));
    }

    #[test]
    fn test_update_file_twice_doubles_decoration() {
        let fs = MockFileEnv::new();
        fs.add_file("infile.txt", "data");

        update_file(&fs, Path::new("infile.txt")).unwrap();
        let second = update_file(&fs, Path::new("infile.txt")).unwrap();

        assert_eq!(second, "Check this out: Check this out: data BAM! BAM!");
    }

    #[test]
    fn test_update_missing_file_propagates_io_error() {
        let fs = MockFileEnv::new();
        let err = update_file(&fs, Path::new("missing.txt")).unwrap_err();
        match err {
            Error::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let fs = MockFileEnv::new();
        fs.add_file("infile.txt", "data");
        fs.set_write_error("infile.txt", "disk full");

        let err = update_file(&fs, Path::new("infile.txt")).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(fs.file("infile.txt").as_deref(), Some("data"));
    }

    #[test]
    fn test_empty_file() {
        let fs = MockFileEnv::new();
        fs.add_file("empty.txt", "");
        assert_eq!(
            update_file(&fs, Path::new("empty.txt")).unwrap(),
            "Check this out:  BAM!"
        );
    }
}
