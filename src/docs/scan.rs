//! Filesystem primitives for the documentation check.
//!
//! None of these functions return errors. A failed read degrades to an
//! empty or zero result and is logged, so a single unreadable entry can
//! never abort the check.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::catalog::DOC_EXTENSION;

/// Size of a documentation file, if it could be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSize {
    /// The file was stat'ed successfully.
    Found(u64),
    /// The file could not be stat'ed.
    NotFound,
}

impl FileSize {
    /// Size in bytes, treating an unreadable file as empty.
    pub fn bytes(self) -> u64 {
        match self {
            Self::Found(bytes) => bytes,
            Self::NotFound => 0,
        }
    }
}

/// Check whether the path exists and is accessible.
///
/// A regular file at `path` also counts; listing it later yields nothing.
pub fn directory_exists(path: &Path) -> bool {
    path.exists()
}

/// List documentation file names in `path`, sorted lexicographically.
///
/// Only entries whose name ends with [`DOC_EXTENSION`] are returned. Names
/// that are not valid UTF-8 are skipped. A read failure is logged and
/// yields an empty list.
pub fn list_docs(path: &Path) -> Vec<String> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Error reading documentation directory {}: {}",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    let mut docs: Vec<String> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => entry.file_name().into_string().ok(),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", path.display(), e);
                None
            }
        })
        .filter(|name| name.ends_with(DOC_EXTENSION))
        .collect();
    docs.sort();

    debug!("Found {} documentation files in {}", docs.len(), path.display());
    docs
}

/// Stat a file for its size.
pub fn file_size(path: &Path) -> FileSize {
    match fs::metadata(path) {
        Ok(meta) => FileSize::Found(meta.len()),
        Err(e) => {
            debug!("Could not stat {}: {}", path.display(), e);
            FileSize::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directory_exists_for_existing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(directory_exists(temp.path()));
    }

    #[test]
    fn directory_exists_false_for_missing_path() {
        let temp = TempDir::new().unwrap();
        assert!(!directory_exists(&temp.path().join("nope")));
    }

    #[test]
    fn directory_exists_true_for_regular_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("docs");
        fs::write(&file, "not a dir").unwrap();
        assert!(directory_exists(&file));
    }

    #[test]
    fn list_docs_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        for name in ["Table.mdx", "Button.mdx", "README.md", "Modal.mdx.bak", "Avatar.mdx"] {
            fs::write(temp.path().join(name), "# doc").unwrap();
        }

        let docs = list_docs(temp.path());

        assert_eq!(docs, vec!["Avatar.mdx", "Button.mdx", "Table.mdx"]);
    }

    #[test]
    fn list_docs_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(list_docs(temp.path()).is_empty());
    }

    #[test]
    fn list_docs_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_docs(&temp.path().join("missing")).is_empty());
    }

    #[test]
    fn list_docs_on_regular_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Button.mdx");
        fs::write(&file, "content").unwrap();
        assert!(list_docs(&file).is_empty());
    }

    #[test]
    fn list_docs_is_deterministic() {
        let temp = TempDir::new().unwrap();
        for name in ["Select.mdx", "Modal.mdx", "Tabs.mdx"] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        assert_eq!(list_docs(temp.path()), list_docs(temp.path()));
    }

    #[test]
    fn file_size_reports_length() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Button.mdx");
        fs::write(&file, "12345").unwrap();
        assert_eq!(file_size(&file), FileSize::Found(5));
        assert_eq!(file_size(&file).bytes(), 5);
    }

    #[test]
    fn file_size_missing_is_zero() {
        let temp = TempDir::new().unwrap();
        let size = file_size(&temp.path().join("Gone.mdx"));
        assert_eq!(size, FileSize::NotFound);
        assert_eq!(size.bytes(), 0);
    }
}
