//! Comparison of expected documentation against discovered files.

use std::collections::HashSet;
use std::path::Path;

use super::catalog::{component_name, doc_file_name, DocCatalog};
use super::scan::{file_size, FileSize};

/// Whether an expected document was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocPresence {
    /// Found; size is recorded for essential documents only.
    Present(Option<FileSize>),
    /// Not in the discovered set.
    Missing,
}

/// Result of checking one expected document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocCheck {
    /// Component name without extension.
    pub name: &'static str,
    /// Documentation file name (name plus extension).
    pub file_name: String,
    /// Presence in the documentation directory.
    pub presence: DocPresence,
}

impl DocCheck {
    /// Whether the document was found.
    pub fn is_present(&self) -> bool {
        matches!(self.presence, DocPresence::Present(_))
    }
}

/// Outcome of comparing a catalog with the files in a documentation directory.
#[derive(Debug, Clone)]
pub struct CheckReport {
    discovered: Vec<String>,
    essential: Vec<DocCheck>,
    recommended: Vec<DocCheck>,
}

impl CheckReport {
    /// Build a report for `discovered` file names found in `docs_dir`.
    ///
    /// Essential documents that are present are stat'ed once each for their
    /// size; recommended documents are not.
    pub fn build(catalog: &DocCatalog, docs_dir: &Path, discovered: Vec<String>) -> Self {
        let found: HashSet<&str> = discovered.iter().map(String::as_str).collect();

        let essential = catalog
            .essential
            .iter()
            .map(|&name| {
                let file_name = doc_file_name(name);
                let presence = if found.contains(file_name.as_str()) {
                    DocPresence::Present(Some(file_size(&docs_dir.join(&file_name))))
                } else {
                    DocPresence::Missing
                };
                DocCheck {
                    name,
                    file_name,
                    presence,
                }
            })
            .collect();

        let recommended = catalog
            .recommended
            .iter()
            .map(|&name| {
                let file_name = doc_file_name(name);
                let presence = if found.contains(file_name.as_str()) {
                    DocPresence::Present(None)
                } else {
                    DocPresence::Missing
                };
                DocCheck {
                    name,
                    file_name,
                    presence,
                }
            })
            .collect();

        Self {
            discovered,
            essential,
            recommended,
        }
    }

    /// All discovered documentation file names, sorted.
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    /// Discovered component names with the extension stripped.
    pub fn component_names(&self) -> Vec<&str> {
        self.discovered
            .iter()
            .map(|f| component_name(f).unwrap_or(f))
            .collect()
    }

    /// Per-item results for essential documentation, in catalog order.
    pub fn essential(&self) -> &[DocCheck] {
        &self.essential
    }

    /// Per-item results for recommended documentation, in catalog order.
    pub fn recommended(&self) -> &[DocCheck] {
        &self.recommended
    }

    /// Essential documents that were not found.
    pub fn missing_essential(&self) -> Vec<&DocCheck> {
        self.essential.iter().filter(|c| !c.is_present()).collect()
    }

    /// Recommended documents that were not found.
    pub fn missing_recommended(&self) -> Vec<&DocCheck> {
        self.recommended.iter().filter(|c| !c.is_present()).collect()
    }

    /// Number of essential documents present.
    pub fn essential_present(&self) -> usize {
        self.essential.iter().filter(|c| c.is_present()).count()
    }

    /// Number of recommended documents present.
    pub fn recommended_present(&self) -> usize {
        self.recommended.iter().filter(|c| c.is_present()).count()
    }

    /// Whether every essential document is present.
    pub fn is_complete(&self) -> bool {
        self.essential.iter().all(DocCheck::is_present)
    }

    /// Process exit code: 0 when complete, 1 otherwise.
    ///
    /// Recommended documents never affect it.
    pub fn exit_code(&self) -> i32 {
        if self.is_complete() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::catalog::{ESSENTIAL_DOCS, RECOMMENDED_DOCS};
    use std::fs;
    use tempfile::TempDir;

    fn files(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|n| format!("{}.mdx", n)).collect();
        v.sort();
        v
    }

    fn build(names: &[&str]) -> CheckReport {
        let temp = TempDir::new().unwrap();
        CheckReport::build(&DocCatalog::default(), temp.path(), files(names))
    }

    #[test]
    fn partial_essential_counts() {
        let report = build(&["Button", "Table"]);

        assert_eq!(report.essential_present(), 2);
        assert_eq!(report.missing_essential().len(), 5);
        assert!(!report.is_complete());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn all_essential_passes_without_recommended() {
        let report = build(ESSENTIAL_DOCS);

        assert_eq!(report.essential_present(), 7);
        assert_eq!(report.recommended_present(), 0);
        assert_eq!(report.missing_recommended().len(), 9);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn recommended_never_changes_exit_code() {
        let mut with_recommended: Vec<&str> = ESSENTIAL_DOCS.to_vec();
        with_recommended.extend_from_slice(RECOMMENDED_DOCS);
        assert_eq!(build(&with_recommended).exit_code(), 0);

        let mut partial: Vec<&str> = vec!["Button"];
        partial.extend_from_slice(RECOMMENDED_DOCS);
        assert_eq!(build(&partial).exit_code(), 1);
        assert_eq!(build(&["Button"]).exit_code(), 1);
    }

    #[test]
    fn missing_essential_preserves_catalog_order() {
        let report = build(&["Button", "Modal", "DesignTokens"]);
        let missing: Vec<&str> = report.missing_essential().iter().map(|c| c.name).collect();
        assert_eq!(missing, vec!["TextInput", "Table", "Select", "ThemeProvider"]);
    }

    #[test]
    fn unknown_docs_are_counted_but_not_matched() {
        let report = build(&["Accordion", "Button"]);
        assert_eq!(report.discovered().len(), 2);
        assert_eq!(report.essential_present(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let report = CheckReport::build(
            &DocCatalog::default(),
            temp.path(),
            vec!["button.mdx".to_string()],
        );
        assert_eq!(report.essential_present(), 0);
    }

    #[test]
    fn component_names_strip_extension() {
        let report = build(&["Table", "Button"]);
        assert_eq!(report.component_names(), vec!["Button", "Table"]);
    }

    #[test]
    fn essential_sizes_are_read_from_disk() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Button.mdx"), "x".repeat(2048)).unwrap();

        let report = CheckReport::build(
            &DocCatalog::default(),
            temp.path(),
            vec!["Button.mdx".to_string()],
        );

        assert_eq!(
            report.essential()[0].presence,
            DocPresence::Present(Some(FileSize::Found(2048)))
        );
    }

    #[test]
    fn essential_size_unreadable_degrades() {
        // Listed but gone by the time it is stat'ed.
        let report = build(&["Button"]);
        assert_eq!(
            report.essential()[0].presence,
            DocPresence::Present(Some(FileSize::NotFound))
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn recommended_presence_has_no_size() {
        let report = build(&["Drawer"]);
        assert_eq!(report.recommended()[0].presence, DocPresence::Present(None));
        assert_eq!(report.recommended()[1].presence, DocPresence::Missing);
    }
}
