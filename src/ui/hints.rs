//! Remediation hints for documentation that is missing or out of sync.

use crate::config::DEFAULT_DOCS_DIR;

/// Hints when the documentation directory does not exist.
pub fn missing_directory() -> Vec<String> {
    vec![
        "If in monorepo: Run `yarn sync:docs` to copy documentation".to_string(),
        format!(
            "If standalone: Ensure {} is included in the repo",
            DEFAULT_DOCS_DIR
        ),
    ]
}

/// Hints when the directory exists but holds no documentation files.
pub fn no_docs_found() -> Vec<String> {
    vec![
        "If in monorepo: Run `yarn sync:docs`".to_string(),
        "If standalone: Ensure .mdx files are included".to_string(),
    ]
}

/// Hints when essential documentation is missing.
pub fn sync_docs() -> Vec<String> {
    vec![
        "Monorepo: Run `yarn sync:docs`".to_string(),
        format!(
            "Standalone: Ensure all .mdx files are in {}/",
            DEFAULT_DOCS_DIR
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_mentions_sync_and_dir() {
        let hints = missing_directory();
        assert!(hints.iter().any(|h| h.contains("yarn sync:docs")));
        assert!(hints.iter().any(|h| h.contains(".component-documentation")));
    }

    #[test]
    fn no_docs_found_mentions_extension() {
        assert!(no_docs_found().iter().any(|h| h.contains(".mdx")));
    }

    #[test]
    fn sync_docs_mentions_both_setups() {
        let hints = sync_docs();
        assert!(hints[0].starts_with("Monorepo"));
        assert!(hints[1].starts_with("Standalone"));
    }
}
