//! Check configuration.
//!
//! The only runtime setting is where the documentation lives. The expected
//! names and the extension are compiled in (see [`crate::docs::catalog`]).

use std::path::{Path, PathBuf};

use crate::docs::DocCatalog;
use crate::error::{DocSyncError, Result};

/// Documentation directory name, relative to the project root.
pub const DEFAULT_DOCS_DIR: &str = ".component-documentation";

/// Environment variable overriding the documentation directory.
pub const DOCS_DIR_ENV: &str = "DOCSYNC_DOCS_DIR";

/// Resolve the project root: the explicit path, or the current directory.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Resolved settings for a documentation check.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Directory containing the component documentation.
    pub docs_dir: PathBuf,
    /// Expected documentation names.
    pub catalog: DocCatalog,
}

impl CheckConfig {
    /// Resolve the configuration for a project.
    ///
    /// A relative `docs_dir` override is joined onto `project_root`; an
    /// absolute one is used as is. Without an override the default
    /// directory under the project root is used.
    pub fn resolve(project_root: &Path, docs_dir: Option<&Path>) -> Result<Self> {
        let docs_dir = match docs_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err(DocSyncError::InvalidDocsDir {
                    path: dir.to_path_buf(),
                    message: "path is empty".to_string(),
                });
            }
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => project_root.join(dir),
            None => project_root.join(DEFAULT_DOCS_DIR),
        };

        tracing::debug!("Documentation directory: {}", docs_dir.display());

        Ok(Self {
            docs_dir,
            catalog: DocCatalog::default(),
        })
    }
}
