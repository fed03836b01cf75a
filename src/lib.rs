//! docsync - Check that design-system component documentation is synced.
//!
//! docsync verifies that a project's component documentation directory
//! exists and holds the documentation files its components rely on. A
//! fixed set of essential documents must be present for the check to pass;
//! a set of recommended documents is reported but never fails the check.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Documentation directory resolution
//! - [`docs`] - Expected documentation, filesystem scanning, and reports
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use docsync::docs::{CheckReport, DocCatalog};
//! use std::path::Path;
//!
//! let discovered = vec!["Button.mdx".to_string(), "Table.mdx".to_string()];
//! let report = CheckReport::build(&DocCatalog::default(), Path::new("docs"), discovered);
//! assert_eq!(report.essential_present(), 2);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod ui;

pub use error::{DocSyncError, Result};
