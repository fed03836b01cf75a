//! Documentation completeness checking.
//!
//! - [`catalog`] - The expected component documentation names
//! - [`scan`] - Lenient filesystem primitives
//! - [`report`] - Comparison of expected names against discovered files

pub mod catalog;
pub mod report;
pub mod scan;

pub use catalog::{DocCatalog, DOC_EXTENSION, ESSENTIAL_DOCS, RECOMMENDED_DOCS};
pub use report::{CheckReport, DocCheck, DocPresence};
pub use scan::{directory_exists, file_size, list_docs, FileSize};
