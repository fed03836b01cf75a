//! Terminal output for docsync.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI, pipes and other non-TTY output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use docsync::ui::{create_ui, OutputMode, UserInterface};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Documentation Sync Checker");
//! ui.success("All essential documentation files present");
//! ```

pub mod format;
pub mod hints;
pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use format::format_bytes;
pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, DocSyncTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a numbered step heading (e.g., "Step 2: Scanning ...").
    fn show_step(&mut self, number: usize, title: &str);

    /// Show a per-item status line.
    ///
    /// [`StatusKind::Failed`] lines are shown in every output mode.
    fn status_line(&mut self, kind: StatusKind, msg: &str);

    /// Show a remediation hint heading followed by indented detail lines.
    ///
    /// Shown in every output mode.
    fn show_hints(&mut self, title: &str, lines: &[String]);
}
