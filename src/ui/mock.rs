//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use docsync::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking documentation");
//! ui.status_line(StatusKind::Failed, "Modal.mdx (MISSING)");
//!
//! assert!(ui.has_message("Checking"));
//! assert_eq!(ui.status_lines_of(StatusKind::Failed).len(), 1);
//! ```

use super::{StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call regardless of output mode; mode filtering is the
/// concern of the real implementations.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    steps: Vec<(usize, String)>,
    status_lines: Vec<(StatusKind, String)>,
    hints: Vec<(String, Vec<String>)>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured step headings as (number, title).
    pub fn steps(&self) -> &[(usize, String)] {
        &self.steps
    }

    /// Get all captured status lines.
    pub fn status_lines(&self) -> &[(StatusKind, String)] {
        &self.status_lines
    }

    /// Get the captured status line messages of one kind.
    pub fn status_lines_of(&self, kind: StatusKind) -> Vec<&str> {
        self.status_lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Get all captured hint blocks as (title, lines).
    pub fn hints(&self) -> &[(String, Vec<String>)] {
        &self.hints
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint title or line was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints
            .iter()
            .any(|(title, lines)| title.contains(msg) || lines.iter().any(|l| l.contains(msg)))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_step(&mut self, number: usize, title: &str) {
        self.steps.push((number, title.to_string()));
    }

    fn status_line(&mut self, kind: StatusKind, msg: &str) {
        self.status_lines.push((kind, msg.to_string()));
    }

    fn show_hints(&mut self, title: &str, lines: &[String]) {
        self.hints.push((title.to_string(), lines.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.messages(), &["hello".to_string()]);
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
    }

    #[test]
    fn captures_steps_and_headers() {
        let mut ui = MockUI::new();
        ui.show_header("Summary");
        ui.show_step(2, "Scanning documentation files");

        assert_eq!(ui.headers(), &["Summary".to_string()]);
        assert_eq!(ui.steps()[0], (2, "Scanning documentation files".to_string()));
    }

    #[test]
    fn filters_status_lines_by_kind() {
        let mut ui = MockUI::new();
        ui.status_line(StatusKind::Success, "Button.mdx");
        ui.status_line(StatusKind::Warning, "Drawer.mdx");
        ui.status_line(StatusKind::Success, "Table.mdx");

        assert_eq!(ui.status_lines().len(), 3);
        assert_eq!(
            ui.status_lines_of(StatusKind::Success),
            vec!["Button.mdx", "Table.mdx"]
        );
        assert!(ui.status_lines_of(StatusKind::Failed).is_empty());
    }

    #[test]
    fn captures_hint_blocks() {
        let mut ui = MockUI::new();
        ui.show_hints("How to fix:", &["Run `yarn sync:docs`".to_string()]);

        assert_eq!(ui.hints().len(), 1);
        assert_eq!(ui.hints()[0].0, "How to fix:");
        assert!(ui.has_hint("How to fix"));
        assert!(ui.has_hint("yarn sync:docs"));
        assert!(!ui.has_hint("npm"));
    }
}
