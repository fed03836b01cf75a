//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, DocSyncTheme, NonInteractiveUI, OutputMode, StatusKind, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: DocSyncTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DocSyncTheme::new()
        } else {
            DocSyncTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_step(&mut self, number: usize, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_step(number, title)).ok();
        }
    }

    fn status_line(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() || kind == StatusKind::Failed {
            writeln!(self.term, "   {}", kind.format(&self.theme, msg)).ok();
        }
    }

    fn show_hints(&mut self, title: &str, lines: &[String]) {
        writeln!(
            self.term,
            "\n{} {}",
            self.theme.hint.apply_to("💡"),
            self.theme.hint.apply_to(title)
        )
        .ok();
        for line in lines {
            writeln!(self.term, "   {}", line).ok();
        }
    }
}

/// Check if running under a CI system.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Create the appropriate UI based on environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
