//! Plain UI for CI, pipes and other non-TTY output.

use super::theme::DocSyncTheme;
use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Everything goes to standard output without styling, so the report reads
/// the same in a log file as in a terminal.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: DocSyncTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: DocSyncTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}\n", self.theme.format_header(title));
        }
    }

    fn show_step(&mut self, number: usize, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_step(number, title));
        }
    }

    fn status_line(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_status() || kind == StatusKind::Failed {
            println!("   {}", kind.format(&self.theme, msg));
        }
    }

    fn show_hints(&mut self, title: &str, lines: &[String]) {
        println!("\n💡 {}", title);
        for line in lines {
            println!("   {}", line);
        }
    }
}
