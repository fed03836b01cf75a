//! Visual theme and styling.

use console::Style;

/// docsync's visual theme.
#[derive(Debug, Clone)]
pub struct DocSyncTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for step headings (bold).
    pub step_title: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for remediation hints (cyan).
    pub hint: Style,
}

impl Default for DocSyncTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DocSyncTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            step_title: Style::new().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            hint: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            step_title: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a numbered step heading.
    pub fn format_step(&self, number: usize, title: &str) -> String {
        format!(
            "{} {}",
            self.dim.apply_to(format!("Step {}:", number)),
            self.step_title.apply_to(title)
        )
    }

    /// Format a boxed header banner.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "─".repeat(title.chars().count() + 4);
        format!(
            "{}\n{} {} {}\n{}",
            self.border.apply_to(format!("┌{}┐", rule)),
            self.border.apply_to("│"),
            self.header.apply_to(format!(" {} ", title)),
            self.border.apply_to("│"),
            self.border.apply_to(format!("└{}┘", rule)),
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
