//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the full report.
    #[default]
    Normal,
    /// Show failures only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows informational status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
