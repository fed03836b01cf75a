//! Status vocabulary for per-item report lines.

use super::theme::DocSyncTheme;

/// Status of a single checked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Item is present.
    Success,
    /// Required item is missing.
    Failed,
    /// Optional item is missing.
    Warning,
}

impl StatusKind {
    /// Unicode icon for the status.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &DocSyncTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &DocSyncTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn styled_contains_icon() {
        let theme = DocSyncTheme::plain();
        for kind in [StatusKind::Success, StatusKind::Failed, StatusKind::Warning] {
            assert!(kind.styled(&theme).contains(kind.icon()));
        }
    }

    #[test]
    fn format_plain_theme() {
        let theme = DocSyncTheme::plain();
        assert_eq!(
            StatusKind::Failed.format(&theme, "Modal.mdx (MISSING)"),
            "✗ Modal.mdx (MISSING)"
        );
    }
}
