//! Expected component documentation.
//!
//! Names are component names without the file extension. Both lists are
//! compiled in and ordered the way they are reported.

/// Extension of component documentation files.
pub const DOC_EXTENSION: &str = ".mdx";

/// Documentation that must be present for a passing check.
pub const ESSENTIAL_DOCS: &[&str] = &[
    "Button",
    "TextInput",
    "Table",
    "Modal",
    "Select",
    "ThemeProvider",
    "DesignTokens",
];

/// Documentation whose absence is reported but never fails the check.
pub const RECOMMENDED_DOCS: &[&str] = &[
    "Drawer", "Popover", "Tabs", "Checkbox", "Switch", "Sonner", "Tooltip", "Badge", "Avatar",
];

/// A pair of expected-name lists checked against a documentation directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocCatalog {
    /// Required documentation names.
    pub essential: &'static [&'static str],
    /// Advisory documentation names.
    pub recommended: &'static [&'static str],
}

impl Default for DocCatalog {
    fn default() -> Self {
        Self::design_system()
    }
}

impl DocCatalog {
    /// The catalog of design-system components the template relies on.
    pub const fn design_system() -> Self {
        Self {
            essential: ESSENTIAL_DOCS,
            recommended: RECOMMENDED_DOCS,
        }
    }
}

/// File name for a component's documentation (e.g. `Button` -> `Button.mdx`).
pub fn doc_file_name(name: &str) -> String {
    format!("{}{}", name, DOC_EXTENSION)
}

/// Component name for a documentation file name, if it carries the extension.
pub fn component_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(DOC_EXTENSION)
}
