//! Check command implementation.
//!
//! The `docsync check` command (also the default) verifies that the
//! documentation directory exists, lists its documentation files, and
//! reports which essential and recommended components are documented.
//! The exit code is 1 when the directory is missing, holds no
//! documentation, or lacks an essential document.

use tracing::debug;

use crate::config::CheckConfig;
use crate::docs::{directory_exists, list_docs, CheckReport, DocCheck, DocPresence};
use crate::error::Result;
use crate::ui::{format_bytes, hints, StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Column width for documentation file names in status lines.
const NAME_WIDTH: usize = 25;

/// The check command implementation.
pub struct CheckCommand {
    config: CheckConfig,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    fn show_essential(ui: &mut dyn UserInterface, report: &CheckReport) {
        for check in report.essential() {
            match check.presence {
                DocPresence::Present(size) => {
                    let bytes = size.map(|s| s.bytes()).unwrap_or(0);
                    ui.status_line(
                        StatusKind::Success,
                        &format!(
                            "{:<width$} ({})",
                            check.file_name,
                            format_bytes(bytes),
                            width = NAME_WIDTH
                        ),
                    );
                }
                DocPresence::Missing => ui.status_line(
                    StatusKind::Failed,
                    &format!("{:<width$} (MISSING)", check.file_name, width = NAME_WIDTH),
                ),
            }
        }

        let missing = report.missing_essential();
        if missing.is_empty() {
            ui.success("All essential documentation files present");
        } else {
            ui.warning(&format!(
                "Missing {} essential documentation files",
                missing.len()
            ));
            ui.message("   These files are critical for design-system usage");
        }
    }

    fn show_recommended(ui: &mut dyn UserInterface, report: &CheckReport) {
        for check in report.recommended() {
            if check.is_present() {
                ui.status_line(
                    StatusKind::Success,
                    &format!("{:<width$}", check.file_name, width = NAME_WIDTH),
                );
            } else {
                ui.status_line(
                    StatusKind::Warning,
                    &format!("{:<width$} (optional)", check.file_name, width = NAME_WIDTH),
                );
            }
        }

        let missing = report.missing_recommended();
        if missing.is_empty() {
            ui.success("All recommended documentation files present");
        } else {
            ui.message(&format!(
                "{} recommended files missing (optional)",
                missing.len()
            ));
        }
    }

    fn show_summary(&self, ui: &mut dyn UserInterface, report: &CheckReport) -> CommandResult {
        let catalog = &self.config.catalog;

        ui.show_header("Summary");
        ui.message(&format!(
            "Total documentation files: {}",
            report.discovered().len()
        ));
        ui.message(&format!(
            "Essential files present: {}/{}",
            report.essential_present(),
            catalog.essential.len()
        ));
        ui.message(&format!(
            "Recommended files present: {}/{}",
            report.recommended_present(),
            catalog.recommended.len()
        ));

        if report.is_complete() {
            ui.success("Documentation is ready to use!");
            ui.message(&format!(
                "   Agents can now read component documentation from {}",
                self.config.docs_dir.display()
            ));
            CommandResult::success()
        } else {
            let names: Vec<&str> = report
                .missing_essential()
                .into_iter()
                .map(|c: &DocCheck| c.name)
                .collect();
            ui.error(&format!(
                "Some essential documentation is missing: {}",
                names.join(", ")
            ));
            ui.message("   Missing components fall back to generic component libraries");
            ui.show_hints("To sync documentation:", &hints::sync_docs());
            CommandResult::failure(report.exit_code())
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let docs_dir = &self.config.docs_dir;

        ui.show_header("Design System - Documentation Sync Checker");

        ui.show_step(1, "Checking documentation directory...");
        if !directory_exists(docs_dir) {
            debug!("Documentation directory missing: {}", docs_dir.display());
            ui.error(&format!(
                "Documentation directory not found!\n   Expected: {}",
                docs_dir.display()
            ));
            ui.show_hints("How to fix:", &hints::missing_directory());
            return Ok(CommandResult::failure(1));
        }
        ui.success(&format!(
            "Documentation directory exists: {}",
            docs_dir.display()
        ));

        ui.show_step(2, "Scanning documentation files...");
        let discovered = list_docs(docs_dir);
        if discovered.is_empty() {
            ui.error("No documentation files found!");
            ui.show_hints("How to fix:", &hints::no_docs_found());
            return Ok(CommandResult::failure(1));
        }
        ui.success(&format!(
            "Found {} documentation files",
            discovered.len()
        ));

        let report = CheckReport::build(&self.config.catalog, docs_dir, discovered);

        ui.show_step(3, "Checking essential documentation...");
        Self::show_essential(ui, &report);

        ui.show_step(4, "Checking recommended documentation...");
        Self::show_recommended(ui, &report);

        ui.show_step(5, "All available documentation:");
        ui.message(&format!("   {}", report.component_names().join(", ")));

        debug!(
            "Essential {}/{}, recommended {}/{}",
            report.essential_present(),
            self.config.catalog.essential.len(),
            report.recommended_present(),
            self.config.catalog.recommended.len()
        );

        Ok(self.show_summary(ui, &report))
    }
}
