use std::path::Path;

use crate::export::{default_export_path, write_csv};
use crate::state::{AppState, ExportPrompt, MessageModal, ModalState};

use super::ActionResult;

/// Open the export prompt, or explain why there is nothing to export
pub fn open_export_prompt(state: &AppState) -> ModalState {
    if state.results.is_empty() {
        return ModalState::Message(MessageModal::info(
            "Nothing to Export",
            "Run a simulation first.",
        ));
    }

    let default_path = default_export_path(state.export_dir.as_deref());
    ModalState::ExportPrompt(ExportPrompt::new(&default_path, state.results.len()))
}

/// Handle the confirmed export path
pub fn handle_export_csv(state: &AppState, value: &str) -> ActionResult {
    let path_str = value.trim();
    if path_str.is_empty() {
        return ActionResult::error("File path cannot be empty");
    }

    let path = Path::new(path_str);
    match write_csv(path, state.results.rows()) {
        Ok(count) => ActionResult::modal(ModalState::Message(MessageModal::info(
            "Exported",
            &format!("Wrote {} rows to {}", count, path.display()),
        ))),
        Err(e) => {
            tracing::error!(error = %e, "CSV export failed");
            ActionResult::modal(ModalState::Message(MessageModal::error(
                "Export Failed",
                &e.to_string(),
            )))
        }
    }
}
