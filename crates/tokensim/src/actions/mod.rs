// Actions module - handlers for key-triggered operations and modal results

mod export;
mod simulation;

pub use export::*;
pub use simulation::*;

use crate::state::ModalState;

/// Result of an action handler
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message for the status bar
    Error(String),
}

impl ActionResult {
    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }
}
