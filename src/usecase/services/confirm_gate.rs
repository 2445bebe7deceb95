use tracing::debug;

use crate::usecase::services::editor_service::TableEditor;

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete?";

/// Two-state guard in front of `TableEditor::delete_selected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmationGate {
    open: bool,
}

impl ConfirmationGate {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the dialog if there is something to delete. Returns whether it opened.
    pub fn request(&mut self, editor: &TableEditor) -> bool {
        self.open = editor.can_delete();
        debug!(open = self.open, "delete confirmation requested");
        self.open
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Closes the dialog once the editor has left edit mode.
    pub fn close_unless_editing(&mut self, editor: &TableEditor) {
        if !editor.is_editing() {
            self.open = false;
        }
    }

    /// Runs the delete if the dialog is open and the editor is still in edit
    /// mode, then closes it.
    pub fn confirm(&mut self, editor: &mut TableEditor) -> usize {
        let armed = self.open && editor.is_editing();
        self.open = false;
        if !armed {
            return 0;
        }
        editor.delete_selected()
    }
}
