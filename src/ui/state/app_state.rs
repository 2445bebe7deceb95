use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::edit::CellKey;
use crate::usecase::services::confirm_gate::ConfirmationGate;
use crate::usecase::services::editor_service::{EditorSettings, TableEditor};

pub struct AppState {
    pub editor: Signal<TableEditor>,
    pub gate: Signal<ConfirmationGate>,
    pub status: Signal<String>,
    pub editing_cell: Signal<Option<CellKey>>,
    pub editing_value: Signal<String>,
}

impl AppState {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            editor: use_signal(move || TableEditor::new(settings)),
            gate: use_signal(ConfirmationGate::default),
            status: use_signal(|| "Ready".to_string()),
            editing_cell: use_signal(|| None::<CellKey>),
            editing_value: use_signal(String::new),
        }
    }
}
