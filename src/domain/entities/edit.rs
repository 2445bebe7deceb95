use std::collections::BTreeSet;

/// Cell currently focused for editing. `row_idx` is relative to the full dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_idx: usize,
    pub column: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Viewing => EditMode::Editing,
            EditMode::Editing => EditMode::Viewing,
        }
    }

    /// Label of the button that leaves this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            EditMode::Viewing => "Edit",
            EditMode::Editing => "Save",
        }
    }
}

/// Absolute row indices marked for deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    rows: BTreeSet<usize>,
}

impl SelectionSet {
    /// Returns whether the row is selected afterwards.
    pub fn toggle(&mut self, row_idx: usize) -> bool {
        if self.rows.remove(&row_idx) {
            false
        } else {
            self.rows.insert(row_idx);
            true
        }
    }

    pub fn insert(&mut self, row_idx: usize) {
        self.rows.insert(row_idx);
    }

    pub fn remove(&mut self, row_idx: usize) {
        self.rows.remove(&row_idx);
    }

    pub fn contains(&self, row_idx: usize) -> bool {
        self.rows.contains(&row_idx)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_symmetric_difference() {
        let mut selection = SelectionSet::default();
        assert!(selection.toggle(3));
        assert!(selection.contains(3));
        assert!(!selection.toggle(3));
        assert!(selection.is_empty());
    }

    #[test]
    fn edit_mode_labels_follow_state() {
        assert_eq!(EditMode::Viewing.toggle_label(), "Edit");
        assert_eq!(EditMode::Editing.toggle_label(), "Save");
        assert_eq!(EditMode::Viewing.toggled(), EditMode::Editing);
        assert_eq!(EditMode::Editing.toggled(), EditMode::Viewing);
    }
}
