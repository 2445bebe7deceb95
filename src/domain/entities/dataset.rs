use std::collections::{BTreeSet, HashMap};

use crate::error::{EditorError, Result};

/// Column layout fixed by the header row at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from raw header names. Repeated names get `_1`, `_2`, ...
    /// appended so every key stays unique.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns = Vec::new();
        let mut positions = HashMap::new();
        for header in headers {
            let base: String = header.into();
            let mut name = base.clone();
            let mut suffix = 1;
            while positions.contains_key(&name) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            positions.insert(name.clone(), columns.len());
            columns.push(name);
        }
        Self { columns, positions }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

/// One record. Values are stored in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[cfg(test)]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    /// Rows shorter than the schema are padded with empty strings, longer
    /// ones are cut to the schema width.
    pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
        let width = schema.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.values.resize(width, String::new());
                row
            })
            .collect();
        Self { schema, rows }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn cell(&self, row_idx: usize, column: &str) -> Option<&str> {
        let col_idx = self.schema.position(column)?;
        self.rows.get(row_idx)?.get(col_idx)
    }

    /// Pairs of (column, value) for one row, in schema order.
    #[cfg(test)]
    pub fn record(&self, row_idx: usize) -> Option<Vec<(&str, &str)>> {
        let row = self.rows.get(row_idx)?;
        Some(
            self.schema
                .columns()
                .iter()
                .zip(row.values())
                .map(|(column, value)| (column.as_str(), value.as_str()))
                .collect(),
        )
    }

    pub fn set_cell(&mut self, row_idx: usize, column: &str, value: String) -> Result<()> {
        let count = self.rows.len();
        let col_idx = self
            .schema
            .position(column)
            .ok_or_else(|| EditorError::UnknownColumn {
                name: column.to_string(),
            })?;
        let row = self
            .rows
            .get_mut(row_idx)
            .ok_or(EditorError::RowOutOfRange {
                index: row_idx,
                count,
            })?;
        row.values[col_idx] = value;
        Ok(())
    }

    /// Drops every row whose index is in `indices`, keeping the order of the
    /// rest. Indices past the end are ignored. Returns how many rows went away.
    pub fn remove_rows(&mut self, indices: &BTreeSet<usize>) -> usize {
        let before = self.rows.len();
        let mut idx = 0;
        self.rows.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });
        before - self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Dataset {
        let schema = Schema::from_headers(["Name", "City"]);
        let rows = ["A", "B", "C", "D"]
            .iter()
            .map(|name| Row::new(vec![name.to_string(), "x".to_string()]))
            .collect();
        Dataset::new(schema, rows)
    }

    #[test]
    fn duplicate_headers_get_suffixes() {
        let schema = Schema::from_headers(["id", "name", "id", "id"]);
        assert_eq!(schema.columns(), ["id", "name", "id_1", "id_2"]);
        assert_eq!(schema.position("id_2"), Some(3));
    }

    #[test]
    fn short_rows_are_padded_to_schema_width() {
        let schema = Schema::from_headers(["a", "b", "c"]);
        let dataset = Dataset::new(schema, vec![Row::new(vec!["1".to_string()])]);
        assert_eq!(dataset.rows()[0].values(), ["1", "", ""]);
    }

    #[test]
    fn set_cell_changes_only_target() {
        let mut dataset = people();
        dataset
            .set_cell(2, "City", "Oslo".to_string())
            .expect("cell should be writable");

        assert_eq!(dataset.cell(2, "City"), Some("Oslo"));
        assert_eq!(dataset.cell(1, "City"), Some("x"));
        assert_eq!(dataset.cell(2, "Name"), Some("C"));
    }

    #[test]
    fn set_cell_rejects_unknown_column_and_row() {
        let mut dataset = people();
        assert!(matches!(
            dataset.set_cell(0, "Age", "3".to_string()),
            Err(EditorError::UnknownColumn { .. })
        ));
        assert!(matches!(
            dataset.set_cell(9, "Name", "Z".to_string()),
            Err(EditorError::RowOutOfRange { index: 9, count: 4 })
        ));
    }

    #[test]
    fn remove_rows_keeps_relative_order() {
        let mut dataset = people();
        let removed = dataset.remove_rows(&BTreeSet::from([1, 3, 42]));

        assert_eq!(removed, 2);
        let names: Vec<_> = (0..dataset.len())
            .filter_map(|idx| dataset.cell(idx, "Name"))
            .collect();
        assert_eq!(names, ["A", "C"]);
    }
}
