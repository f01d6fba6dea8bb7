//! The table shown next to the form.
//!
//! A [`ViewModel`] is rebuilt from scratch after every query; it is a
//! read-only snapshot of column names plus display strings and exposes no
//! way to edit a cell. Rows can be reordered with [`ViewModel::sort_by`];
//! the order is lost on the next reload.

use super::form::StudentForm;
use super::messages::Message;
use super::record::ResultSet;
use prettytable::{format, Cell, Row, Table};
use std::cmp::Ordering;

/// Column and direction of the current in-memory sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    sorted_by: Option<SortKey>,
}

impl ViewModel {
    /// Converts a query result. Columns come from the result's metadata and
    /// each row is aligned to them; NULL becomes an empty string.
    pub fn from_result_set(result: &ResultSet) -> Self {
        let rows = result
            .rows
            .iter()
            .map(|record| {
                result
                    .columns
                    .iter()
                    .map(|column| record.get(column).map(ToString::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();

        ViewModel {
            columns: result.columns.clone(),
            rows,
            sorted_by: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Case-insensitive column lookup.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name.eq_ignore_ascii_case(column))
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(index)).map(String::as_str)
    }

    /// Reorders the rows by `column` (case-insensitive name). Cells that
    /// both read as numbers compare numerically, everything else as text
    /// ignoring case. The sort is stable. Returns `false` for an unknown
    /// column.
    pub fn sort_by(&mut self, column: &str, descending: bool) -> bool {
        let Some(index) = self.column_index(column) else {
            return false;
        };

        self.rows.sort_by(|a, b| {
            let ordering = compare_cells(&a[index], &b[index]);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        self.sorted_by = Some(SortKey { column: index, descending });
        true
    }

    pub fn sorted_by(&self) -> Option<SortKey> {
        self.sorted_by
    }

    /// One-line label per row, used when picking a row to edit.
    pub fn row_labels(&self) -> Vec<String> {
        self.rows.iter().map(|cells| cells.iter().filter(|cell| !cell.is_empty()).cloned().collect::<Vec<_>>().join(" | ")).collect()
    }

    pub fn render(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(self.columns.iter().map(|column| Cell::new(&column.to_uppercase()).style_spec("b")).collect()));
        for cells in &self.rows {
            table.add_row(Row::new(cells.iter().map(|cell| Cell::new(cell)).collect()));
        }
        table
    }

    pub fn print(&self) {
        self.render().printstd();
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn as_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// The form as a two-column label/value table.
pub fn form_table(form: &StudentForm) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(Row::new(vec![Cell::new(&Message::FormHeader.to_string()).style_spec("b")]));
    for (label, value) in [
        (Message::FieldStudentId, &form.student_id),
        (Message::FieldName, &form.name),
        (Message::FieldEmail, &form.email),
        (Message::FieldPhone, &form.phone),
        (Message::FieldAddress, &form.address),
    ] {
        table.add_row(Row::new(vec![Cell::new(&format!("{}:", label)), Cell::new(value)]));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::record::{CellValue, Record};

    fn sample() -> ResultSet {
        ResultSet {
            columns: vec!["student_id".into(), "name".into(), "email".into()],
            rows: vec![Record::new(vec![
                ("student_id".into(), CellValue::Integer(2)),
                ("name".into(), CellValue::Text("Bob".into())),
                ("email".into(), CellValue::Null),
            ])],
        }
    }

    #[test]
    fn test_rows_align_with_columns() {
        let view = ViewModel::from_result_set(&sample());
        assert_eq!(view.columns(), ["student_id", "name", "email"]);
        assert_eq!(view.rows(), [vec!["2".to_string(), "Bob".to_string(), String::new()]]);
        assert_eq!(view.value(0, "NAME"), Some("Bob"));
        assert_eq!(view.value(0, "phone"), None);
        assert_eq!(view.value(1, "name"), None);
    }

    #[test]
    fn test_row_labels_skip_empty_cells() {
        let view = ViewModel::from_result_set(&sample());
        assert_eq!(view.row_labels(), ["2 | Bob"]);
    }

    fn roster() -> ViewModel {
        let row = |id: i64, name: &str| {
            Record::new(vec![
                ("student_id".into(), CellValue::Integer(id)),
                ("name".into(), CellValue::Text(name.into())),
            ])
        };
        ViewModel::from_result_set(&ResultSet {
            columns: vec!["student_id".into(), "name".into()],
            rows: vec![row(10, "bob"), row(9, "Alice"), row(100, "Carol")],
        })
    }

    #[test]
    fn test_sort_numbers_numerically() {
        let mut view = roster();
        assert!(view.sort_by("STUDENT_ID", false));
        assert_eq!(view.value(0, "student_id"), Some("9"));
        assert_eq!(view.value(1, "student_id"), Some("10"));
        assert_eq!(view.value(2, "student_id"), Some("100"));
        assert_eq!(view.sorted_by(), Some(SortKey { column: 0, descending: false }));
    }

    #[test]
    fn test_sort_text_ignoring_case() {
        let mut view = roster();
        assert!(view.sort_by("name", true));
        assert_eq!(view.value(0, "name"), Some("Carol"));
        assert_eq!(view.value(1, "name"), Some("bob"));
        assert_eq!(view.value(2, "name"), Some("Alice"));
        // Each row moves as a whole
        assert_eq!(view.value(2, "student_id"), Some("9"));
    }

    #[test]
    fn test_sort_unknown_column() {
        let mut view = roster();
        assert!(!view.sort_by("phone", false));
        assert_eq!(view, roster());
    }

    #[test]
    fn test_form_table_lists_five_fields() {
        let form = StudentForm::new("1", "Alice", "", "", "");
        assert_eq!(form_table(&form).len(), 5);
    }

    #[test]
    fn test_render_has_one_line_per_row() {
        let view = ViewModel::from_result_set(&sample());
        assert_eq!(view.render().len(), 1);
    }
}
