use crate::error::{Result, SheetError};
use indexmap::IndexMap;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Raw cell grid as produced by the format readers: row-major, one entry per
/// cell, `None` for empty cells. Rows may be ragged; `Table::from_rows` pads.
pub(crate) type RawRows = Vec<Vec<Option<String>>>;

/// Pattern for cells that look like data values rather than column labels:
/// one or more digits, an optional `.` plus alphanumeric group, and an
/// optional alphanumeric tail (`0.A01`, `3A21`, `2024`).
fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]+(\.[0-9A-Za-z]+)?[0-9A-Za-z]*$").expect("pattern is a valid literal")
    })
}

/// A rectangular table of text cells with labelled columns.
///
/// Every cell is a string; readers never coerce values to numbers or dates,
/// so identifier-like values (`007`, `3A21`) survive loading untouched.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Table {
    labels: Vec<String>,
    column_index: IndexMap<String, usize>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Load a table from a file, dispatching on the extension
    /// (case-insensitive): `.csv` goes through the delimiter/encoding probing
    /// reader, `.xlsx`/`.xls` through the workbook reader (first sheet only).
    ///
    /// # Errors
    ///
    /// `SheetError::UnsupportedFormat` for any other extension,
    /// `SheetError::Read` when every parse attempt fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let rows = match extension.as_str() {
            "csv" => crate::csv::read_rows(path)?,
            "xlsx" | "xls" => crate::xlsx::read_rows(path)?,
            _ => return Err(SheetError::UnsupportedFormat { extension }),
        };

        Ok(Self::from_rows(rows))
    }

    /// Build a table from raw cell rows, deciding whether the first row is a
    /// header.
    ///
    /// The first row is taken as the header unless every cell in it matches
    /// the identifier-like pattern, in which case the file evidently has no
    /// header row and labels `Column_0..Column_{n-1}` are synthesized. Labels
    /// that are exactly the positional integers `0..n-1` are replaced the
    /// same way.
    #[must_use]
    pub fn from_rows(rows: RawRows) -> Self {
        if rows.is_empty() {
            return Table {
                labels: Vec::new(),
                column_index: IndexMap::new(),
                rows: Vec::new(),
            };
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut rows: Vec<Vec<Option<String>>> = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();

        let first_row_labels: Vec<String> = rows[0]
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                Some(text) => text.clone(),
                None => synthesized_label(i),
            })
            .collect();

        let labels = if first_row_is_data(&first_row_labels) {
            tracing::debug!(
                columns = width,
                "first row looks like data, synthesizing column labels"
            );
            (0..width).map(synthesized_label).collect()
        } else {
            rows.remove(0);
            if labels_are_positional(&first_row_labels) {
                (0..width).map(synthesized_label).collect()
            } else {
                first_row_labels
            }
        };

        let mut column_index = IndexMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            // first occurrence wins for duplicate labels
            column_index.entry(label.clone()).or_insert(i);
        }

        Table {
            labels,
            column_index,
            rows,
        }
    }

    /// Column labels in table order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of data rows (the header row is not a data row).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cells of the named column, top to bottom, `None` for empty cells.
    ///
    /// # Errors
    ///
    /// `SheetError::ColumnNotFound` when no column carries the label.
    pub fn column(&self, label: &str) -> Result<Vec<Option<String>>> {
        let index = *self
            .column_index
            .get(label)
            .ok_or_else(|| SheetError::ColumnNotFound {
                name: label.to_string(),
            })?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().flatten())
            .collect())
    }
}

fn synthesized_label(index: usize) -> String {
    format!("Column_{index}")
}

/// True when every would-be label matches the identifier-like pattern, i.e.
/// the first row holds data values, not labels. An empty row is not data.
fn first_row_is_data(labels: &[String]) -> bool {
    !labels.is_empty() && labels.iter().all(|label| identifier_pattern().is_match(label))
}

/// True when the labels are exactly the positional integers `0..n-1`.
fn labels_are_positional(labels: &[String]) -> bool {
    !labels.is_empty()
        && labels
            .iter()
            .enumerate()
            .all(|(i, label)| label == &i.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    None
                } else {
                    Some((*v).to_string())
                }
            })
            .collect()
    }

    #[test]
    fn test_header_row_kept() {
        let table = Table::from_rows(vec![
            cells(&["Stand", "Exhibitor"]),
            cells(&["0.A01", "Acme"]),
        ]);

        assert_eq!(table.labels(), ["Stand", "Exhibitor"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.column("Stand").unwrap(),
            vec![Some("0.A01".to_string())]
        );
    }

    #[test]
    fn test_identifier_like_first_row_becomes_data() {
        let table = Table::from_rows(vec![
            cells(&["0.A01", "0.A02"]),
            cells(&["0.A03", "0.A04"]),
        ]);

        assert_eq!(table.labels(), ["Column_0", "Column_1"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("Column_0").unwrap(),
            vec![Some("0.A01".to_string()), Some("0.A03".to_string())]
        );
    }

    #[test]
    fn test_positional_integer_labels_are_replaced() {
        // A pure-integer first row already trips the identifier-like guard,
        // so positional labels surface the same synthesized names.
        let table = Table::from_rows(vec![cells(&["0", "1", "2"]), cells(&["a", "b", "c"])]);

        assert_eq!(table.labels(), ["Column_0", "Column_1", "Column_2"]);
    }

    #[test]
    fn test_mixed_first_row_is_header() {
        // One non-identifier cell is enough to keep the first row as header.
        let table = Table::from_rows(vec![cells(&["0.A01", "Name"]), cells(&["0.A02", "Acme"])]);

        assert_eq!(table.labels(), ["0.A01", "Name"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let table = Table::from_rows(vec![
            cells(&["Stand", "Exhibitor"]),
            vec![Some("0.A01".to_string())],
        ]);

        assert_eq!(table.column("Exhibitor").unwrap(), vec![None]);
    }

    #[test]
    fn test_duplicate_labels_resolve_to_first() {
        let table = Table::from_rows(vec![
            cells(&["Stand", "Stand"]),
            cells(&["left", "right"]),
        ]);

        assert_eq!(
            table.column("Stand").unwrap(),
            vec![Some("left".to_string())]
        );
    }

    #[test]
    fn test_column_not_found() {
        let table = Table::from_rows(vec![cells(&["Stand"]), cells(&["0.A01"])]);

        let err = table.column("Exhibitor").unwrap_err();
        assert!(matches!(err, SheetError::ColumnNotFound { name } if name == "Exhibitor"));
    }

    #[test]
    fn test_empty_header_cell_gets_synthesized_label() {
        let table = Table::from_rows(vec![cells(&["Stand", ""]), cells(&["0.A01", "x"])]);

        assert_eq!(table.labels(), ["Stand", "Column_1"]);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::from_rows(Vec::new());

        assert!(table.is_empty());
        assert!(table.labels().is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Table::load("orders.parquet").unwrap_err();
        assert!(matches!(err, SheetError::UnsupportedFormat { extension } if extension == "parquet"));
    }
}
