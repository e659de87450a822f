use crate::diff::missing_from;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tabdiff_sheet::{write_column, Table};

/// One side of the comparison: a file and the label of the column holding
/// the identifiers.
#[derive(Debug, Clone)]
pub struct ColumnRef {
    pub path: PathBuf,
    pub column: String,
}

impl ColumnRef {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, column: S) -> Self {
        ColumnRef {
            path: path.into(),
            column: column.into(),
        }
    }
}

/// Everything one run needs: the orders side (duplicates allowed), the
/// catalog side (presumed complete), and the output destination.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub orders: ColumnRef,
    pub catalog: ColumnRef,
    pub output: PathBuf,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Catalog values without an order, naturally sorted.
    pub missing: Vec<String>,
    pub output: PathBuf,
}

impl Report {
    #[must_use]
    pub fn count(&self) -> usize {
        self.missing.len()
    }
}

/// Run the whole comparison: load both files sequentially, extract the
/// chosen columns, compute the catalog entries without an order, and write
/// them to a single-column workbook at the requested destination.
///
/// Each table is dropped as soon as its column is extracted. Nothing is
/// retried; every failure surfaces to the caller.
///
/// # Errors
///
/// Any `SheetError` from loading, column lookup or export.
pub fn run(request: &CompareRequest) -> Result<Report> {
    let orders = load_column(&request.orders)?;
    let catalog = load_column(&request.catalog)?;

    let missing = missing_from(&orders, &catalog);

    write_column(&missing, &request.output)?;
    tracing::info!(
        missing = missing.len(),
        output = %request.output.display(),
        "comparison written"
    );

    Ok(Report {
        missing,
        output: request.output.clone(),
    })
}

fn load_column(source: &ColumnRef) -> Result<Vec<Option<String>>> {
    let table = Table::load(&source.path)?;
    tracing::debug!(
        path = %source.path.display(),
        rows = table.row_count(),
        column = %source.column,
        "loaded table"
    );
    Ok(table.column(&source.column)?)
}

/// Column labels of a file, for front ends that let the user pick one.
///
/// # Errors
///
/// Any `SheetError` from loading.
pub fn column_labels(path: &Path) -> Result<Vec<String>> {
    let table = Table::load(path)?;
    Ok(table.labels().to_vec())
}
