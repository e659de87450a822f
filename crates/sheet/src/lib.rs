//! Tabular file ingestion and spreadsheet export for tabdiff.
//!
//! A [`Table`] is a rectangular grid of optional text cells with labelled
//! columns, loaded from `.csv`, `.xlsx` or `.xls` files. Cells are never
//! coerced to numbers or dates, so identifier-like values keep their exact
//! spelling. Delimited files go through an ordered list of
//! `(delimiter, encoding)` read candidates; workbook files are read through
//! their first sheet only.
//!
//! # Examples
//!
//! ```no_run
//! use tabdiff_sheet::Table;
//!
//! let table = Table::load("orders.csv").unwrap();
//! let stands = table.column("Stand").unwrap();
//! ```

mod csv;
mod error;
mod table;
mod xlsx;

/// Re-export error types.
pub use error::{Result, SheetError};
/// Re-export the table type.
pub use table::Table;
/// Re-export the single-column exporter.
pub use xlsx::{write_column, OUTPUT_HEADER};
