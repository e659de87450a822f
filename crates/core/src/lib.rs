//! Core comparison engine for tabdiff.
//!
//! Takes two tabular files and a chosen column on each side, computes the
//! catalog identifiers that have no counterpart in the orders column, and
//! writes them, naturally sorted, to a single-column workbook. All state
//! is per-call; the crate holds nothing mutable and can be invoked
//! repeatedly or concurrently.
//!
//! # Examples
//!
//! ```no_run
//! use tabdiff_core::{compare, ColumnRef, CompareRequest};
//!
//! let report = compare::run(&CompareRequest {
//!     orders: ColumnRef::new("orders.csv", "Stand"),
//!     catalog: ColumnRef::new("catalog.xlsx", "Stand"),
//!     output: "missing.xlsx".into(),
//! })
//! .unwrap();
//! println!("{} stands without an order", report.count());
//! ```

pub mod compare;
mod diff;
mod error;
mod natural;
mod normalize;

/// Re-export pipeline types.
pub use compare::{ColumnRef, CompareRequest, Report};
/// Re-export the set-difference engine.
pub use diff::missing_from;
/// Re-export error types.
pub use error::{CompareError, Result};
/// Re-export the natural ordering key.
pub use natural::{sort_natural, NaturalKey, Segment};
/// Re-export the normalizer.
pub use normalize::normalize;
