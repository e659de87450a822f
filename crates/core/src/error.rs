use thiserror::Error;

/// Errors surfaced by the comparison pipeline.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Loading, column lookup or export failed.
    #[error(transparent)]
    Sheet(#[from] tabdiff_sheet::SheetError),
}

pub type Result<T> = std::result::Result<T, CompareError>;
