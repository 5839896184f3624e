use thiserror::Error;

/// Errors raised by dataset construction and the normalizer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// An operation referenced a column that is not part of the dataset schema.
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },
    /// A row did not have one cell per column.
    #[error("row has {found} cells, schema has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}
