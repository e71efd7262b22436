//! Matrix construction errors.

/// Errors raised when constructing a [`crate::types::DataMatrix`].
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("value count {values} does not match {rows} rows x {cols} columns")]
    Shape {
        rows: usize,
        cols: usize,
        values: usize,
    },

    #[error("ragged input: row {row} has {got} values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}
