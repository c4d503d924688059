use thiserror::Error;

/// Errors raised while parsing puzzle input into core types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A row did not have the same length as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell expected to hold a decimal digit held something else.
    #[error("invalid digit {ch:?} at {x},{y}")]
    InvalidDigit { x: usize, y: usize, ch: char },

    /// Text that should have been `x,y` or `x,y,z`.
    #[error("invalid coordinates {0:?}")]
    InvalidCoordinates(String),
}
