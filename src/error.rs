use thiserror::Error;

use crate::ops::Operation;

/// Every way parsing or an operation can fail. Parse errors are recovered by
/// re-prompting; precondition errors abort the current operation only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Row {0} is empty or invalid.")]
    InvalidRow(usize),

    #[error("could not parse '{0}' as a number")]
    NonNumericToken(String),

    #[error("All rows must have the same number of columns (rectangular matrix required).")]
    NonRectangular,

    #[error("Matrices must have the same shape for addition/subtraction. {op} needs {a:?} == {b:?}.")]
    ShapeMismatch {
        op: Operation,
        a: (usize, usize),
        b: (usize, usize),
    },

    #[error("Columns of A ({a_cols}) must equal Rows of B ({b_rows}).")]
    IncompatibleMultiplyShape { a_cols: usize, b_rows: usize },

    #[error("Determinant requires a square (2D) matrix.")]
    NonSquareForDeterminant,

    // unreachable through the menu loop, which prompts per arity
    #[error("{0} needs a second matrix")]
    MissingOperand(Operation),
}
