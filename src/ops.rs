use std::fmt;
use std::fmt::Display;

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// The fixed set of supported operations, keyed by menu digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Determinant,
}

pub const OPERATIONS: [Operation; 5] = [
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Transpose,
    Operation::Determinant,
];

impl Operation {
    pub fn from_choice(choice: &str) -> Option<Operation> {
        match choice {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::Subtract),
            "3" => Some(Operation::Multiply),
            "4" => Some(Operation::Transpose),
            "5" => Some(Operation::Determinant),
            _ => None,
        }
    }

    pub fn choice(&self) -> char {
        match self {
            Operation::Add => '1',
            Operation::Subtract => '2',
            Operation::Multiply => '3',
            Operation::Transpose => '4',
            Operation::Determinant => '5',
        }
    }

    /// How many matrices the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => 2,
            Operation::Transpose | Operation::Determinant => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Matrix Addition (A + B)",
            Operation::Subtract => "Matrix Subtraction (A - B)",
            Operation::Multiply => "Matrix Multiplication (A @ B)",
            Operation::Transpose => "Matrix Transpose (A.T)",
            Operation::Determinant => "Matrix Determinant (det(A))",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Transpose => "Transpose",
            Operation::Determinant => "Determinant",
        };
        write!(f, "{}", name)
    }
}

/// What an operation produces: a matrix, or a scalar for the determinant.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<T> {
    Matrix(Matrix<T>),
    Scalar(T),
}

/// Check the operation's shape precondition, then compute. Stateless; a
/// failed precondition aborts before any computation.
pub fn apply<T: Element>(
    op: Operation,
    a: &Matrix<T>,
    b: Option<&Matrix<T>>,
) -> Result<Evaluation<T>, MatrixError> {
    match op {
        Operation::Add => {
            let b = b.ok_or(MatrixError::MissingOperand(op))?;
            Ok(Evaluation::Matrix((a + b)?))
        }
        Operation::Subtract => {
            let b = b.ok_or(MatrixError::MissingOperand(op))?;
            Ok(Evaluation::Matrix((a - b)?))
        }
        Operation::Multiply => {
            let b = b.ok_or(MatrixError::MissingOperand(op))?;
            Ok(Evaluation::Matrix((a * b)?))
        }
        Operation::Transpose => Ok(Evaluation::Matrix(a.transpose())),
        Operation::Determinant => Ok(Evaluation::Scalar(a.determinant()?)),
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
