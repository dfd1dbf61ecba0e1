pub mod error;
pub mod matrix;
pub mod ops;
pub mod parse;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use ops::{apply, Evaluation, Operation};
pub use parse::parse_matrix;
