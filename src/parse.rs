use std::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::{Element, Matrix};

/// Parse delimited matrix text: rows separated by `;`, elements by `,` or
/// whitespace, e.g. `"1,2,3; 4,5,6"`. Pure function; retry on failure is the
/// caller's policy.
pub fn parse_matrix<T>(text: &str) -> Result<Matrix<T>, MatrixError>
where
    T: Element + FromStr,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(MatrixError::EmptyInput);
    }

    let mut lines = vec![];
    for (i, row_str) in text.split(';').enumerate() {
        let row: Vec<T> = row_str
            .replace(',', " ")
            .split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| MatrixError::NonNumericToken(token.to_owned()))
            })
            .collect::<Result<_, _>>()?;

        if row.is_empty() {
            return Err(MatrixError::InvalidRow(i + 1));
        }
        lines.push(row);
    }

    Matrix::from_rows(lines)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
