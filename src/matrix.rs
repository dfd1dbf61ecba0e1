use itertools::Itertools;
use num_traits::Float;
use std::fmt;
use std::fmt::Display;
use std::ops;

use crate::error::MatrixError;
use crate::ops::Operation;

pub trait Element:  // Avoid repeating all the traits
    Float + std::iter::Sum<Self> + std::fmt::Display + std::fmt::Debug
{
}

impl<T> Element for T where T: Float + std::iter::Sum<T> + std::fmt::Display + std::fmt::Debug {}

/// Dense row-major matrix. Rectangular by construction: `cells` always holds
/// exactly `rows * cols` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<T>,
}

impl<T: Element> Matrix<T> {
    pub fn from_rows(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyInput);
        }
        if lines.iter().any(|l| l.len() != cols) {
            return Err(MatrixError::NonRectangular);
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn identity(n: usize) -> Matrix<T> {
        Matrix {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Gaussian elimination with partial pivoting; the determinant is the
    /// signed product of the pivots. A zero pivot column means a singular
    /// matrix, reported as exactly 0.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NonSquareForDeterminant);
        }

        let n = self.rows;
        let mut mat = self.clone();
        let mut det = T::one();

        for col in 0..n {
            let mut pivot_row = col;
            for r in col + 1..n {
                if mat.at(r, col).abs() > mat.at(pivot_row, col).abs() {
                    pivot_row = r;
                }
            }

            let pivot_val = mat.at(pivot_row, col);
            if pivot_val.is_zero() {
                return Ok(T::zero());
            }

            if pivot_row != col {
                for k in col..n {
                    mat.cells.swap(col * n + k, pivot_row * n + k);
                }
                det = -det;
            }

            for r in col + 1..n {
                let factor = mat.at(r, col) / pivot_val;
                for k in col..n {
                    let x = mat.at(r, k) - factor * mat.at(col, k);
                    mat.cells[r * n + k] = x;
                }
            }

            det = det * pivot_val;
        }

        Ok(det)
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op: Operation::Add,
                a: self.shape(),
                b: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        })
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::ShapeMismatch {
                op: Operation::Subtract,
                a: self.shape(),
                b: rhs.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
        })
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::IncompatibleMultiplyShape {
                a_cols: self.cols,
                b_rows: rhs.rows,
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

impl<T: Element> Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(|x| x.to_string()).collect();
        let width = rendered.iter().map(|s| s.len()).max().unwrap_or(0);

        let grid = rendered
            .chunks(self.cols)
            .map(|line| {
                let row = line.iter().map(|s| format!("{:>width$}", s)).join("  ");
                format!("[ {} ]", row)
            })
            .join("\n");
        write!(f, "{}", grid)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(lines: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(lines).unwrap()
    }

    #[test]
    fn test_from_rows() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.at(1, 2), 6.0);
        assert_eq!(
            a.to_rows(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );

        assert_eq!(
            Matrix::<f64>::from_rows(vec![]),
            Err(MatrixError::EmptyInput)
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(MatrixError::NonRectangular)
        );
    }

    #[test]
    fn test_add_sub() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![10.0, 20.0], vec![30.0, 40.0]]);

        let c = (&a + &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![11.0, 22.0], vec![33.0, 44.0]]);

        // subtraction undoes addition
        assert_eq!((&c - &b).unwrap(), a);

        let tall = m(vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(
            &a + &tall,
            Err(MatrixError::ShapeMismatch {
                op: Operation::Add,
                a: (2, 2),
                b: (3, 1),
            })
        );
        assert!((&a - &tall).is_err());
    }

    #[test]
    fn test_mul() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);

        let c = (&a * &b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.to_rows(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);

        let id = Matrix::<f64>::identity(3);
        assert_eq!((&a * &id).unwrap(), a);

        // (2, 3) x (2, 2): cols(A) != rows(B)
        let square = m(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(
            &a * &square,
            Err(MatrixError::IncompatibleMultiplyShape {
                a_cols: 3,
                b_rows: 2,
            })
        );
    }

    #[test]
    fn test_transpose() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(
            t.to_rows(),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_determinant() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!((a.determinant().unwrap() - -2.0).abs() < 1e-12);
        assert_eq!(format!("{:.4}", a.determinant().unwrap()), "-2.0000");

        assert_eq!(m(vec![vec![7.5]]).determinant().unwrap(), 7.5);
        assert_eq!(Matrix::<f64>::identity(4).determinant().unwrap(), 1.0);

        let a = m(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ]);
        assert!((a.determinant().unwrap() - 49.0).abs() < 1e-9);

        // zero leading pivot forces a row swap
        let a = m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert!((a.determinant().unwrap() - -1.0).abs() < 1e-12);

        // linearly dependent rows
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![1.0, 0.0, 1.0],
        ]);
        assert!(a.determinant().unwrap().abs() < 1e-9);

        let rect = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(rect.determinant(), Err(MatrixError::NonSquareForDeterminant));
    }

    #[test]
    fn test_display_grid() {
        let a = m(vec![vec![1.0, 20.0], vec![300.0, 4.0]]);
        assert_eq!(a.to_string(), "[   1   20 ]\n[ 300    4 ]");
    }
}
