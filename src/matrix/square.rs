//! Square-matrix wrapper: a matrix plus one extra shape invariant.

use std::ops::Deref;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::Matrix;
use crate::error::{MatrizError, Result};
use crate::vector::Vector;

/// A [`Matrix`] whose row count equals its column count.
///
/// Composition, not inheritance: the wrapper runs the base validation and
/// then checks squareness once at construction. `Deref` exposes the full
/// matrix surface, so a `SquareMatrix` reads like a `Matrix` everywhere.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let m = SquareMatrix::from_rows(vec![
///     vec![1.0, 2.0],
///     vec![3.0, 4.0],
/// ]).unwrap();
/// assert_eq!(m.order(), 2);
/// assert_eq!(m.sum(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    inner: Matrix,
}

impl SquareMatrix {
    /// Creates a square matrix from already-built row vectors.
    ///
    /// # Errors
    ///
    /// Base matrix validation errors, plus [`MatrizError::NotSquare`] when
    /// row count differs from column count.
    pub fn new(rows: Vec<Vector>) -> Result<Self> {
        Self::from_matrix(Matrix::new(rows)?)
    }

    /// Creates a square matrix from raw row sequences.
    ///
    /// # Errors
    ///
    /// Base matrix validation errors, plus [`MatrizError::NotSquare`] when
    /// row count differs from column count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_matrix(Matrix::from_rows(rows)?)
    }

    /// Wraps an existing matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::NotSquare`] when the matrix is not square.
    pub fn from_matrix(matrix: Matrix) -> Result<Self> {
        if !matrix.is_square() {
            return Err(MatrizError::NotSquare {
                rows: matrix.count_rows(),
                cols: matrix.count_columns(),
            });
        }
        Ok(Self { inner: matrix })
    }

    /// The shared row/column count.
    #[must_use]
    pub fn order(&self) -> usize {
        self.inner.count_rows()
    }

    /// Borrows the wrapped matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    /// Unwraps into the underlying matrix.
    #[must_use]
    pub fn into_inner(self) -> Matrix {
        self.inner
    }
}

impl Deref for SquareMatrix {
    type Target = Matrix;

    fn deref(&self) -> &Matrix {
        &self.inner
    }
}

impl TryFrom<Matrix> for SquareMatrix {
    type Error = MatrizError;

    fn try_from(matrix: Matrix) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl Serialize for SquareMatrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SquareMatrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let matrix = Matrix::deserialize(deserializer)?;
        SquareMatrix::from_matrix(matrix).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::VectorOps;

    #[test]
    fn test_rectangular_rejected() {
        let result = SquareMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]]);
        assert_eq!(result, Err(MatrizError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_square_accepted() {
        let m = SquareMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
        ])
        .expect("3x3 input");
        assert_eq!(m.order(), 3);
        assert!(m.is_square());
    }

    #[test]
    fn test_base_validation_still_applies() {
        let result = SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0]]);
        assert_eq!(
            result,
            Err(MatrizError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(SquareMatrix::from_rows(vec![]), Err(MatrizError::EmptyInput));
    }

    #[test]
    fn test_deref_exposes_matrix_surface() {
        let m = SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("2x2 input");
        assert_eq!(m.count(), 4);
        assert_eq!(m.value(0, 1).expect("in range"), 3.0);
        assert_eq!(m.column(1).expect("in range").values(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_try_from_matrix() {
        let square = Matrix::from_rows(vec![vec![1.0]]).expect("1x1 input");
        assert!(SquareMatrix::try_from(square).is_ok());

        let wide = Matrix::from_rows(vec![vec![1.0, 2.0]]).expect("1x2 input");
        assert!(SquareMatrix::try_from(wide).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let m = SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("2x2 input");
        let json = serde_json::to_string(&m).expect("square matrix serializes");
        let back: SquareMatrix = serde_json::from_str(&json).expect("valid square input");
        assert_eq!(back, m);
    }

    #[test]
    fn test_deserialize_rechecks_squareness() {
        let result: std::result::Result<SquareMatrix, _> =
            serde_json::from_str("[[1.0,2.0],[3.0,4.0],[5.0,6.0]]");
        assert!(result.is_err());
    }
}
