//! Incremental matrix assembly.

use super::Matrix;
use crate::error::Result;
use crate::vector::Vector;

/// Accumulates rows one at a time and builds a [`Matrix`] on demand.
///
/// The builder itself performs no shape validation; [`build`] hands the
/// accumulated rows to the matrix constructor, which enforces the usual
/// invariants. `build` does not consume the builder, so more rows can be
/// pushed afterwards and a larger matrix built from the same accumulation.
///
/// [`build`]: MatrixBuilder::build
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let mut builder = MatrixBuilder::new();
/// builder
///     .push_row(vec![1.0, 2.0])?
///     .push_row(vec![3.0, 4.0])?;
/// let m = builder.build()?;
/// assert_eq!(m.count_rows(), 2);
/// # Ok::<(), MatrizError>(())
/// ```
#[derive(Debug, Default)]
pub struct MatrixBuilder {
    rows: Vec<Vector>,
}

impl MatrixBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw row, wrapping it into a [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyInput`] for an empty row.
    ///
    /// [`MatrizError::EmptyInput`]: crate::error::MatrizError::EmptyInput
    pub fn push_row(&mut self, values: Vec<f64>) -> Result<&mut Self> {
        self.rows.push(Vector::from_vec(values)?);
        Ok(self)
    }

    /// Appends an already-built row vector.
    pub fn push_vector(&mut self, vector: Vector) -> &mut Self {
        self.rows.push(vector);
        self
    }

    /// Number of rows accumulated so far.
    #[must_use]
    pub fn count_rows(&self) -> usize {
        self.rows.len()
    }

    /// Discards all accumulated rows.
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Builds a matrix from the accumulated rows.
    ///
    /// # Errors
    ///
    /// Whatever [`Matrix::new`] reports: no rows accumulated, or rows of
    /// unequal length.
    pub fn build(&self) -> Result<Matrix> {
        Matrix::new(self.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrizError;

    #[test]
    fn test_build_from_pushed_rows() {
        let mut builder = MatrixBuilder::new();
        builder
            .push_row(vec![1.0, 2.0, 3.0])
            .expect("non-empty row")
            .push_row(vec![4.0, 5.0, 6.0])
            .expect("non-empty row");
        builder.push_vector(Vector::from_slice(&[7.0, 8.0, 9.0]).expect("non-empty row"));

        let m = builder.build().expect("three equal-length rows");
        assert_eq!(m.count_rows(), 3);
        assert_eq!(m.value(2, 0).expect("in range"), 3.0);
    }

    #[test]
    fn test_empty_row_rejected_at_push() {
        let mut builder = MatrixBuilder::new();
        assert_eq!(builder.push_row(vec![]).err(), Some(MatrizError::EmptyInput));
        assert_eq!(builder.count_rows(), 0);
    }

    #[test]
    fn test_build_without_rows_fails() {
        let builder = MatrixBuilder::new();
        assert_eq!(builder.build().err(), Some(MatrizError::EmptyInput));
    }

    #[test]
    fn test_shape_validation_happens_at_build() {
        let mut builder = MatrixBuilder::new();
        builder
            .push_row(vec![1.0, 2.0, 3.0])
            .expect("non-empty row")
            .push_row(vec![1.0, 3.0])
            .expect("non-empty row");
        assert_eq!(
            builder.build().err(),
            Some(MatrizError::ShapeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_reset_discards_rows() {
        let mut builder = MatrixBuilder::new();
        builder.push_row(vec![1.0, 2.0]).expect("non-empty row");
        builder.reset();
        assert_eq!(builder.count_rows(), 0);
        assert_eq!(builder.build().err(), Some(MatrizError::EmptyInput));
    }

    #[test]
    fn test_build_does_not_consume() {
        let mut builder = MatrixBuilder::new();
        builder.push_row(vec![1.0]).expect("non-empty row");
        let first = builder.build().expect("one row");
        builder.push_row(vec![2.0]).expect("non-empty row");
        let second = builder.build().expect("two rows");
        assert_eq!(first.count_rows(), 1);
        assert_eq!(second.count_rows(), 2);
    }
}
