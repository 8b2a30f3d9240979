//! Two-dimensional container built from row vectors.

use std::ops::Index;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{MatrizError, Result};
use crate::vector::{LazyVector, Vector, VectorOps};

/// An immutable matrix: an ordered sequence of equal-length row vectors.
///
/// Rows are stored as compressed [`Vector`]s and are exclusively owned by
/// the matrix. Columns and flattened views are never materialized up front:
/// they are handed out as restartable [`LazyVector`] views that gather
/// values from the rows on consumption, and they borrow the matrix, so the
/// borrow checker guarantees the matrix outlives them.
///
/// Every transforming operation returns a new matrix; the receiver is never
/// mutated.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let m = Matrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0],
///     vec![3.0, 1.0, 2.0],
/// ]).unwrap();
///
/// assert_eq!(m.count_rows(), 2);
/// assert_eq!(m.count_columns(), 3);
/// assert_eq!(m.column(0).unwrap().values(), vec![1.0, 3.0]);
/// assert_eq!(m.sum(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from already-built row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyInput`] for zero rows and
    /// [`MatrizError::ShapeMismatch`] when any row's length differs from
    /// the first row's.
    pub fn new(rows: Vec<Vector>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrizError::EmptyInput);
        };

        let cols = first.len();
        for row in &rows {
            if row.len() != cols {
                return Err(MatrizError::ShapeMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { rows, cols })
    }

    /// Creates a matrix from raw row sequences, wrapping each into a
    /// [`Vector`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyInput`] for zero rows or any empty row,
    /// and [`MatrizError::ShapeMismatch`] for rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(Vector::from_vec)
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// Total element count: `rows * columns`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.rows.len() * self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn count_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn count_columns(&self) -> usize {
        self.cols
    }

    /// Whether row count equals column count.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.count_rows() == self.count_columns()
    }

    /// Direct reference to a stored row.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when `index >= count_rows()`.
    pub fn row(&self, index: usize) -> Result<&Vector> {
        self.rows.get(index).ok_or(MatrizError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// A restartable lazy view over column `index`: consuming it walks the
    /// rows in order and yields `row[index]` from each. The transpose-like
    /// gather is deferred until the view is actually consumed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when
    /// `index >= count_columns()`.
    pub fn column(&self, index: usize) -> Result<LazyVector<'_>> {
        if index >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.cols,
            });
        }
        Ok(self.column_view(index))
    }

    fn column_view(&self, index: usize) -> LazyVector<'_> {
        let rows = &self.rows;
        LazyVector::from_factory(move || rows.iter().map(move |row| row.value_at(index)))
    }

    /// Value at column `y` of row `x`.
    ///
    /// The row is selected by the *second* argument, an inherited
    /// convention this crate preserves exactly; see the argument-order test
    /// before assuming otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when either coordinate is
    /// out of range.
    pub fn value(&self, y: usize, x: usize) -> Result<f64> {
        self.row(x)?.get(y)
    }

    /// Iterates the stored rows in order.
    pub fn rows(&self) -> std::slice::Iter<'_, Vector> {
        self.rows.iter()
    }

    /// Iterates fresh column views in index order. Each call re-derives the
    /// views from the current rows.
    pub fn columns(&self) -> impl Iterator<Item = LazyVector<'_>> {
        (0..self.cols).map(move |index| self.column_view(index))
    }

    /// Restartable lazy flattening of all elements in row-major order
    /// (row 0 fully, then row 1, ...).
    #[must_use]
    pub fn as_vector(&self) -> LazyVector<'_> {
        let rows = &self.rows;
        let cols = self.cols;
        LazyVector::from_factory(move || {
            rows.iter()
                .flat_map(move |row| (0..cols).map(move |index| row.value_at(index)))
        })
    }

    /// Restartable lazy flattening in column-major order (column 0 fully,
    /// then column 1, ...).
    #[must_use]
    pub fn as_column_vector(&self) -> LazyVector<'_> {
        let rows = &self.rows;
        let cols = self.cols;
        LazyVector::from_factory(move || {
            (0..cols).flat_map(move |index| rows.iter().map(move |row| row.value_at(index)))
        })
    }

    /// New matrix with `f(value, column_index)` applied to every element,
    /// row by row.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64, usize) -> f64,
    {
        let rows = self
            .rows
            .iter()
            .map(|row| Self::map_row_values(row, &f))
            .collect();
        Self {
            rows,
            cols: self.cols,
        }
    }

    /// New matrix with only row `index` transformed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when `index >= count_rows()`.
    pub fn map_row<F>(&self, index: usize, f: F) -> Result<Self>
    where
        F: Fn(f64, usize) -> f64,
    {
        if index >= self.count_rows() {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.count_rows(),
            });
        }

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if i == index {
                    Self::map_row_values(row, &f)
                } else {
                    row.clone()
                }
            })
            .collect();
        Ok(Self {
            rows,
            cols: self.cols,
        })
    }

    /// New matrix where, within every row, only the element at column
    /// `index` is transformed; all other elements pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] when
    /// `index >= count_columns()`.
    pub fn map_column<F>(&self, index: usize, f: F) -> Result<Self>
    where
        F: Fn(f64, usize) -> f64,
    {
        if index >= self.cols {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.cols,
            });
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                Vector::from_values_unchecked(
                    row.iter()
                        .enumerate()
                        .map(|(i, value)| if i == index { f(value, i) } else { value })
                        .collect(),
                )
            })
            .collect();
        Ok(Self {
            rows,
            cols: self.cols,
        })
    }

    fn map_row_values<F>(row: &Vector, f: &F) -> Vector
    where
        F: Fn(f64, usize) -> f64,
    {
        Vector::from_values_unchecked(
            row.iter()
                .enumerate()
                .map(|(index, value)| f(value, index))
                .collect(),
        )
    }

    /// Nested export shape: one inner sequence per row, in row order.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(VectorOps::values).collect()
    }

    /// Sum of all elements, over the row-major flattening.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.as_vector().sum()
    }

    /// Largest element.
    ///
    /// # Errors
    ///
    /// Carries [`MatrizError::EmptyInput`] from the shared statistics
    /// signature; unreachable for a constructed matrix.
    pub fn max(&self) -> Result<f64> {
        self.as_vector().max()
    }

    /// Smallest element.
    ///
    /// # Errors
    ///
    /// Carries [`MatrizError::EmptyInput`] from the shared statistics
    /// signature; unreachable for a constructed matrix.
    pub fn min(&self) -> Result<f64> {
        self.as_vector().min()
    }

    /// Mean of all elements.
    ///
    /// # Errors
    ///
    /// Carries [`MatrizError::DivisionByZero`] from the shared statistics
    /// signature; unreachable for a constructed matrix.
    pub fn mean(&self) -> Result<f64> {
        self.as_vector().mean()
    }

    /// Median of all elements, over the row-major flattening.
    ///
    /// # Errors
    ///
    /// Carries [`MatrizError::EmptyInput`] from the shared statistics
    /// signature; unreachable for a constructed matrix.
    pub fn median(&self) -> Result<f64> {
        self.as_vector().median()
    }

    /// Population variance of all elements.
    ///
    /// # Errors
    ///
    /// Carries [`MatrizError::DivisionByZero`] from the shared statistics
    /// signature; unreachable for a constructed matrix.
    pub fn variance(&self) -> Result<f64> {
        self.as_vector().variance()
    }

    /// Standard deviation of all elements.
    #[must_use]
    pub fn deviation(&self) -> f64 {
        self.as_vector().deviation()
    }
}

impl Index<usize> for Matrix {
    type Output = Vector;

    /// # Panics
    ///
    /// Panics when `index >= count_rows()`, per the standard indexing
    /// contract. Use [`Matrix::row`] for the fallible path.
    fn index(&self, index: usize) -> &Vector {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    /// Iterating a matrix yields its rows.
    fn into_iter(self) -> std::slice::Iter<'a, Vector> {
        self.rows.iter()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrizError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

/// Encodes as a nested sequence: one inner array per row.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows.iter())
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
