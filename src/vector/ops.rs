//! The capability contract shared by every vector form.

use crate::error::{MatrizError, Result};
use crate::stats;

/// Capability set every vector-like container implements.
///
/// Two forms exist: the eager, compressed [`Vector`] and the deferred
/// [`LazyVector`]. Both expose ordered access, counting, mapping and the
/// same descriptive statistics; the statistics, [`extend`] and [`reduce`]
/// are provided methods so the algorithms exist exactly once, defined over
/// the fully materialized `values()`.
///
/// All operations treat the receiver as immutable: transforming methods
/// return a new vector and never touch the original (for the lazy form,
/// "consuming the sequence" is the one sanctioned form of interior state).
///
/// [`Vector`]: crate::vector::Vector
/// [`LazyVector`]: crate::vector::LazyVector
/// [`extend`]: VectorOps::extend
/// [`reduce`]: VectorOps::reduce
pub trait VectorOps: Sized {
    /// Builds a vector from a finite ordered sequence of values.
    ///
    /// # Errors
    ///
    /// The eager form returns [`MatrizError::EmptyInput`] for an empty
    /// sequence. The lazy form accepts it and surfaces the emptiness on
    /// consumption instead.
    fn from_values(values: Vec<f64>) -> Result<Self>;

    /// Fully materializes the logical contents in index order.
    fn values(&self) -> Vec<f64>;

    /// Logical length. The lazy form forces one full pass and stays
    /// re-iterable afterwards.
    fn count(&self) -> usize;

    /// Reads the element at `index`.
    ///
    /// # Errors
    ///
    /// [`MatrizError::IndexOutOfRange`] outside `[0, count)`;
    /// [`MatrizError::UnsupportedOperation`] on the lazy form, which only
    /// supports sequential consumption.
    fn get(&self, index: usize) -> Result<f64>;

    /// New vector where element `i` becomes `f(old_i, i)`.
    ///
    /// The lazy form defers the transform until the sequence is consumed.
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64, usize) -> f64 + 'static;

    /// New vector equal to the original followed by `length` copies of
    /// `fill`.
    ///
    /// # Errors
    ///
    /// Only [`from_values`](VectorOps::from_values) can fail here; with a
    /// non-empty receiver it never does.
    fn extend(&self, length: usize, fill: f64) -> Result<Self> {
        let mut values = self.values();
        values.extend(std::iter::repeat(fill).take(length));
        Self::from_values(values)
    }

    /// New vector with the last `length` elements dropped.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyInput`] when `length >= count()`:
    /// vectors are invariantly non-empty, so a reduction that would consume
    /// every element is rejected rather than clamped.
    fn reduce(&self, length: usize) -> Result<Self> {
        let mut values = self.values();
        if length >= values.len() {
            return Err(MatrizError::EmptyInput);
        }
        let keep = values.len() - length;
        values.truncate(keep);
        Self::from_values(values)
    }

    /// Arithmetic sum of all elements.
    fn sum(&self) -> f64 {
        stats::sum(&self.values())
    }

    /// Largest element.
    ///
    /// # Errors
    ///
    /// [`MatrizError::EmptyInput`] over zero values (only reachable by
    /// consuming a lazy vector twice).
    fn max(&self) -> Result<f64> {
        stats::max(&self.values())
    }

    /// Smallest element.
    ///
    /// # Errors
    ///
    /// [`MatrizError::EmptyInput`] over zero values.
    fn min(&self) -> Result<f64> {
        stats::min(&self.values())
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    ///
    /// [`MatrizError::DivisionByZero`] over zero values.
    fn mean(&self) -> Result<f64> {
        stats::mean(&self.values())
    }

    /// Median of a sorted copy; even counts average the two middle
    /// elements.
    ///
    /// # Errors
    ///
    /// [`MatrizError::EmptyInput`] over zero values.
    fn median(&self) -> Result<f64> {
        stats::median(&self.values())
    }

    /// Population variance (divisor = count).
    ///
    /// # Errors
    ///
    /// [`MatrizError::DivisionByZero`] over zero values.
    fn variance(&self) -> Result<f64> {
        stats::variance(&self.values())
    }

    /// Standard deviation; `0.0` over zero values instead of an error.
    fn deviation(&self) -> f64 {
        stats::deviation(&self.values())
    }
}
