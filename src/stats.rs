//! Shared descriptive statistics over materialized sequences.
//!
//! Every container in this crate funnels its statistics through these free
//! functions: dense and lazy vectors call them from the [`VectorOps`]
//! provided methods, and matrices delegate through their row-major
//! flattening. Keeping a single implementation means even/odd median
//! handling and the population-variance divisor are decided exactly once.
//!
//! [`VectorOps`]: crate::vector::VectorOps
//!
//! # Examples
//!
//! ```
//! let values = [1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! assert_eq!(matriz::stats::sum(&values), 34.0);
//! assert_eq!(matriz::stats::median(&values).unwrap(), 3.0);
//! assert!((matriz::stats::variance(&values).unwrap() - 3.28).abs() < 0.005);
//! ```

use crate::error::{MatrizError, Result};

/// Arithmetic sum of all elements. Returns `0.0` for an empty slice.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean: `sum / count`.
///
/// # Errors
///
/// Returns [`MatrizError::DivisionByZero`] for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MatrizError::DivisionByZero);
    }
    Ok(sum(values) / values.len() as f64)
}

/// Median over a sorted copy of the values.
///
/// Odd counts return the exact middle element; even counts return the
/// arithmetic mean of the two middle elements. The input order is never
/// mutated.
///
/// # Errors
///
/// Returns [`MatrizError::EmptyInput`] for an empty slice.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MatrizError::EmptyInput);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Population variance: mean of squared deviations from the mean, with
/// divisor `count` (not `count - 1`).
///
/// # Errors
///
/// Returns [`MatrizError::DivisionByZero`] for an empty slice.
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MatrizError::DivisionByZero);
    }

    let mean = sum(values) / values.len() as f64;
    let squared: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Ok(squared / values.len() as f64)
}

/// Standard deviation: square root of the population variance.
///
/// Returns `0.0` for an empty slice instead of an error.
#[must_use]
pub fn deviation(values: &[f64]) -> f64 {
    match variance(values) {
        Ok(var) => var.sqrt(),
        Err(_) => 0.0,
    }
}

/// Largest value.
///
/// # Errors
///
/// Returns [`MatrizError::EmptyInput`] for an empty slice.
pub fn max(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(MatrizError::EmptyInput)
}

/// Smallest value.
///
/// # Errors
///
/// Returns [`MatrizError::EmptyInput`] for an empty slice.
pub fn min(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(MatrizError::EmptyInput)
}
