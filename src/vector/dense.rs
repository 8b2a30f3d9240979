//! Eager vector with most-frequent-value compression.

use std::collections::HashMap;
use std::ops::Index;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::ops::VectorOps;
use crate::error::{MatrizError, Result};

/// An immutable, fixed-length vector of `f64` values.
///
/// Storage is compressed around the single most frequent value: that value
/// is kept once as the *fallback* and only the positions holding something
/// else are stored explicitly. Skewed samples (many repeated entries) pay
/// for one scalar plus the minority, at the cost of a map lookup per read.
/// Reads stay O(1); the container is read-only after construction and every
/// transforming operation returns a new vector.
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
/// assert_eq!(v.len(), 9);
/// assert_eq!(v.fallback(), 3.0);
/// assert_eq!(v.stored_len(), 6);
/// assert_eq!(v.median().unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    len: usize,
    fallback: f64,
    overrides: HashMap<usize, f64>,
}

impl Vector {
    /// Creates a vector from an owned sequence of values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyInput`] if `values` is empty.
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(MatrizError::EmptyInput);
        }
        Ok(Self::compress(&values))
    }

    /// Creates a vector from a slice of values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::EmptyInput`] if `values` is empty.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(MatrizError::EmptyInput);
        }
        Ok(Self::compress(values))
    }

    /// Construction path for values already known to be non-empty, used by
    /// `map` and the matrix transforms.
    pub(crate) fn from_values_unchecked(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        Self::compress(&values)
    }

    /// Tallies value frequencies, elects the most frequent value as the
    /// fallback and stores only the positions that differ from it.
    ///
    /// Equality is bit-equality (`f64::to_bits`), so `-0.0` and `0.0` count
    /// separately and NaN payloads group by pattern. Ties for the maximum
    /// tally go to the value first encountered in input order: deterministic,
    /// but not part of the contract.
    fn compress(values: &[f64]) -> Self {
        let mut tally: HashMap<u64, usize> = HashMap::new();
        for value in values {
            *tally.entry(value.to_bits()).or_insert(0) += 1;
        }

        let mut fallback = values[0];
        let mut best = 0usize;
        for &value in values {
            let count = tally[&value.to_bits()];
            if count > best {
                best = count;
                fallback = value;
            }
        }

        let overrides = values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.to_bits() != fallback.to_bits())
            .map(|(index, &value)| (index, value))
            .collect();

        Self {
            len: values.len(),
            fallback,
            overrides,
        }
    }

    /// Logical length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: empty vectors are rejected at construction. Kept so
    /// the type plays well with `len`-based generic code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The elected most-frequent value.
    #[must_use]
    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Number of positions stored explicitly (those differing from the
    /// fallback). Exposes how well the compression worked.
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.overrides.len()
    }

    /// Iterates the effective values in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            vector: self,
            index: 0,
        }
    }

    /// Read without a bounds check; callers guarantee `index < len`.
    pub(crate) fn value_at(&self, index: usize) -> f64 {
        debug_assert!(index < self.len);
        self.overrides.get(&index).copied().unwrap_or(self.fallback)
    }
}

impl VectorOps for Vector {
    fn from_values(values: Vec<f64>) -> Result<Self> {
        Self::from_vec(values)
    }

    fn values(&self) -> Vec<f64> {
        self.iter().collect()
    }

    fn count(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<f64> {
        if index >= self.len {
            return Err(MatrizError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.value_at(index))
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64, usize) -> f64 + 'static,
    {
        Self::from_values_unchecked(
            self.iter()
                .enumerate()
                .map(|(index, value)| f(value, index))
                .collect(),
        )
    }
}

/// Iterator over the effective values of a [`Vector`].
#[derive(Debug)]
pub struct Iter<'a> {
    vector: &'a Vector,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.vector.len {
            return None;
        }
        let value = self.vector.value_at(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// # Panics
    ///
    /// Panics when `index >= len`, per the standard indexing contract. Use
    /// [`VectorOps::get`] for the fallible path.
    fn index(&self, index: usize) -> &f64 {
        assert!(
            index < self.len,
            "index {index} out of range for vector of length {}",
            self.len
        );
        self.overrides.get(&index).unwrap_or(&self.fallback)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = MatrizError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_vec(values)
    }
}

/// Encodes as a plain sequence of the effective values; the compressed
/// layout is an internal detail and never leaves the process.
impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for value in self.iter() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<f64>::deserialize(deserializer)?;
        Vector::from_vec(values).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "dense_tests.rs"]
mod tests;
