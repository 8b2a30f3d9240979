//! Matriz: immutable vector and matrix containers with descriptive
//! statistics.
//!
//! Matriz models one-dimensional vectors and two-dimensional matrices of
//! `f64` values as immutable data: every transforming operation returns a
//! new container. Two vector forms sit behind one capability contract: an
//! eager form whose storage is compressed around its most frequent value,
//! and a lazy form backed by a deferred production of values, used for the
//! column and flattened views a matrix derives on demand. It is a container
//! abstraction, not a linear-algebra engine: there is no multiplication,
//! inversion or decomposition here.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![3.0, 1.0, 2.0],
//!     vec![2.0, 3.0, 1.0],
//! ]).unwrap();
//!
//! assert!(m.is_square());
//! assert_eq!(m.count(), 9);
//! assert_eq!(m.mean().unwrap(), 2.0);
//!
//! // Columns are lazy views; nothing is copied until consumption.
//! let first_column = m.column(0).unwrap();
//! assert_eq!(first_column.values(), vec![1.0, 3.0, 2.0]);
//!
//! // Transforms return new matrices; the original is untouched.
//! let doubled = m.map(|value, _| value * 2.0);
//! assert_eq!(doubled.sum(), 36.0);
//! assert_eq!(m.sum(), 18.0);
//! ```
//!
//! # Modules
//!
//! - [`vector`]: the [`VectorOps`](vector::VectorOps) contract and its two
//!   forms, [`Vector`](vector::Vector) and [`LazyVector`](vector::LazyVector)
//! - [`matrix`]: [`Matrix`](matrix::Matrix),
//!   [`SquareMatrix`](matrix::SquareMatrix) and
//!   [`MatrixBuilder`](matrix::MatrixBuilder)
//! - [`stats`]: the shared descriptive-statistics algorithms
//! - [`error`]: the crate error type
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod matrix;
pub mod prelude;
pub mod stats;
pub mod vector;

pub use error::{MatrizError, Result};
