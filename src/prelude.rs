//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrizError, Result};
pub use crate::matrix::{Matrix, MatrixBuilder, SquareMatrix};
pub use crate::vector::{LazyVector, Vector, VectorOps};
