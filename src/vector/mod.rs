//! Vector containers: eager compressed storage and deferred views.
//!
//! Both forms implement the [`VectorOps`] contract and share one set of
//! statistics algorithms (see [`crate::stats`]).

mod dense;
mod lazy;
mod ops;

pub use dense::{Iter, Vector};
pub use lazy::LazyVector;
pub use ops::VectorOps;
