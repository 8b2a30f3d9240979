//! Deferred vector backed by a one-shot stream or a restartable factory.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::ops::VectorOps;
use crate::error::{MatrizError, Result};

type BoxIter<'a> = Box<dyn Iterator<Item = f64> + 'a>;

/// Where the values come from.
///
/// `Stream` is the one-shot form: the boxed iterator is taken out of its
/// slot on first consumption and nothing comes back. `Factory` holds a
/// shared closure that produces a fresh iterator per consumption, which is
/// the restartable form every matrix-derived view uses.
enum Source<'a> {
    Stream(RefCell<Option<BoxIter<'a>>>),
    Factory(Rc<dyn Fn() -> BoxIter<'a> + 'a>),
}

/// A vector view over a deferred production of values.
///
/// Nothing is materialized until the view is consumed, so a matrix column
/// or flattening costs nothing to hand out. The trade-off is the read
/// contract: only sequential consumption is supported, and a stream-backed
/// instance is exhausted by its first full pass. [`count`] is the one
/// sanctioned exception: it buffers a stream and re-installs the buffer so
/// iteration still works afterwards.
///
/// The interior state is `Rc`/`RefCell`-based, so the type is neither
/// `Send` nor `Sync`: one logical consumer per instance, enforced by the
/// compiler.
///
/// [`count`]: VectorOps::count
///
/// # Examples
///
/// ```
/// use matriz::prelude::*;
///
/// let v = LazyVector::from_factory(|| (1..=4).map(f64::from));
/// assert_eq!(v.count(), 4);
/// assert_eq!(v.values(), vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(v.sum(), 10.0);
/// ```
pub struct LazyVector<'a> {
    source: Source<'a>,
}

impl<'a> LazyVector<'a> {
    /// Wraps a one-shot iterator. The first full consumption exhausts the
    /// vector; later consumption yields nothing further.
    pub fn new<I>(values: I) -> Self
    where
        I: Iterator<Item = f64> + 'a,
    {
        Self {
            source: Source::Stream(RefCell::new(Some(Box::new(values)))),
        }
    }

    /// Wraps a factory re-invoked on every consumption, making the view
    /// restartable.
    pub fn from_factory<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: Iterator<Item = f64> + 'a,
    {
        Self {
            source: Source::Factory(Rc::new(move || Box::new(factory()) as BoxIter<'a>)),
        }
    }

    fn consume(&self) -> Vec<f64> {
        match &self.source {
            Source::Stream(slot) => match slot.borrow_mut().take() {
                Some(stream) => stream.collect(),
                None => Vec::new(),
            },
            Source::Factory(make) => make().collect(),
        }
    }
}

impl<'a> VectorOps for LazyVector<'a> {
    /// Unlike the dense form, an empty sequence is accepted here: creation
    /// defers everything, including the emptiness, to consumption.
    fn from_values(values: Vec<f64>) -> Result<Self> {
        Ok(Self::new(values.into_iter()))
    }

    fn values(&self) -> Vec<f64> {
        self.consume()
    }

    /// Forces one full pass. A stream source is buffered and re-installed
    /// so the instance remains consumable after counting; a factory source
    /// is counted on a fresh iterator with no state change.
    fn count(&self) -> usize {
        match &self.source {
            Source::Stream(slot) => {
                let buffered: Vec<f64> = match slot.borrow_mut().take() {
                    Some(stream) => stream.collect(),
                    None => Vec::new(),
                };
                let count = buffered.len();
                *slot.borrow_mut() = Some(Box::new(buffered.into_iter()));
                count
            }
            Source::Factory(make) => make().count(),
        }
    }

    fn get(&self, _index: usize) -> Result<f64> {
        Err(MatrizError::UnsupportedOperation {
            operation: "indexed access on a lazy vector",
        })
    }

    /// Layers the transform without materializing. A stream source moves
    /// into the mapped vector (consuming the result exhausts the original,
    /// as for any other consumption); a factory source is shared, so both
    /// views stay restartable.
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64, usize) -> f64 + 'static,
    {
        match &self.source {
            Source::Stream(slot) => {
                let stream: BoxIter<'a> = match slot.borrow_mut().take() {
                    Some(stream) => {
                        Box::new(stream.enumerate().map(move |(index, value)| f(value, index)))
                    }
                    None => Box::new(std::iter::empty()),
                };
                Self {
                    source: Source::Stream(RefCell::new(Some(stream))),
                }
            }
            Source::Factory(make) => {
                let make = Rc::clone(make);
                let f = Rc::new(f);
                Self {
                    source: Source::Factory(Rc::new(move || {
                        let f = Rc::clone(&f);
                        Box::new(
                            make()
                                .enumerate()
                                .map(move |(index, value)| f(value, index)),
                        ) as BoxIter<'a>
                    })),
                }
            }
        }
    }
}

impl<'a> IntoIterator for LazyVector<'a> {
    type Item = f64;
    type IntoIter = BoxIter<'a>;

    /// Consuming iteration over the deferred values.
    fn into_iter(self) -> BoxIter<'a> {
        match self.source {
            Source::Stream(slot) => slot
                .into_inner()
                .unwrap_or_else(|| Box::new(std::iter::empty())),
            Source::Factory(make) => make(),
        }
    }
}

impl fmt::Debug for LazyVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Stream(slot) => f
                .debug_struct("LazyVector")
                .field("source", &"stream")
                .field("exhausted", &slot.borrow().is_none())
                .finish(),
            Source::Factory(_) => f
                .debug_struct("LazyVector")
                .field("source", &"factory")
                .finish(),
        }
    }
}

/// Encodes as a plain sequence of values. Serializing counts as a
/// consumption for a stream-backed instance.
impl Serialize for LazyVector<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let values = self.consume();
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in &values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(test)]
#[path = "lazy_tests.rs"]
mod tests;
