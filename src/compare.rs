//! Ordering strategies for the heap
//!
//! The heap never calls [`Ord`] directly: every comparison goes through the
//! [`TryCompare`] strategy stored inside the container. A strategy expresses
//! a strict weak ordering in terms of "has strictly lower priority than", and
//! it is allowed to fail at any comparison, which is why [`try_less`] returns
//! a `Result`. Heap operations that hit a failing comparison roll back
//! completely; see [`LeftistHeap`](crate::leftist::LeftistHeap).
//!
//! [`try_less`]: TryCompare::try_less

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised by a [`TryCompare`] strategy.
///
/// Wraps whatever error the comparator produced so heap operations can
/// surface it through
/// [`HeapError::OperationFailed`](crate::error::HeapError::OperationFailed).
#[derive(Debug, Error)]
#[error("comparator failed: {source}")]
pub struct CompareError {
    #[from]
    source: BoxError,
}

impl CompareError {
    /// Wraps an arbitrary error (or error message) as a comparison failure.
    pub fn new<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        CompareError {
            source: source.into(),
        }
    }
}

/// A strict weak ordering that may fail.
///
/// `try_less(a, b)` returns `true` when `a` has strictly lower priority than
/// `b`; the element that no other element outranks is the heap's top. The
/// strategy is stored by value inside the container and cloned whenever the
/// container is cloned.
pub trait TryCompare<T> {
    /// Compares two elements, returning whether `a` ranks strictly below `b`.
    fn try_less(&self, a: &T, b: &T) -> Result<bool, CompareError>;
}

/// The default ordering: `a < b` through [`Ord`]. Never fails.
///
/// Under this strategy the *maximum* element is the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> TryCompare<T> for NaturalOrder {
    fn try_less(&self, a: &T, b: &T) -> Result<bool, CompareError> {
        Ok(a < b)
    }
}

/// The reversed ordering: the *minimum* element is the top. Never fails.
///
/// The same polarity flip [`std::cmp::Reverse`] provides for
/// [`BinaryHeap`](std::collections::BinaryHeap), packaged as a strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord> TryCompare<T> for ReverseOrder {
    fn try_less(&self, a: &T, b: &T) -> Result<bool, CompareError> {
        Ok(b < a)
    }
}

/// Any closure with the right shape is a strategy.
///
/// ```rust
/// use leftist_heap::{CompareError, LeftistHeap};
///
/// // order pairs by their second component
/// let mut heap = LeftistHeap::with_comparator(|a: &(u32, i64), b: &(u32, i64)| {
///     Ok::<_, CompareError>(a.1 < b.1)
/// });
/// heap.push((1, 10)).unwrap();
/// heap.push((2, 30)).unwrap();
/// assert_eq!(heap.peek().unwrap(), &(2, 30));
/// ```
impl<T, F> TryCompare<T> for F
where
    F: Fn(&T, &T) -> Result<bool, CompareError>,
{
    fn try_less(&self, a: &T, b: &T) -> Result<bool, CompareError> {
        self(a, b)
    }
}
