//! Mergeable Priority Queue for Rust
//!
//! This crate provides a priority queue built on a *leftist heap*: a
//! heap-ordered binary tree whose shape invariant keeps the right spine at
//! O(log n) nodes, so two queues can be merged in logarithmic time instead of
//! the linear rebuild an array-backed binary heap needs.
//!
//! Unlike [`std::collections::BinaryHeap`], the ordering is not baked in
//! through [`Ord`]: it is a strategy object stored inside the container, and
//! it is allowed to *fail* at any individual comparison. Every mutating
//! operation reports such a failure without applying any part of its change,
//! so the queue's elements, count, and top are exactly what they were before
//! the call.
//!
//! # Features
//!
//! - **O(1)** access to the top element, **O(log n)** push and pop
//! - **O(log n) merge**, transferring ownership of all nodes from the source
//! - **Fallible ordering strategies** via [`TryCompare`], with full rollback
//!   when a comparison fails mid-operation
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::LeftistHeap;
//!
//! # fn main() -> Result<(), leftist_heap::HeapError> {
//! let mut heap = LeftistHeap::new();
//! heap.push(5)?;
//! heap.push(3)?;
//! heap.push(8)?;
//! heap.push(1)?;
//!
//! assert_eq!(heap.peek()?, &8);
//! assert_eq!(heap.pop()?, 8);
//! assert_eq!(heap.len(), 3);
//!
//! let mut other = LeftistHeap::new();
//! other.push(10)?;
//! heap.merge(&mut other)?;
//! assert!(other.is_empty());
//! assert_eq!(heap.peek()?, &10);
//! # Ok(())
//! # }
//! ```

pub mod compare;
pub mod error;
pub mod leftist;

// Re-export the main types for convenience
pub use compare::{CompareError, NaturalOrder, ReverseOrder, TryCompare};
pub use error::HeapError;
pub use leftist::LeftistHeap;
