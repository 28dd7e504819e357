//! Error types for heap operations

use crate::compare::CompareError;
use thiserror::Error;

/// Error type for heap operations.
///
/// An operation that fails with [`OperationFailed`](HeapError::OperationFailed)
/// guarantees that the heap's observable state — its elements, their count,
/// and the top — is exactly what it was before the call, and for
/// [`merge`](crate::leftist::LeftistHeap::merge) that the source heap is
/// intact as well.
#[derive(Debug, Error)]
pub enum HeapError {
    /// `peek` or `pop` was called on an empty container.
    #[error("container is empty")]
    EmptyContainer,

    /// The ordering strategy failed mid-operation; no part of the operation
    /// was applied.
    #[error("heap operation aborted: {0}")]
    OperationFailed(#[source] CompareError),
}
