// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

use crate::MAX_CAPACITY;

/// A requested capacity was too large to ever be satisfied by the allocator.
///
/// This is the one recoverable failure in this crate. It is a caller input error, detected
/// before any allocation is attempted - actually running out of memory terminates the
/// process instead, because a primitive of this kind cannot safely continue without the
/// memory backing its own invariants.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("requested capacity {requested} exceeds the maximum supported capacity {MAX_CAPACITY}")]
pub struct CapacityError {
    /// The capacity that was requested.
    pub requested: usize,
}
