// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Growable, length-tracked byte strings.
//!
//! A [`ByteString`] is an owned sequence of bytes with an explicit length that is tracked
//! separately from the allocated capacity. It is a counted byte blob, not a C-style string:
//! no NUL terminator is ever maintained and embedded `0x00` bytes are ordinary data.
//!
//! ```
//! use bytestring::ByteString;
//!
//! let mut greeting = ByteString::from_text("Hello");
//! greeting.put_string(&ByteString::from_text(" World!"));
//!
//! assert_eq!(greeting.len(), 12);
//! assert_eq!(greeting, b"Hello World!");
//! ```
//!
//! # Growth policy
//!
//! Appending to a `ByteString` grows the allocation on demand, with a policy tuned for the
//! two ways byte strings tend to be used:
//!
//! * Strings whose capacity is below [`SMALL_STRING_CAPACITY`] are resized to exactly the
//!   required length. Tiny strings are usually built once and never touched again, so
//!   speculative over-allocation would only waste memory.
//! * Larger strings double their capacity until the append fits. A sequence of many small
//!   appends therefore triggers O(log n) reallocations rather than one per append, at the
//!   cost of at most 2x memory overhead.
//!
//! Capacity never shrinks. [`ensure_capacity()`] with a value at or below the current
//! capacity is a no-op, and no shrink operation exists.
//!
//! # Ownership
//!
//! Every `ByteString` owns its allocation exclusively. Passing one around is a move;
//! duplicating one is an explicit [`Clone`] that copies the live bytes into an independent
//! allocation of the same capacity. Once a value has been moved or dropped the compiler
//! rejects further use, so there is no destroyed-but-reachable state to guard against at
//! runtime.
//!
//! # Failure model
//!
//! Running out of memory is not a recoverable condition for a primitive of this kind: the
//! global allocator terminates the process and no operation in this crate checks allocation
//! results. The one recoverable failure is asking for a capacity larger than the allocator
//! could ever satisfy, which [`try_with_capacity()`] reports as a [`CapacityError`] before
//! any allocation is attempted.
//!
//! [`ensure_capacity()`]: ByteString::ensure_capacity
//! [`try_with_capacity()`]: ByteString::try_with_capacity

mod constants;
mod error;
mod slice;
mod string;
mod string_put;
mod write;

pub use constants::{MAX_CAPACITY, SMALL_STRING_CAPACITY};
pub use error::CapacityError;
pub use string::ByteString;
