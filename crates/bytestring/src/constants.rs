// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Strings with a capacity below this threshold grow to exactly the required length instead
/// of doubling.
///
/// The assumption is that a string this small is likely to stay small, so reserving spare
/// capacity for future appends would waste memory more often than it saves a reallocation.
/// Once a string's capacity reaches this threshold, appends switch to capacity doubling.
///
/// This is an efficiency fine-tuning knob and has no effect on correctness.
pub const SMALL_STRING_CAPACITY: usize = 20;

/// The largest capacity a [`ByteString`][crate::ByteString] can be asked to reserve.
///
/// This is `isize::MAX`, the largest single allocation the Rust allocator permits. The bound
/// is checked before any allocation is requested; see
/// [`ByteString::try_with_capacity()`][crate::ByteString::try_with_capacity].
pub const MAX_CAPACITY: usize = usize::MAX >> 1;
