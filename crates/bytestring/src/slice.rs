// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Conversions and comparisons against the standard slice and string types.

use std::ffi::CStr;

use crate::ByteString;

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        Self::copied_from_slice(value)
    }
}

impl<const LEN: usize> From<&[u8; LEN]> for ByteString {
    fn from(value: &[u8; LEN]) -> Self {
        Self::copied_from_slice(value.as_slice())
    }
}

/// Conversion from a NUL-terminated string; the terminator is excluded from the content.
impl From<&CStr> for ByteString {
    fn from(value: &CStr) -> Self {
        Self::copied_from_slice(value.to_bytes())
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Equality considers the live content only - two strings with equal bytes but different
/// capacities compare equal.
impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<ByteString> for &[u8] {
    fn eq(&self, other: &ByteString) -> bool {
        other.eq(self)
    }
}

impl<const LEN: usize> PartialEq<&[u8; LEN]> for ByteString {
    fn eq(&self, other: &&[u8; LEN]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const LEN: usize> PartialEq<ByteString> for &[u8; LEN] {
    fn eq(&self, other: &ByteString) -> bool {
        other.eq(self)
    }
}
