// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::hash::{Hash, Hasher};

use crate::{CapacityError, MAX_CAPACITY, SMALL_STRING_CAPACITY};

/// An owned, growable sequence of bytes with an explicit length.
///
/// The length counts the live content and is tracked separately from the allocated capacity,
/// so a `ByteString` can reserve room for future appends without pretending that room is
/// data. No NUL terminator is maintained - embedded `0x00` bytes are ordinary content and
/// are preserved by every operation, including [output][`ByteString::write_to`].
///
/// # Growth
///
/// Appends grow the allocation on demand; see the [crate documentation][crate] for the
/// policy. Growth replaces the allocation, never extends it in place, and capacity never
/// shrinks.
///
/// # Ownership
///
/// Each value owns exactly one allocation and the allocation is never shared. Duplication
/// is an explicit [`Clone`] that preserves the source's capacity, not just its length, and
/// yields a fully independent value. Destruction is `Drop`.
///
/// # Example
///
/// ```
/// use bytestring::ByteString;
///
/// let mut s = ByteString::from_text("Hello");
/// s.put_slice(*b" World!");
///
/// assert_eq!(s.len(), 12);
/// assert_eq!(s, b"Hello World!");
/// ```
pub struct ByteString {
    // The allocation. Its length is the capacity of the string. Fresh allocations are
    // zero-initialized; bytes at or beyond `len` are never live content.
    buf: Box<[u8]>,

    /// Bytes of live content. Invariant: `len <= buf.len()`.
    len: usize,
}

impl ByteString {
    /// Creates an empty string with no allocation.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let s = ByteString::new();
    /// assert!(s.is_empty());
    /// assert_eq!(s.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
        }
    }

    /// Creates an empty string backed by a zero-initialized allocation of exactly
    /// `capacity` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let s = ByteString::with_capacity(64);
    /// assert_eq!(s.len(), 0);
    /// assert_eq!(s.capacity(), 64);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`]. Use [`try_with_capacity()`] to handle
    /// that case as an error instead.
    ///
    /// [`try_with_capacity()`]: Self::try_with_capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).expect("requested capacity exceeds the maximum supported capacity")
    }

    /// Creates an empty string of exactly `capacity` bytes, reporting an impossible
    /// capacity as an error.
    ///
    /// The capacity bound is checked before any allocation is requested, so a rejected call
    /// has no side effects. Note that a *satisfiable* capacity the system happens to not
    /// have memory for is not an error: allocation exhaustion terminates the process, as
    /// described in the [crate documentation][crate].
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::{ByteString, MAX_CAPACITY};
    ///
    /// assert!(ByteString::try_with_capacity(1024).is_ok());
    /// assert!(ByteString::try_with_capacity(MAX_CAPACITY + 1).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` exceeds [`MAX_CAPACITY`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if capacity > MAX_CAPACITY {
            return Err(CapacityError { requested: capacity });
        }

        Ok(Self {
            buf: vec![0_u8; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Creates a string holding the bytes of `text`, with length and capacity both equal
    /// to `text.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let s = ByteString::from_text("Hello");
    /// assert_eq!(s.len(), 5);
    /// assert_eq!(s.capacity(), 5);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::copied_from_slice(text.as_bytes())
    }

    /// Creates a string holding a copy of `src`, with length and capacity both equal to
    /// `src.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let s = ByteString::copied_from_slice(&[0xCA, 0xFE, 0x00, 0xBE]);
    /// assert_eq!(s.len(), 4);
    /// assert_eq!(s, &[0xCA, 0xFE, 0x00, 0xBE]);
    /// ```
    #[must_use]
    pub fn copied_from_slice(src: &[u8]) -> Self {
        // A slice can never exceed MAX_CAPACITY, so this cannot panic.
        let mut result = Self::with_capacity(src.len());

        result.buf.copy_from_slice(src);
        result.len = src.len();

        result
    }

    /// How many bytes of live content the string holds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the string holds no live content.
    ///
    /// An empty string may still own capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many bytes of content the current allocation can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The live content as a byte slice.
    ///
    /// The slice covers exactly [`len()`][Self::len] bytes; spare capacity is not visible
    /// through it.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        // Cannot be out of bounds: len <= buf.len() is a type invariant.
        &self.buf[..self.len]
    }

    /// Grows the allocation so the capacity is at least `capacity` bytes.
    ///
    /// A request at or below the current capacity is a no-op - capacity never shrinks.
    /// Otherwise the allocation is replaced by a zero-initialized one of exactly `capacity`
    /// bytes and the live content is carried over.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::with_capacity(5);
    ///
    /// s.ensure_capacity(3);
    /// assert_eq!(s.capacity(), 5); // below current capacity - ignored
    ///
    /// s.ensure_capacity(40);
    /// assert_eq!(s.capacity(), 40);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`].
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.buf.len() >= capacity {
            return;
        }

        assert!(capacity <= MAX_CAPACITY, "requested capacity exceeds the maximum supported capacity");

        let mut replacement = vec![0_u8; capacity].into_boxed_slice();
        replacement[..self.len].copy_from_slice(&self.buf[..self.len]);

        self.buf = replacement;
    }

    /// Doubles the capacity.
    pub(crate) fn grow(&mut self) {
        let doubled = self
            .capacity()
            .checked_mul(2)
            .expect("string capacity cannot exceed usize::MAX");

        self.ensure_capacity(doubled);
    }

    /// Makes room for `additional` appended bytes, applying the growth policy, and returns
    /// the length the string will have once they are written.
    ///
    /// Small strings are resized to the exact required length; larger ones double until the
    /// append fits.
    pub(crate) fn reserve_for_append(&mut self, additional: usize) -> usize {
        let new_len = self
            .len
            .checked_add(additional)
            .expect("string length cannot exceed usize::MAX");

        if self.capacity() < SMALL_STRING_CAPACITY {
            self.ensure_capacity(new_len);
        } else {
            while self.capacity() < new_len {
                self.grow();
            }
        }

        debug_assert!(self.capacity() >= new_len);

        new_len
    }

    /// The spare capacity following the live content, for the append functions to write into.
    pub(crate) fn unfilled_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.len..]
    }

    /// Declares that content now extends to `new_len` bytes.
    pub(crate) fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());

        self.len = new_len;
    }

    /// Overwrites the string with `len` repetitions of `value`, replacing any previous
    /// content.
    ///
    /// Capacity is grown to at least `len` if needed; it is never reduced, even when `len`
    /// is smaller than the previous length.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::from_text("previous content");
    /// s.fill(b'A', 5);
    ///
    /// assert_eq!(s.len(), 5);
    /// assert_eq!(s, b"AAAAA");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`MAX_CAPACITY`].
    pub fn fill(&mut self, value: u8, len: usize) {
        self.ensure_capacity(len);

        self.buf[..len].fill(value);
        self.len = len;
    }
}

impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

/// Duplication is deliberate and deep: the clone gets its own allocation with the *same
/// capacity* as the source (not merely the same length) and a copy of the live bytes.
/// Mutating either value never affects the other.
impl Clone for ByteString {
    fn clone(&self) -> Self {
        // Capacity was valid once, so it is valid again - this cannot panic.
        let mut duplicate = Self::with_capacity(self.capacity());

        duplicate.buf[..self.len].copy_from_slice(self.as_bytes());
        duplicate.len = self.len;

        duplicate
    }
}

impl std::fmt::Debug for ByteString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteString")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &self.as_bytes())
            .finish()
    }
}

/// Hashes the live content only, consistent with equality.
impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    #[test]
    fn thread_safe_type() {
        assert_impl_all!(ByteString: Send, Sync);
    }

    #[test]
    fn new_is_empty_without_capacity() {
        let s = ByteString::new();

        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert!(s.is_empty());
        assert_eq!(s.as_bytes(), b"");
    }

    #[test]
    fn with_capacity_reserves_exactly() {
        let s = ByteString::with_capacity(37);

        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 37);
        assert!(s.is_empty());
    }

    #[test]
    fn try_with_capacity_rejects_impossible_capacity() {
        let result = ByteString::try_with_capacity(MAX_CAPACITY + 1);

        assert_eq!(
            result.expect_err("the capacity bound must be enforced"),
            CapacityError {
                requested: MAX_CAPACITY + 1
            }
        );
    }

    #[test]
    fn from_text_round_trips() {
        let s = ByteString::from_text("Hello");

        assert_eq!(s.len(), 5);
        assert_eq!(s.capacity(), 5);
        assert_eq!(s.as_bytes(), b"Hello");
    }

    #[test]
    fn copied_from_slice_preserves_embedded_nuls() {
        let s = ByteString::copied_from_slice(b"a\x00b\x00");

        assert_eq!(s.len(), 4);
        assert_eq!(s, b"a\x00b\x00");
    }

    #[test]
    fn ensure_capacity_never_shrinks() {
        let mut s = ByteString::with_capacity(5);

        s.ensure_capacity(3);

        assert_eq!(s.capacity(), 5);
    }

    #[test]
    fn ensure_capacity_preserves_content() {
        let mut s = ByteString::from_text("content");

        s.ensure_capacity(100);

        assert_eq!(s.capacity(), 100);
        assert_eq!(s, b"content");
    }

    #[test]
    fn clone_preserves_capacity_not_just_length() {
        let mut source = ByteString::with_capacity(50);
        source.put_slice(*b"abc");

        let duplicate = source.clone();

        assert_eq!(duplicate.len(), 3);
        assert_eq!(duplicate.capacity(), source.capacity());
        assert_eq!(duplicate, b"abc");
    }

    #[test]
    fn clone_is_independent_both_directions() {
        let mut source = ByteString::from_text("shared");
        let mut duplicate = source.clone();

        duplicate.put_slice(*b" plus more");
        assert_eq!(source, b"shared");

        source.fill(b'X', 2);
        assert_eq!(duplicate, b"shared plus more");
    }

    #[test]
    fn fill_replaces_content() {
        let mut s = ByteString::from_text("previous");

        s.fill(b'A', 5);

        assert_eq!(s.len(), 5);
        assert_eq!(s, b"AAAAA");
    }

    #[test]
    fn fill_grows_when_needed() {
        let mut s = ByteString::new();

        s.fill(0x7F, 64);

        assert_eq!(s.len(), 64);
        assert!(s.capacity() >= 64);
        assert!(s.as_bytes().iter().all(|&b| b == 0x7F));
    }

    #[test]
    fn fill_keeps_capacity_when_shrinking_length() {
        let mut s = ByteString::with_capacity(32);
        s.put_slice(*b"0123456789");

        s.fill(b'Z', 4);

        assert_eq!(s.len(), 4);
        assert_eq!(s.capacity(), 32);
        assert_eq!(s, b"ZZZZ");
    }

    #[test]
    fn debug_output_names_both_lengths() {
        let s = ByteString::from_text("ab");
        let rendered = format!("{s:?}");

        assert!(rendered.contains("len"));
        assert!(rendered.contains("capacity"));
    }
}
