// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the append functions for ease of maintenance.

use std::borrow::Borrow;

use num_traits::ToBytes;

use crate::ByteString;

impl ByteString {
    /// Appends a slice of bytes to the end of the string, growing the capacity as needed.
    ///
    /// An empty slice is a valid no-op. The growth policy is described in the
    /// [crate documentation][crate].
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::from_text("Hello");
    /// s.put_slice(*b" World!");
    ///
    /// assert_eq!(s, b"Hello World!");
    /// assert!(s.capacity() >= s.len());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    pub fn put_slice(&mut self, src: impl Borrow<[u8]>) {
        let src = src.borrow();

        if src.is_empty() {
            return;
        }

        let new_len = self.reserve_for_append(src.len());

        self.unfilled_mut()[..src.len()].copy_from_slice(src);
        self.set_len(new_len);
    }

    /// Appends the live content of another string.
    ///
    /// Only the other string's live bytes are appended; its spare capacity plays no role.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut greeting = ByteString::from_text("Hello");
    /// let addressee = ByteString::from_text(" World!");
    ///
    /// greeting.put_string(&addressee);
    ///
    /// assert_eq!(greeting.len(), 12);
    /// assert_eq!(addressee.len(), 7); // the source is unaffected
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    pub fn put_string(&mut self, other: &Self) {
        self.put_slice(other.as_bytes());
    }

    /// Appends a single byte.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::new();
    /// s.put_byte(0xCA);
    /// s.put_byte(0xFE);
    ///
    /// assert_eq!(s, &[0xCA, 0xFE]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    pub fn put_byte(&mut self, value: u8) {
        self.put_slice([value]);
    }

    /// Appends multiple repetitions of a byte.
    ///
    /// Unlike [`fill()`][Self::fill], this appends after the existing content rather than
    /// replacing it.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::from_text("HDR:");
    /// s.put_byte_repeated(0x00, 4);
    ///
    /// assert_eq!(s, b"HDR:\x00\x00\x00\x00");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    pub fn put_byte_repeated(&mut self, value: u8, count: usize) {
        if count == 0 {
            return;
        }

        let new_len = self.reserve_for_append(count);

        self.unfilled_mut()[..count].fill(value);
        self.set_len(new_len);
    }

    /// Appends a number of type `T` in little-endian representation.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::new();
    /// s.put_num_le(0x1234_u16);
    ///
    /// assert_eq!(s, &[0x34, 0x12]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn put_num_le<T: ToBytes>(&mut self, value: T) {
        let bytes = value.to_le_bytes();
        self.put_slice(bytes);
    }

    /// Appends a number of type `T` in big-endian representation.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let mut s = ByteString::new();
    /// s.put_num_be(0xCAFE_u16);
    ///
    /// assert_eq!(s, &[0xCA, 0xFE]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn put_num_be<T: ToBytes>(&mut self, value: T) {
        let bytes = value.to_be_bytes();
        self.put_slice(bytes);
    }

    /// Appends a number of type `T` in native-endian representation.
    ///
    /// # Panics
    ///
    /// Panics if the resulting length would be greater than `usize::MAX`.
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn put_num_ne<T: ToBytes>(&mut self, value: T) {
        let bytes = value.to_ne_bytes();
        self.put_slice(bytes);
    }
}
