// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;
use std::fmt;

/// Number of 32-bit words in a [`BigNum`].
pub(crate) const WORD_COUNT: usize = 32;

/// A fixed-width 1024-bit unsigned integer.
///
/// The value is stored as 32 little-endian 32-bit words inline in the struct, so the
/// type is `Copy` and never allocates. All arithmetic wraps modulo 2^1024.
///
/// # Example
///
/// ```
/// use bignum::BigNum;
///
/// let x = BigNum::from_u64(21);
/// let y = x + x;
///
/// assert_eq!(y.to_u64(), 42);
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct BigNum {
    /// Little-endian word order: `words[0]` holds the least significant 32 bits.
    pub(crate) words: [u32; WORD_COUNT],
}

impl BigNum {
    /// The value zero.
    pub const ZERO: Self = Self {
        words: [0; WORD_COUNT],
    };

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// Width of the type in bits.
    pub const BITS: u32 = 1024;

    /// Creates a new number with the value zero.
    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Creates a number from a `u64`, zero-extending it to the full width.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        let mut words = [0; WORD_COUNT];
        words[0] = low_word(value);
        words[1] = high_word(value);
        Self { words }
    }

    /// Returns the low 64 bits of the number.
    ///
    /// Any bits above the 64th are simply not reported. Callers that need to know
    /// whether the value actually fits can compare against
    /// `BigNum::from_u64(u64::MAX)` first.
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        u64::from(self.words[0]) | u64::from(self.words[1]) << 32
    }

    /// Returns `true` if the number is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// assert!(BigNum::ZERO.is_zero());
    /// assert!(!BigNum::from_u64(1).is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Adds one to the number in place, wrapping to zero at the top of the range.
    pub fn inc(&mut self) {
        *self = *self + Self::ONE;
    }

    /// Subtracts one from the number in place, wrapping to the maximum value at zero.
    pub fn dec(&mut self) {
        *self = *self - Self::ONE;
    }

    /// Returns the value of the bit at `index`, counting from the least significant bit.
    pub(crate) fn bit(&self, index: u32) -> bool {
        debug_assert!(index < Self::BITS, "bit index out of range");

        self.words[word_index(index)] >> (index % 32) & 1 == 1
    }

    /// Sets the bit at `index`, counting from the least significant bit.
    pub(crate) fn set_bit(&mut self, index: u32) {
        debug_assert!(index < Self::BITS, "bit index out of range");

        self.words[word_index(index)] |= 1 << (index % 32);
    }

    /// Returns the position of the highest set bit plus one, or 0 for zero.
    pub(crate) fn bit_len(&self) -> u32 {
        for (i, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                return word_bits(i) + 32 - word.leading_zeros();
            }
        }

        0
    }
}

/// Number of bits below word `index`.
fn word_bits(index: usize) -> u32 {
    u32::try_from(index * 32).expect("word index is at most 31, so this always fits")
}

/// Index of the word holding bit `index`.
pub(crate) fn word_index(index: u32) -> usize {
    usize::try_from(index / 32).expect("bit index is below 1024, so this always fits")
}

/// Returns the low 32 bits of a 64-bit intermediate value.
#[expect(clippy::cast_possible_truncation, reason = "deliberately keeping the low half")]
pub(crate) const fn low_word(value: u64) -> u32 {
    value as u32
}

/// Returns the high 32 bits of a 64-bit intermediate value.
#[expect(clippy::cast_possible_truncation, reason = "the shift leaves at most 32 bits")]
pub(crate) const fn high_word(value: u64) -> u32 {
    (value >> 32) as u32
}

impl Default for BigNum {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..WORD_COUNT).rev() {
            match self.words[i].cmp(&other.words[i]) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum(0x{})", self.to_hex())
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u64> for BigNum {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(BigNum: Copy, Send, Sync);

    #[test]
    fn zero_is_zero() {
        assert!(BigNum::ZERO.is_zero());
        assert!(BigNum::new().is_zero());
        assert!(BigNum::default().is_zero());
        assert_eq!(BigNum::ZERO.to_u64(), 0);
    }

    #[test]
    fn u64_round_trip() {
        let value = 0xDEAD_BEEF_0BAD_F00D_u64;

        assert_eq!(BigNum::from_u64(value).to_u64(), value);
        assert_eq!(BigNum::from(value).to_u64(), value);
    }

    #[test]
    fn ordering_uses_all_words() {
        let small = BigNum::from_u64(u64::MAX);
        let large = BigNum::ONE << 512_u32;

        assert_eq!(small.cmp(&large), Ordering::Less);
        assert_eq!(large.cmp(&small), Ordering::Greater);
        assert_eq!(small.cmp(&small), Ordering::Equal);
        assert!(small < large);
    }

    #[test]
    fn inc_and_dec() {
        let mut n = BigNum::from_u64(41);

        n.inc();
        assert_eq!(n.to_u64(), 42);

        n.dec();
        n.dec();
        assert_eq!(n.to_u64(), 40);
    }

    #[test]
    fn inc_carries_across_words() {
        let mut n = BigNum::from_u64(u64::MAX);

        n.inc();

        assert_eq!(n, BigNum::ONE << 64_u32);
    }

    #[test]
    fn dec_wraps_at_zero() {
        let mut n = BigNum::ZERO;

        n.dec();

        // All 1024 bits set.
        assert_eq!(n.bit_len(), BigNum::BITS);
        assert_eq!(n + BigNum::ONE, BigNum::ZERO);
    }

    #[test]
    fn bit_len_tracks_the_highest_set_bit() {
        assert_eq!(BigNum::ZERO.bit_len(), 0);
        assert_eq!(BigNum::ONE.bit_len(), 1);
        assert_eq!(BigNum::from_u64(0xFF).bit_len(), 8);
        assert_eq!((BigNum::ONE << 1023_u32).bit_len(), 1024);
    }

    #[test]
    fn debug_shows_hex() {
        assert_eq!(format!("{:?}", BigNum::from_u64(0xBEEF)), "BigNum(0xbeef)");
        assert_eq!(format!("{}", BigNum::from_u64(0xBEEF)), "beef");
    }
}
