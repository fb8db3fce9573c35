// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the bitwise operators for ease of maintenance.

use std::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

use crate::num::{BigNum, WORD_COUNT, word_index};

impl BitAnd for BigNum {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        let mut words = [0; WORD_COUNT];

        for i in 0..WORD_COUNT {
            words[i] = self.words[i] & rhs.words[i];
        }

        Self { words }
    }
}

impl BitOr for BigNum {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        let mut words = [0; WORD_COUNT];

        for i in 0..WORD_COUNT {
            words[i] = self.words[i] | rhs.words[i];
        }

        Self { words }
    }
}

impl BitXor for BigNum {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        let mut words = [0; WORD_COUNT];

        for i in 0..WORD_COUNT {
            words[i] = self.words[i] ^ rhs.words[i];
        }

        Self { words }
    }
}

impl Shl<u32> for BigNum {
    type Output = Self;

    /// Shifts left by `bits` positions. Bits shifted past the top are lost; shifting
    /// by the full width or more yields zero.
    fn shl(self, bits: u32) -> Self {
        if bits >= Self::BITS {
            return Self::ZERO;
        }

        let word_shift = word_index(bits);
        let bit_shift = bits % 32;
        let mut words = [0; WORD_COUNT];

        for i in word_shift..WORD_COUNT {
            let src = i - word_shift;
            let mut value = self.words[src] << bit_shift;

            if bit_shift > 0 && src > 0 {
                value |= self.words[src - 1] >> (32 - bit_shift);
            }

            words[i] = value;
        }

        Self { words }
    }
}

impl Shr<u32> for BigNum {
    type Output = Self;

    /// Shifts right by `bits` positions, filling with zeros from the top. Shifting by
    /// the full width or more yields zero.
    fn shr(self, bits: u32) -> Self {
        if bits >= Self::BITS {
            return Self::ZERO;
        }

        let word_shift = word_index(bits);
        let bit_shift = bits % 32;
        let mut words = [0; WORD_COUNT];

        for i in 0..WORD_COUNT - word_shift {
            let src = i + word_shift;
            let mut value = self.words[src] >> bit_shift;

            if bit_shift > 0 && src + 1 < WORD_COUNT {
                value |= self.words[src + 1] << (32 - bit_shift);
            }

            words[i] = value;
        }

        Self { words }
    }
}
