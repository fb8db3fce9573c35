// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the arithmetic operators for ease of maintenance.

use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::num::{BigNum, WORD_COUNT, high_word, low_word};

impl BigNum {
    /// Divides `self` by `divisor`, returning the quotient and the remainder together.
    ///
    /// This is the primitive the [`Div`] and [`Rem`] operators are built on; call it
    /// directly when both halves are needed, since the division only runs once.
    ///
    /// # Example
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let (quotient, remainder) = BigNum::from_u64(47).divmod(&BigNum::from_u64(10));
    ///
    /// assert_eq!(quotient.to_u64(), 4);
    /// assert_eq!(remainder.to_u64(), 7);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn divmod(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero");

        // Schoolbook binary long division, one dividend bit at a time.
        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;

        for index in (0..self.bit_len()).rev() {
            remainder = remainder << 1_u32;
            if self.bit(index) {
                remainder.set_bit(0);
            }

            if remainder >= *divisor {
                remainder = remainder - *divisor;
                quotient.set_bit(index);
            }
        }

        (quotient, remainder)
    }

    /// Raises `self` to the power `exponent`, wrapping modulo 2^1024.
    ///
    /// Uses binary exponentiation, so even enormous exponents finish quickly. As with
    /// the machine integer types, `pow` defines zero to the zeroth power as one.
    #[must_use]
    pub fn pow(&self, exponent: &Self) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        for index in 0..exponent.bit_len() {
            if exponent.bit(index) {
                result = result * base;
            }

            base = base * base;
        }

        result
    }

    /// Returns the integer square root, the largest value whose square is `<= self`.
    ///
    /// # Example
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// assert_eq!(BigNum::from_u64(99).isqrt().to_u64(), 9);
    /// assert_eq!(BigNum::from_u64(100).isqrt().to_u64(), 10);
    /// ```
    #[must_use]
    pub fn isqrt(&self) -> Self {
        let mut result = Self::ZERO;

        // The root has at most half the bits of the input. Candidates stay below
        // 2^512, so squaring them cannot wrap.
        let root_bits = self.bit_len().div_ceil(2);

        for index in (0..root_bits).rev() {
            let mut candidate = result;
            candidate.set_bit(index);

            if candidate * candidate <= *self {
                result = candidate;
            }
        }

        result
    }
}

impl Add for BigNum {
    type Output = Self;

    /// Adds two numbers, wrapping modulo 2^1024.
    fn add(self, rhs: Self) -> Self {
        let mut words = [0; WORD_COUNT];
        let mut carry = 0_u64;

        for i in 0..WORD_COUNT {
            let sum = u64::from(self.words[i]) + u64::from(rhs.words[i]) + carry;
            words[i] = low_word(sum);
            carry = u64::from(high_word(sum));
        }

        // A final carry out of the top word has nowhere to go and is dropped.
        Self { words }
    }
}

impl Sub for BigNum {
    type Output = Self;

    /// Subtracts `rhs`, wrapping modulo 2^1024 when `rhs` is larger.
    fn sub(self, rhs: Self) -> Self {
        let mut words = [0; WORD_COUNT];
        let mut borrow = 0_u64;

        for i in 0..WORD_COUNT {
            let minuend = u64::from(self.words[i]);
            let subtrahend = u64::from(rhs.words[i]) + borrow;

            if minuend >= subtrahend {
                words[i] = low_word(minuend - subtrahend);
                borrow = 0;
            } else {
                words[i] = low_word((1_u64 << 32) + minuend - subtrahend);
                borrow = 1;
            }
        }

        Self { words }
    }
}

impl Mul for BigNum {
    type Output = Self;

    /// Multiplies two numbers, wrapping modulo 2^1024.
    fn mul(self, rhs: Self) -> Self {
        let mut words = [0; WORD_COUNT];

        for i in 0..WORD_COUNT {
            if self.words[i] == 0 {
                continue;
            }

            let mut carry = 0_u64;

            // Partial products above the top word wrap away, so stop early.
            for j in 0..WORD_COUNT - i {
                let product = u64::from(self.words[i]) * u64::from(rhs.words[j])
                    + u64::from(words[i + j])
                    + carry;
                words[i + j] = low_word(product);
                carry = u64::from(high_word(product));
            }
        }

        Self { words }
    }
}

impl Div for BigNum {
    type Output = Self;

    /// Returns the quotient of the division, discarding any remainder.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        self.divmod(&rhs).0
    }
}

impl Rem for BigNum {
    type Output = Self;

    /// Returns the remainder of the division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self {
        self.divmod(&rhs).1
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_small() {
        let sum = BigNum::from_u64(0xDEAD_0000) + BigNum::from_u64(0xBEEF);

        assert_eq!(sum.to_u64(), 0xDEAD_BEEF);
    }

    #[test]
    fn add_carries_across_every_word() {
        let max = BigNum::ZERO - BigNum::ONE;

        assert_eq!(max + BigNum::ONE, BigNum::ZERO);
        assert_eq!(max + max, max - BigNum::ONE);
    }

    #[test]
    fn sub_borrows_across_words() {
        let x = BigNum::ONE << 128_u32;

        assert_eq!((x - BigNum::ONE).bit_len(), 128);
        assert_eq!(x - x, BigNum::ZERO);
    }

    #[test]
    fn mul_small() {
        let product = BigNum::from_u64(6) * BigNum::from_u64(7);

        assert_eq!(product.to_u64(), 42);
    }

    #[test]
    fn mul_reaches_the_high_words() {
        let x = BigNum::ONE << 500_u32;

        assert_eq!(x * x, BigNum::ONE << 1000_u32);
    }

    #[test]
    fn mul_wraps_at_the_width() {
        let x = BigNum::ONE << 512_u32;

        assert_eq!(x * x, BigNum::ZERO);
    }

    #[test]
    fn divmod_small() {
        let (quotient, remainder) = BigNum::from_u64(47).divmod(&BigNum::from_u64(10));

        assert_eq!(quotient.to_u64(), 4);
        assert_eq!(remainder.to_u64(), 7);
    }

    #[test]
    fn divmod_wide_values() {
        let dividend = (BigNum::ONE << 300_u32) + BigNum::from_u64(123);
        let divisor = BigNum::ONE << 100_u32;

        let (quotient, remainder) = dividend.divmod(&divisor);

        assert_eq!(quotient, BigNum::ONE << 200_u32);
        assert_eq!(remainder.to_u64(), 123);
    }

    #[test]
    fn div_and_rem_match_divmod() {
        let dividend = BigNum::from_u64(1_000_003);
        let divisor = BigNum::from_u64(997);

        assert_eq!(dividend / divisor, BigNum::from_u64(1_000_003 / 997));
        assert_eq!(dividend % divisor, BigNum::from_u64(1_000_003 % 997));
    }

    #[test]
    fn divmod_by_larger_divisor() {
        let (quotient, remainder) = BigNum::from_u64(5).divmod(&BigNum::from_u64(100));

        assert_eq!(quotient, BigNum::ZERO);
        assert_eq!(remainder.to_u64(), 5);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn divmod_by_zero_panics() {
        drop(BigNum::from_u64(1).divmod(&BigNum::ZERO));
    }

    #[test]
    fn pow_small() {
        assert_eq!(BigNum::from_u64(2).pow(&BigNum::from_u64(10)).to_u64(), 1024);
        assert_eq!(BigNum::from_u64(3).pow(&BigNum::from_u64(4)).to_u64(), 81);
    }

    #[test]
    fn pow_edge_cases() {
        assert_eq!(BigNum::ZERO.pow(&BigNum::ZERO), BigNum::ONE);
        assert_eq!(BigNum::from_u64(42).pow(&BigNum::ZERO), BigNum::ONE);
        assert_eq!(BigNum::ZERO.pow(&BigNum::from_u64(42)), BigNum::ZERO);
    }

    #[test]
    fn pow_reaches_the_full_width() {
        assert_eq!(BigNum::from_u64(2).pow(&BigNum::from_u64(1000)), BigNum::ONE << 1000_u32);
    }

    #[test]
    fn isqrt_values() {
        assert_eq!(BigNum::ZERO.isqrt(), BigNum::ZERO);
        assert_eq!(BigNum::ONE.isqrt(), BigNum::ONE);
        assert_eq!(BigNum::from_u64(3).isqrt().to_u64(), 1);
        assert_eq!(BigNum::from_u64(4).isqrt().to_u64(), 2);
        assert_eq!(BigNum::from_u64(99).isqrt().to_u64(), 9);
        assert_eq!(BigNum::from_u64(100).isqrt().to_u64(), 10);
    }

    #[test]
    fn isqrt_wide_values() {
        let root = BigNum::ONE << 400_u32;
        let square = root * root;

        assert_eq!(square.isqrt(), root);
        assert_eq!((square + BigNum::ONE).isqrt(), root);
        assert_eq!((square - BigNum::ONE).isqrt(), root - BigNum::ONE);
    }
}
