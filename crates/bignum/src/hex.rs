// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Write as _;
use std::str::FromStr;

use bytestring::ByteString;

use crate::error::ParseBigNumError;
use crate::num::{BigNum, WORD_COUNT};

/// Maximum number of hexadecimal digits a [`BigNum`] can absorb - 256 digits of four
/// bits each is exactly the 1024-bit width.
pub const MAX_HEX_DIGITS: usize = 256;

impl BigNum {
    /// Parses a number from hexadecimal text.
    ///
    /// Both digit cases are accepted and leading zeros are fine, up to
    /// [`MAX_HEX_DIGITS`] digits in total. There is no `0x` prefix handling and no
    /// sign; the input is digits and nothing else.
    ///
    /// # Example
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// let number = BigNum::from_hex("DeadBeef")?;
    ///
    /// assert_eq!(number.to_u64(), 0xDEAD_BEEF);
    /// # Ok::<(), bignum::ParseBigNumError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseBigNumError`] if the input is empty, longer than
    /// [`MAX_HEX_DIGITS`] digits, or contains a byte that is not a hexadecimal digit.
    pub fn from_hex(text: &str) -> Result<Self, ParseBigNumError> {
        parse_hex(text.as_bytes())
    }

    /// Parses a number from the hexadecimal text held in a [`ByteString`].
    ///
    /// The string's raw bytes are interpreted directly; the digit rules are the same
    /// as for [`from_hex()`][Self::from_hex].
    ///
    /// # Errors
    ///
    /// Returns [`ParseBigNumError`] if the content is empty, longer than
    /// [`MAX_HEX_DIGITS`] digits, or contains a byte that is not a hexadecimal digit.
    pub fn from_string(text: &ByteString) -> Result<Self, ParseBigNumError> {
        parse_hex(text.as_bytes())
    }

    /// Renders the number as lowercase hexadecimal text without leading zeros.
    ///
    /// Zero renders as `"0"`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let Some(top) = self.words.iter().rposition(|&word| word != 0) else {
            return "0".to_string();
        };

        // The top word prints without padding, every word below it keeps its zeros.
        let mut out = format!("{:x}", self.words[top]);

        for &word in self.words[..top].iter().rev() {
            write!(out, "{word:08x}").expect("writing to a String cannot fail");
        }

        out
    }

    /// Renders the number as lowercase hexadecimal text in a freshly allocated
    /// [`ByteString`].
    ///
    /// # Example
    ///
    /// ```
    /// use bignum::BigNum;
    ///
    /// assert_eq!(BigNum::from_u64(0xCAFE).to_string_buf(), b"cafe");
    /// ```
    #[must_use]
    pub fn to_string_buf(&self) -> ByteString {
        ByteString::from_text(&self.to_hex())
    }
}

impl FromStr for BigNum {
    type Err = ParseBigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

fn parse_hex(input: &[u8]) -> Result<BigNum, ParseBigNumError> {
    if input.is_empty() {
        return Err(ParseBigNumError::Empty);
    }

    if input.len() > MAX_HEX_DIGITS {
        return Err(ParseBigNumError::TooLong(input.len()));
    }

    let mut words = [0; WORD_COUNT];

    for (position, &byte) in input.iter().enumerate() {
        let digit = hex_value(byte).ok_or(ParseBigNumError::InvalidDigit {
            digit: char::from(byte),
            position,
        })?;

        // Position of this digit counting from the least significant end.
        let nibble = input.len() - 1 - position;
        words[nibble / 8] |= u32::from(digit) << (nibble % 8 * 4);
    }

    Ok(BigNum { words })
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_round_trip() {
        let number = BigNum::from_hex("deadbeef").expect("valid hex digits");

        assert_eq!(number.to_u64(), 0xDEAD_BEEF);
        assert_eq!(number.to_hex(), "deadbeef");
    }

    #[test]
    fn uppercase_digits_are_accepted() {
        let upper = BigNum::from_hex("DEADBEEF").expect("valid hex digits");
        let lower = BigNum::from_hex("deadbeef").expect("valid hex digits");

        assert_eq!(upper, lower);
        assert_eq!(upper.to_hex(), "deadbeef");
    }

    #[test]
    fn leading_zeros_are_normalized_away() {
        let number = BigNum::from_hex("000000ff").expect("valid hex digits");

        assert_eq!(number.to_hex(), "ff");
    }

    #[test]
    fn zero_renders_as_a_single_digit() {
        assert_eq!(BigNum::ZERO.to_hex(), "0");
        assert_eq!(BigNum::from_hex("0000").expect("valid hex digits"), BigNum::ZERO);
    }

    #[test]
    fn interior_zeros_keep_their_padding() {
        let number = BigNum::from_hex("10000000000000001").expect("valid hex digits");

        assert_eq!(number.to_hex(), "10000000000000001");
        assert_eq!(number, (BigNum::ONE << 64_u32) + BigNum::ONE);
    }

    #[test]
    fn the_longest_input_fills_every_bit() {
        let digits = "f".repeat(MAX_HEX_DIGITS);

        let number = BigNum::from_hex(&digits).expect("exactly at the length limit");

        assert_eq!(number + BigNum::ONE, BigNum::ZERO);
        assert_eq!(number.to_hex(), digits);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(BigNum::from_hex(""), Err(ParseBigNumError::Empty));
    }

    #[test]
    fn overlong_input_is_rejected() {
        let digits = "f".repeat(MAX_HEX_DIGITS + 1);

        assert_eq!(BigNum::from_hex(&digits), Err(ParseBigNumError::TooLong(257)));
    }

    #[test]
    fn invalid_digits_are_reported_with_their_position() {
        assert_eq!(
            BigNum::from_hex("12g4"),
            Err(ParseBigNumError::InvalidDigit {
                digit: 'g',
                position: 2
            })
        );
    }

    #[test]
    fn from_str_delegates_to_hex_parsing() {
        let number: BigNum = "cafe".parse().expect("valid hex digits");

        assert_eq!(number.to_u64(), 0xCAFE);
        assert_eq!(
            "xyz".parse::<BigNum>(),
            Err(ParseBigNumError::InvalidDigit {
                digit: 'x',
                position: 0
            })
        );
    }

    #[test]
    fn byte_string_round_trip() {
        let text = ByteString::from_text("deadbeef");

        let number = BigNum::from_string(&text).expect("valid hex digits");

        assert_eq!(number.to_u64(), 0xDEAD_BEEF);
        assert_eq!(number.to_string_buf(), b"deadbeef");
    }

    #[test]
    fn non_text_bytes_are_rejected() {
        let garbage = ByteString::copied_from_slice(&[b'a', 0xFF, b'b']);

        assert_eq!(
            BigNum::from_string(&garbage),
            Err(ParseBigNumError::InvalidDigit {
                digit: 'ÿ',
                position: 1
            })
        );
    }
}
