// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

use crate::hex::MAX_HEX_DIGITS;

/// The reason a piece of text could not be parsed as a [`BigNum`][crate::BigNum].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseBigNumError {
    /// The input contained no digits at all.
    #[error("cannot parse an empty string as a number")]
    Empty,

    /// The input had more digits than the type has room for.
    #[error("the input is {0} hexadecimal digits long, the maximum is {MAX_HEX_DIGITS}")]
    TooLong(usize),

    /// A byte in the input was not a hexadecimal digit.
    #[error("invalid hexadecimal digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending byte, rendered as a character.
        digit: char,

        /// Zero-based offset of the offending byte within the input.
        position: usize,
    },
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(ParseBigNumError: Send, Sync);

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(ParseBigNumError::Empty.to_string(), "cannot parse an empty string as a number");

        assert_eq!(
            ParseBigNumError::TooLong(300).to_string(),
            "the input is 300 hexadecimal digits long, the maximum is 256"
        );

        assert_eq!(
            ParseBigNumError::InvalidDigit {
                digit: 'g',
                position: 3
            }
            .to_string(),
            "invalid hexadecimal digit 'g' at position 3"
        );
    }
}
