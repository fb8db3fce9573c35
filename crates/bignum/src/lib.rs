// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Fixed-width 1024-bit unsigned integers.
//!
//! A [`BigNum`] is a `Copy` value holding exactly 1024 bits - no heap allocation, ever.
//! Arithmetic wraps at the width boundary, the same way the machine integer types wrap
//! in release builds, because the representation simply has nowhere to put a carry out
//! of the top word.
//!
//! ```
//! use bignum::BigNum;
//!
//! let a = BigNum::from_u64(0xDEAD_0000);
//! let b = BigNum::from_u64(0x0000_BEEF);
//!
//! assert_eq!((a + b).to_u64(), 0xDEAD_BEEF);
//! ```
//!
//! # Hexadecimal interchange
//!
//! Numbers travel as hexadecimal text, at most 256 digits (the full 1024 bits). The
//! [`from_string()`] and [`to_string_buf()`] functions convert directly to and from
//! [`ByteString`][bytestring::ByteString], which is how the rest of the toolkit passes
//! byte data around:
//!
//! ```
//! use bignum::BigNum;
//! use bytestring::ByteString;
//!
//! let text = ByteString::from_text("deadbeef");
//! let number = BigNum::from_string(&text)?;
//!
//! assert_eq!(number.to_u64(), 0xDEAD_BEEF);
//! assert_eq!(number.to_string_buf(), b"deadbeef");
//! # Ok::<(), bignum::ParseBigNumError>(())
//! ```
//!
//! [`from_string()`]: BigNum::from_string
//! [`to_string_buf()`]: BigNum::to_string_buf

mod arith;
mod bits;
mod error;
mod hex;
mod num;

pub use error::ParseBigNumError;
pub use hex::MAX_HEX_DIGITS;
pub use num::BigNum;
