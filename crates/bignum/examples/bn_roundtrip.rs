// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Parses hexadecimal text out of a `ByteString`, does a little arithmetic and
//! renders the result back into one.

use bignum::BigNum;
use bytestring::ByteString;

fn main() -> std::io::Result<()> {
    let text = ByteString::from_text("deadbeef");

    let number = BigNum::from_string(&text).expect("the input above is valid hex");
    let squared = number * number;
    let (quotient, remainder) = squared.divmod(&BigNum::from_u64(1000));

    println!("n       = {number}");
    println!("n^2     = {squared}");
    println!("n^2/1e3 = {quotient} rem {remainder}");

    // And back out through the byte-string type.
    squared.to_string_buf().print()
}
