// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The basic construct-append-print walk-through.

use bytestring::ByteString;

fn main() -> std::io::Result<()> {
    // Build a string from text; length and capacity both match the text.
    let mut greeting = ByteString::from_text("Hello");
    let addressee = ByteString::from_text(" World!");

    // Appending grows the allocation automatically.
    greeting.put_string(&addressee);

    println!("length {} / capacity {}", greeting.len(), greeting.capacity());

    // Writes the content followed by a newline.
    greeting.print()
}
