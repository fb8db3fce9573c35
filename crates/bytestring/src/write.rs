// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::{self, Write};

use crate::ByteString;

impl ByteString {
    /// Writes the live content to a stream, verbatim.
    ///
    /// Exactly [`len()`][Self::len] bytes are written. Embedded `0x00` bytes are written
    /// like any other byte - they are data, not terminators.
    ///
    /// # Example
    ///
    /// ```
    /// use bytestring::ByteString;
    ///
    /// let s = ByteString::copied_from_slice(b"with\x00nul");
    ///
    /// let mut sink = Vec::new();
    /// s.write_to(&mut sink)?;
    ///
    /// assert_eq!(sink, b"with\x00nul");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Forwards any error reported by the stream.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_bytes())
    }

    /// Writes the live content to standard output, followed by one newline byte.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bytestring::ByteString;
    ///
    /// let s = ByteString::from_text("Hello World!");
    /// s.print()?; // prints "Hello World!\n"
    /// # Ok::<(), std::io::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Forwards any error reported by standard output.
    #[cfg_attr(test, mutants::skip)] // Writes to the real stdout, impractical to assert on.
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();

        self.write_to(&mut stdout)?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }
}
