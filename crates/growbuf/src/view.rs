//! Display adapters over a buffer's bytes.

use core::fmt::{self, Write};

use bstr::{BStr, ByteSlice};

/// Bytes per line in a [`HexDump`].
const BYTES_PER_LINE: usize = 16;

/// Renders bytes as upper-case hex pairs separated by spaces, sixteen to a
/// line.
///
/// Returned by [`ByteBuffer::hex_dump`](crate::ByteBuffer::hex_dump).
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
}

impl<'a> HexDump<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.bytes.chunks(BYTES_PER_LINE).enumerate() {
            if i != 0 {
                f.write_char('\n')?;
            }
            for (j, byte) in line.iter().enumerate() {
                if j != 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{byte:02X}")?;
            }
        }
        Ok(())
    }
}

/// Renders bytes up to the first NUL as text, replacing invalid UTF-8 with
/// U+FFFD.
///
/// Returned by [`ByteBuffer::text`](crate::ByteBuffer::text).
#[derive(Debug, Clone, Copy)]
pub struct TextView<'a> {
    bytes: &'a [u8],
}

impl<'a> TextView<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        let end = bytes.find_byte(0).unwrap_or(bytes.len());
        Self {
            bytes: &bytes[..end],
        }
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.bytes), f)
    }
}
