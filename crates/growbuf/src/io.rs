//! Whole-file read and write primitives.
//!
//! These are the only functions that touch file handles. Each call opens,
//! uses and drops its handle within the call, on success and on error alike.
//! There is no streaming and no partial-write recovery.

use std::{
    borrow::Cow,
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
    vec::Vec,
};

use tracing::debug;

use crate::{BufferError, FileMode, WriteOptions};

/// Line-ending convention applied in [`FileMode::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    /// `\n` on disk; text mode is the identity.
    Lf,
    /// `\r\n` on disk, `\n` in memory.
    CrLf,
}

impl Newline {
    /// The convention of the platform this crate was built for.
    pub const NATIVE: Newline = if cfg!(windows) {
        Newline::CrLf
    } else {
        Newline::Lf
    };

    /// Converts on-disk line endings to `\n`.
    #[must_use]
    pub fn decode(self, bytes: Vec<u8>) -> Vec<u8> {
        match self {
            Newline::Lf => bytes,
            Newline::CrLf => {
                let mut out = Vec::with_capacity(bytes.len());
                let mut iter = bytes.iter().copied().peekable();
                while let Some(byte) = iter.next() {
                    if byte == b'\r' && iter.peek() == Some(&b'\n') {
                        continue;
                    }
                    out.push(byte);
                }
                out
            }
        }
    }

    /// Converts every `\n` to the on-disk line ending.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> Cow<'_, [u8]> {
        match self {
            Newline::Lf => Cow::Borrowed(bytes),
            Newline::CrLf => {
                let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
                if newlines == 0 {
                    return Cow::Borrowed(bytes);
                }
                let mut out = Vec::with_capacity(bytes.len() + newlines);
                for &byte in bytes {
                    if byte == b'\n' {
                        out.push(b'\r');
                    }
                    out.push(byte);
                }
                Cow::Owned(out)
            }
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BufferError + '_ {
    move |source| BufferError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads every byte of the file at `path`.
///
/// # Errors
///
/// [`BufferError::Io`] if the file cannot be opened or read.
pub fn read_all(path: &Path, mode: FileMode) -> Result<Vec<u8>, BufferError> {
    let bytes = fs::read(path).map_err(io_error(path))?;
    let bytes = match mode {
        FileMode::Binary => bytes,
        FileMode::Text => Newline::NATIVE.decode(bytes),
    };
    debug!(path = %path.display(), ?mode, len = bytes.len(), "read file");
    Ok(bytes)
}

/// Writes `bytes` to the file at `path`, creating it if needed.
///
/// # Errors
///
/// [`BufferError::Io`] if the file cannot be opened or written.
pub fn write_all(path: &Path, bytes: &[u8], options: WriteOptions) -> Result<(), BufferError> {
    let bytes = match options.mode {
        FileMode::Binary => Cow::Borrowed(bytes),
        FileMode::Text => Newline::NATIVE.encode(bytes),
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(options.append)
        .truncate(!options.append)
        .open(path)
        .map_err(io_error(path))?;
    file.write_all(&bytes).map_err(io_error(path))?;
    debug!(
        path = %path.display(),
        mode = ?options.mode,
        append = options.append,
        len = bytes.len(),
        "wrote file"
    );
    Ok(())
}
