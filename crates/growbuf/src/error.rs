use alloc::collections::TryReserveError;
#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`ByteBuffer`](crate::ByteBuffer) and the file adapter.
///
/// Every failing operation leaves the buffer exactly as it was before the
/// call.
#[derive(Debug, Error)]
pub enum BufferError {
    /// A constructor was handed zero bytes where at least one is required.
    #[error("input is empty")]
    EmptyInput,
    /// An index was past the end of the buffer.
    #[error("index {index} out of range for buffer of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the buffer at the time of the call.
        len: usize,
    },
    /// The operation needs allocated storage and the buffer has none.
    #[error("buffer has no allocated storage")]
    Unallocated,
    /// Growing would make the length reach `usize::MAX`.
    #[error("buffer length limit reached")]
    LengthLimit,
    /// The allocator could not provide the requested capacity.
    #[error("failed to allocate {requested} bytes")]
    Alloc {
        /// Capacity in bytes that was asked for.
        requested: usize,
        /// The allocator's report.
        source: TryReserveError,
    },
    /// Opening, reading or writing a file failed.
    #[cfg(feature = "std")]
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying OS error.
        source: std::io::Error,
    },
}
