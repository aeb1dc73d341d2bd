//! A growable, heap-owned byte buffer with an explicit capacity policy.
//!
//! [`ByteBuffer`] stores its bytes in one contiguous allocation whose size is
//! always a power of two. Capacity doubles when a write needs one more slot
//! and halves when a removal brings the length down to half the capacity. An
//! empty buffer never holds storage.
//!
//! ```rust
//! use growbuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::new();
//! buf.push_back(0x41)?;
//! buf.push_back(0x42)?;
//! buf.push_front(0x40)?;
//! assert_eq!(buf.as_bytes(), b"@AB");
//! assert_eq!(buf.capacity(), 4);
//!
//! assert_eq!(buf.pop_back(), Some(0x42));
//! assert_eq!(buf.capacity(), 2);
//! # Ok::<(), growbuf::BufferError>(())
//! ```
//!
//! Whole-file load and store live behind the default `std` feature; the buffer
//! itself only needs `alloc`.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod bits;
mod buffer;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod options;
mod view;

#[cfg(test)]
mod tests;

pub use bits::BitScan;
pub use buffer::ByteBuffer;
pub use error::BufferError;
pub use options::{FileMode, WriteOptions};
pub use view::{HexDump, TextView};
