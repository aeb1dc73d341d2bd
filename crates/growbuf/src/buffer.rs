//! The growable byte buffer and its capacity policy.
//!
//! Storage is a `Vec<u8>` whose *length* is the buffer's capacity: the bytes
//! past `len` are allocated but logically absent. `Vec::capacity` is never
//! consulted.
//!
//! Policy
//! - Growth: a write that needs one more slot than the capacity doubles it
//!   first. From empty the capacity starts at 1. Bulk constructors pick the
//!   smallest power of two that holds the initial length.
//! - Shrink: a removal that brings `len` to exactly half the capacity halves
//!   it. Reaching `len == 0` releases storage entirely.
//! - All reallocation happens before the mutation is committed, so a failed
//!   allocation leaves `len`, capacity and contents untouched.
//!
//! Together these keep `cap / 2 < len <= cap` for every non-empty buffer.

use alloc::{ffi::CString, vec::Vec};
use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
};
#[cfg(feature = "std")]
use std::path::Path;

use bstr::{BStr, ByteSlice};
use tracing::trace;

#[cfg(feature = "std")]
use crate::{FileMode, WriteOptions};
use crate::{BufferError, HexDump, TextView};

/// Largest length a buffer may hold; `usize::MAX` itself is never reached.
const MAX_LEN: usize = usize::MAX - 1;

/// An owned, contiguous, growable array of bytes.
///
/// See the [crate docs](crate) for the growth policy.
#[derive(Clone, Default)]
pub struct ByteBuffer {
    storage: Vec<u8>,
    len: usize,
}

fn capacity_for(len: usize) -> Result<usize, BufferError> {
    if len > MAX_LEN {
        return Err(BufferError::LengthLimit);
    }
    len.checked_next_power_of_two().ok_or(BufferError::LengthLimit)
}

/// Grow `storage` (whose length is the current capacity) to `cap` zeroed
/// slots, reporting allocator failure instead of aborting.
fn reserve_to(storage: &mut Vec<u8>, cap: usize) -> Result<(), BufferError> {
    storage
        .try_reserve_exact(cap - storage.len())
        .map_err(|source| BufferError::Alloc {
            requested: cap,
            source,
        })?;
    storage.resize(cap, 0);
    Ok(())
}

impl ByteBuffer {
    /// Creates an empty buffer without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            len: 0,
        }
    }

    /// Creates a buffer of `len` bytes, each set to `value`.
    ///
    /// A zero `len` yields an empty buffer with no storage.
    ///
    /// # Errors
    ///
    /// [`BufferError::Alloc`] when the allocator refuses the capacity, or
    /// [`BufferError::LengthLimit`] for a `len` of `usize::MAX`.
    pub fn filled(len: usize, value: u8) -> Result<Self, BufferError> {
        if len == 0 {
            return Ok(Self::new());
        }
        let mut storage = Vec::new();
        reserve_to(&mut storage, capacity_for(len)?)?;
        storage[..len].fill(value);
        Ok(Self { storage, len })
    }

    /// Creates a buffer holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// [`BufferError::EmptyInput`] if `bytes` is empty, or
    /// [`BufferError::Alloc`] when the allocation fails.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, BufferError> {
        if bytes.is_empty() {
            return Err(BufferError::EmptyInput);
        }
        let mut storage = Vec::new();
        reserve_to(&mut storage, capacity_for(bytes.len())?)?;
        storage[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            storage,
            len: bytes.len(),
        })
    }

    /// Creates a buffer from the bytes of a NUL-terminated string, excluding
    /// the terminator.
    ///
    /// # Errors
    ///
    /// [`BufferError::EmptyInput`] if the string is empty, or
    /// [`BufferError::Alloc`] when the allocation fails.
    pub fn from_text(text: &CStr) -> Result<Self, BufferError> {
        Self::from_slice(text.to_bytes())
    }

    /// Takes ownership of `bytes`, padding the allocation to a power of two.
    fn from_vec(mut bytes: Vec<u8>) -> Result<Self, BufferError> {
        let len = bytes.len();
        if len == 0 {
            return Err(BufferError::EmptyInput);
        }
        let cap = capacity_for(len)?;
        // `Vec::capacity` may already exceed `cap`; only the length matters.
        reserve_to(&mut bytes, cap)?;
        bytes.shrink_to_fit();
        Ok(Self {
            storage: bytes,
            len,
        })
    }

    /// Reads the whole file at `path` into a new buffer.
    ///
    /// An empty file yields an empty buffer with no storage.
    ///
    /// # Errors
    ///
    /// [`BufferError::Io`] if the file cannot be opened or read, or
    /// [`BufferError::Alloc`] when the allocation fails.
    #[cfg(feature = "std")]
    pub fn from_file(path: impl AsRef<Path>, mode: FileMode) -> Result<Self, BufferError> {
        let bytes = crate::io::read_all(path.as_ref(), mode)?;
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        Self::from_vec(bytes)
    }

    /// Number of valid bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in bytes: zero or a power of two.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Whether the buffer currently owns storage. Always `!is_empty()`.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        !self.storage.is_empty()
    }

    /// The valid bytes.
    ///
    /// The slice borrows the buffer, so no mutation can invalidate it while
    /// it is alive.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// The valid bytes, mutably. The length cannot be changed through it.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.storage[..self.len]
    }

    /// Iterates over the valid bytes.
    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.as_bytes().iter()
    }

    /// Returns a new, independently owned copy of the bytes.
    ///
    /// # Errors
    ///
    /// [`BufferError::Unallocated`] if the buffer has no storage.
    pub fn to_owned_bytes(&self) -> Result<Vec<u8>, BufferError> {
        if !self.is_allocated() {
            return Err(BufferError::Unallocated);
        }
        Ok(self.as_bytes().to_vec())
    }

    /// Returns a NUL-terminated copy of the bytes up to the first zero byte,
    /// or of all bytes when there is none.
    ///
    /// # Errors
    ///
    /// [`BufferError::Unallocated`] if the buffer has no storage.
    pub fn to_text(&self) -> Result<CString, BufferError> {
        if !self.is_allocated() {
            return Err(BufferError::Unallocated);
        }
        let bytes = self.as_bytes();
        let end = bytes.find_byte(0).unwrap_or(bytes.len());
        let mut text = Vec::with_capacity(end + 1);
        text.extend_from_slice(&bytes[..end]);
        text.push(0);
        // SAFETY: `text[..end]` stops before the first NUL and a single NUL
        // was appended.
        Ok(unsafe { CString::from_vec_with_nul_unchecked(text) })
    }

    /// Writes every byte to `path`, truncating the file or appending to it.
    ///
    /// # Errors
    ///
    /// [`BufferError::Unallocated`] if the buffer has no storage, or
    /// [`BufferError::Io`] if the file cannot be opened or written.
    #[cfg(feature = "std")]
    pub fn to_file(
        &self,
        path: impl AsRef<Path>,
        append: bool,
        mode: FileMode,
    ) -> Result<(), BufferError> {
        if !self.is_allocated() {
            return Err(BufferError::Unallocated);
        }
        crate::io::write_all(path.as_ref(), self.as_bytes(), WriteOptions { append, mode })
    }

    /// Makes room for one more byte, doubling the capacity when full.
    fn grow_for_one(&mut self) -> Result<(), BufferError> {
        if self.len >= MAX_LEN {
            return Err(BufferError::LengthLimit);
        }
        let cap = self.capacity();
        if self.len < cap {
            return Ok(());
        }
        let new_cap = if cap == 0 {
            1
        } else {
            cap.checked_mul(2).ok_or(BufferError::LengthLimit)?
        };
        reserve_to(&mut self.storage, new_cap)?;
        trace!(from = cap, to = new_cap, "grew buffer");
        Ok(())
    }

    /// Applies the shrink half of the policy after `len` has been reduced.
    fn shrink_after_removal(&mut self) {
        let cap = self.capacity();
        if self.len == 0 {
            self.storage = Vec::new();
            trace!(from = cap, "released buffer storage");
        } else if self.len == cap / 2 {
            self.storage.truncate(self.len);
            self.storage.shrink_to_fit();
            trace!(from = cap, to = self.len, "shrank buffer");
        }
    }

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// [`BufferError::LengthLimit`] or [`BufferError::Alloc`]; the buffer is
    /// unchanged on failure.
    pub fn push_back(&mut self, value: u8) -> Result<(), BufferError> {
        self.grow_for_one()?;
        self.storage[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last byte, or `None` when empty.
    pub fn pop_back(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let value = self.storage[self.len];
        self.shrink_after_removal();
        Some(value)
    }

    /// Inserts `value` at the front, shifting every byte right by one.
    ///
    /// # Errors
    ///
    /// [`BufferError::LengthLimit`] or [`BufferError::Alloc`]; the buffer is
    /// unchanged on failure.
    pub fn push_front(&mut self, value: u8) -> Result<(), BufferError> {
        self.insert(0, value)
    }

    /// Removes and returns the first byte, or `None` when empty.
    pub fn pop_front(&mut self) -> Option<u8> {
        self.remove(0)
    }

    /// Inserts `value` at `index`, shifting the bytes at and after it right by
    /// one.
    ///
    /// # Errors
    ///
    /// [`BufferError::IndexOutOfRange`] if `index > len`, otherwise
    /// [`BufferError::LengthLimit`] or [`BufferError::Alloc`]. The buffer is
    /// unchanged on failure.
    pub fn insert(&mut self, index: usize, value: u8) -> Result<(), BufferError> {
        if index > self.len {
            return Err(BufferError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.grow_for_one()?;
        self.storage.copy_within(index..self.len, index + 1);
        self.storage[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the byte at `index`, shifting the bytes after it
    /// left by one. Returns `None` if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        let value = self.storage[index];
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.shrink_after_removal();
        Some(value)
    }

    /// Byte at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// Overwrites the byte at `index`.
    ///
    /// # Errors
    ///
    /// [`BufferError::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), BufferError> {
        let len = self.len;
        let slot = self
            .as_mut_bytes()
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// First byte.
    #[must_use]
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Last byte.
    #[must_use]
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Overwrites the first byte.
    ///
    /// # Errors
    ///
    /// [`BufferError::IndexOutOfRange`] if the buffer is empty.
    pub fn set_front(&mut self, value: u8) -> Result<(), BufferError> {
        self.set(0, value)
    }

    /// Overwrites the last byte.
    ///
    /// # Errors
    ///
    /// [`BufferError::IndexOutOfRange`] if the buffer is empty.
    pub fn set_back(&mut self, value: u8) -> Result<(), BufferError> {
        match self.len.checked_sub(1) {
            Some(last) => self.set(last, value),
            None => Err(BufferError::IndexOutOfRange { index: 0, len: 0 }),
        }
    }

    /// Drops every byte and releases storage.
    pub fn clear(&mut self) {
        self.storage = Vec::new();
        self.len = 0;
    }

    /// Replaces the contents with a deep copy of `src`, taking on its
    /// capacity as well as its length.
    ///
    /// # Errors
    ///
    /// [`BufferError::Unallocated`] if `src` has no storage, or
    /// [`BufferError::Alloc`]; `self` is unchanged on failure.
    pub fn copy_from(&mut self, src: &ByteBuffer) -> Result<(), BufferError> {
        if !src.is_allocated() {
            return Err(BufferError::Unallocated);
        }
        let cap = src.capacity();
        if self.capacity() != cap {
            let mut storage = Vec::new();
            reserve_to(&mut storage, cap)?;
            trace!(from = self.capacity(), to = cap, "reallocated for copy");
            self.storage = storage;
        }
        self.storage[..src.len].copy_from_slice(src.as_bytes());
        self.len = src.len;
        Ok(())
    }

    /// Appends every byte of `src`, one `push_back` at a time.
    ///
    /// # Errors
    ///
    /// The first error from [`push_back`](Self::push_back). Bytes appended
    /// before the failure stay appended.
    pub fn concat(&mut self, src: &ByteBuffer) -> Result<(), BufferError> {
        for &byte in src.as_bytes() {
            self.push_back(byte)?;
        }
        Ok(())
    }

    /// Three-way lexicographic comparison of the contents.
    ///
    /// Bytes are compared up to the shorter length; when one buffer is a
    /// prefix of the other the shorter one sorts first.
    ///
    /// # Errors
    ///
    /// [`BufferError::Unallocated`] if either buffer has no storage. Use the
    /// [`Ord`] impl for a total order that places empty buffers first.
    pub fn compare(&self, other: &ByteBuffer) -> Result<Ordering, BufferError> {
        if !self.is_allocated() || !other.is_allocated() {
            return Err(BufferError::Unallocated);
        }
        Ok(self.as_bytes().cmp(other.as_bytes()))
    }

    /// Index of the first byte equal to `value`.
    #[must_use]
    pub fn first_of(&self, value: u8) -> Option<usize> {
        self.as_bytes().find_byte(value)
    }

    /// Index of the last byte equal to `value`.
    #[must_use]
    pub fn last_of(&self, value: u8) -> Option<usize> {
        self.as_bytes().rfind_byte(value)
    }

    /// Hexadecimal rendering of the bytes, sixteen per line.
    #[must_use]
    pub fn hex_dump(&self) -> HexDump<'_> {
        HexDump::new(self.as_bytes())
    }

    /// Lossy text rendering of the bytes up to the first NUL.
    #[must_use]
    pub fn text(&self) -> TextView<'_> {
        TextView::new(self.as_bytes())
    }

    /// Panics if any capacity invariant is violated.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let cap = self.capacity();
        assert!(self.len <= cap, "len {} exceeds cap {cap}", self.len);
        assert!(self.len < usize::MAX);
        if self.len == 0 {
            assert_eq!(cap, 0, "empty buffer still holds storage");
        } else {
            assert!(cap.is_power_of_two(), "cap {cap} is not a power of two");
            assert!(self.len > cap / 2, "len {} at or below half of cap {cap}", self.len);
        }
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .field("data", &BStr::new(self.as_bytes()))
            .finish()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteBuffer {}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteBuffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialOrd for ByteBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<&[u8]> for ByteBuffer {
    type Error = BufferError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<Vec<u8>> for ByteBuffer {
    type Error = BufferError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_vec(bytes)
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buf: ByteBuffer) -> Self {
        let mut bytes = buf.storage;
        bytes.truncate(buf.len);
        bytes
    }
}
