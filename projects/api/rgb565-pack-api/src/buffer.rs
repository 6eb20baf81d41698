//! Owned output of the allocating pack functions.

use core::ops::Deref;
use rgb565_pack_common::allocate::{AllocateError, allocate_align_64};
use safe_allocator_api::RawAlloc;

/// Packed RGB565/BGR565 samples in a 64-byte aligned, non-zeroed allocation.
///
/// An empty buffer owns no allocation.
pub struct PackedBuffer {
    alloc: Option<RawAlloc>,
    len: usize,
}

impl PackedBuffer {
    /// Allocates a buffer of `len` uninitialized bytes.
    ///
    /// The caller must fill every byte before it is read back through [`PackedBuffer::as_slice`].
    pub(crate) fn allocate(len: usize) -> Result<Self, AllocateError> {
        let alloc = match len {
            0 => None,
            _ => Some(allocate_align_64(len)?),
        };
        Ok(Self { alloc, len })
    }

    /// Returns the packed bytes.
    pub fn as_slice(&self) -> &[u8] {
        match &self.alloc {
            Some(alloc) => &alloc.as_slice()[..self.len],
            None => &[],
        }
    }

    /// Returns the packed bytes, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.alloc {
            Some(alloc) => &mut alloc.as_mut_slice()[..self.len],
            None => &mut [],
        }
    }

    /// Number of packed bytes (2 per pixel).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for PackedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for PackedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::fmt::Debug for PackedBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedBuffer").field("len", &self.len).finish()
    }
}
