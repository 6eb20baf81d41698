//! Memory allocation utilities for RGB565 packing operations.
//!
//! Output buffers are allocated uninitialized and aligned to 64 bytes (a cache line on
//! x86_64 and most aarch64 parts). The packing kernels overwrite every byte they hand back,
//! so zeroing the buffer first would only cost time.
//!
//! ## Useful APIs
//!
//! [`allocate_align_64`]: Allocates uninitialized memory aligned to 64-bytes.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::allocator_api::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
///
/// # Examples
///
/// ```
/// use rgb565_pack_common::allocate::allocate_align_64;
///
/// let allocation = allocate_align_64(1024)?;
/// assert_eq!(allocation.as_ptr() as usize % 64, 0);
/// # Ok::<(), rgb565_pack_common::allocate::AllocateError>(())
/// ```
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` in `allocate_align_64` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(48)]
    #[case(4096)]
    fn allocations_are_64_byte_aligned(#[case] num_bytes: usize) {
        let allocation = allocate_align_64(num_bytes).unwrap();
        assert_eq!(allocation.as_ptr() as usize % 64, 0);
        assert_eq!(allocation.as_slice().len(), num_bytes);
    }

    #[test]
    fn oversized_allocation_is_a_layout_error() {
        let result = allocate_align_64(usize::MAX);
        assert!(matches!(result, Err(AllocateError::LayoutError(_))));
    }
}
