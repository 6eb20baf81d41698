//! Kernel functions re-exported for external benchmarks.
//!
//! The kernels are `pub(crate)`; this module exposes them when the `bench` feature is enabled
//! so `benches/` can measure each one in isolation.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

pub mod portable32 {
    //! One pixel per iteration.

    pub unsafe fn pixel_straight(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
        crate::transform::standard::portable32::pixel::<false>(input_ptr, output_ptr, len)
    }

    pub unsafe fn pixel_swapped(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
        crate::transform::standard::portable32::pixel::<true>(input_ptr, output_ptr, len)
    }
}

pub mod portable64 {
    //! 8 pixels per iteration via 64-bit loads and stores.

    pub unsafe fn unroll_8_straight(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
        crate::transform::standard::portable64::unroll_8::<false>(input_ptr, output_ptr, len)
    }

    pub unsafe fn unroll_8_swapped(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
        crate::transform::standard::portable64::unroll_8::<true>(input_ptr, output_ptr, len)
    }
}
