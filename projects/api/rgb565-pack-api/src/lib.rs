#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! Safe, high-level API for RGB565 packing.
//!
//! This crate wraps the low-level packer in `rgb565-pack` with validation, error handling,
//! and allocating variants.
//!
//! Note: Using `vec` for output buffers zeroes them first, leaving performance on the table.
//! The allocating functions return a [`PackedBuffer`], which is not zeroed.

extern crate alloc;

// Module declarations
pub mod buffer;
pub mod builder;
pub mod convert;
pub mod error;

#[cfg(feature = "c-exports")]
pub mod c_api;

// Re-export main functionality at crate root
pub use buffer::PackedBuffer;
pub use builder::Rgb565PackBuilder;
pub use convert::{
    convert, convert_colorspace, convert_colorspace_tagged, convert_tagged, pack_rgb565_slice,
};
pub use error::Rgb565Error;
pub use rgb565_pack::{AlignmentRequirement, ChannelOrder, Rgb565PackSettings, packed_len};

#[cfg(test)]
pub(crate) mod test_prelude;
