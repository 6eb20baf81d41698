//! RGB565 Pack Operations
//!
//! This module converts packed 24-bit pixels (RGB888 or BGR888) into packed 16-bit
//! samples (RGB565 or BGR565), each written big-endian.
//!
//! ## Overview
//!
//! For every 3-byte input record:
//!
//! 1. Resolve `(r, g, b)` from the record according to the source [`ChannelOrder`].
//! 2. Truncate to 5/6/5 bits by masking (`0xF8`, `0xFC`, `0xF8`).
//! 3. Place the channels according to the target [`ChannelOrder`].
//! 4. Write the 16-bit result most significant byte first.
//!
//! Pixels are independent of each other, so the work is split freely between
//! unrolled kernels and, with the `multithreaded` feature, threads.
//!
//! ## Functions
//!
//! - [`pack_rgb565`]: raw pointer entry point, single threaded
//! - [`pack_rgb565_with_settings`]: validated slice wrapper, single threaded
//! - `pack_rgb565_parallel`: validated slice wrapper, split across the rayon pool
//!
//! [`ChannelOrder`]: rgb565_pack_common::channel_order::ChannelOrder

// Module structure
pub(crate) mod operations;
pub(crate) mod settings;

// Kernel implementations
pub(crate) mod standard;

#[cfg(feature = "multithreaded")]
pub(crate) mod parallel;

// Re-export all public items from submodules
pub use operations::*;
pub use settings::*;

#[cfg(feature = "multithreaded")]
pub use parallel::*;
