//! Common test imports and utilities for RGB565 pack API tests

pub use alloc::vec::Vec;
pub use rstest::rstest;

pub use crate::error::Rgb565Error;
pub use rgb565_pack::{AlignmentRequirement, ChannelOrder, Rgb565PackSettings};
pub use rgb565_pack_common::color_565::Color565;

/// Packs a whole buffer the slow, obvious way.
pub(crate) fn reference_pack(input: &[u8], settings: Rgb565PackSettings) -> Vec<u8> {
    input
        .chunks_exact(3)
        .flat_map(|record| {
            let (r, g, b) = match settings.source_order {
                ChannelOrder::Rgb => (record[0], record[1], record[2]),
                ChannelOrder::Bgr => (record[2], record[1], record[0]),
            };
            Color565::from_channels(r, g, b, settings.target_order).to_be_bytes()
        })
        .collect()
}

/// Helper to generate test data of specified size (in pixels)
pub(crate) fn generate_pixel_test_data(num_pixels: usize) -> Vec<u8> {
    (0..num_pixels * 3).map(|x| (x as u8) ^ 0xA5).collect()
}
