//! Common test imports and utilities for RGB565 pack tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{packed_len, AlignmentRequirement, Rgb565PackSettings};

// Common types from rgb565_pack_common
pub use rgb565_pack_common::channel_order::ChannelOrder;
pub use rgb565_pack_common::color_565::Color565;

/// Signature shared by the raw single-threaded kernels.
pub(crate) type PackFn = unsafe fn(*const u8, *mut u8, usize);

/// Packs a single pixel record the slow, obvious way.
pub(crate) fn reference_pixel(record: &[u8], settings: Rgb565PackSettings) -> Color565 {
    let (r, g, b) = match settings.source_order {
        ChannelOrder::Rgb => (record[0], record[1], record[2]),
        ChannelOrder::Bgr => (record[2], record[1], record[0]),
    };
    Color565::from_channels(r, g, b, settings.target_order)
}

/// Packs a whole buffer the slow, obvious way.
pub(crate) fn reference_pack(input: &[u8], settings: Rgb565PackSettings) -> Vec<u8> {
    input
        .chunks_exact(3)
        .flat_map(|record| reference_pixel(record, settings).to_be_bytes())
        .collect()
}

/// Helper to assert implementation results match reference implementation
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[u8],
    output_test: &[u8],
    impl_name: &str,
    num_pixels: usize,
) {
    assert_eq!(
        output_expected, output_test,
        "{impl_name} implementation produced different results than reference for {num_pixels} pixels.\n\
        Input pixel channels are sequential: pixel n holds 3n, 3n+1, 3n+2 (mod 256) XORed with 0xA5."
    );
}

/// Helper to generate test data of specified size (in pixels)
///
/// Every byte differs from its neighbours, so a kernel that reads the wrong
/// offset, or swaps the wrong channels, produces a visible mismatch.
pub(crate) fn generate_pixel_test_data(num_pixels: usize) -> Vec<u8> {
    (0..num_pixels * 3).map(|x| (x as u8) ^ 0xA5).collect()
}

/// Runs a raw kernel over every size from 0 to `max_pixels` and compares it with
/// [`reference_pack`].
///
/// `swap_outer` says which pair of settings the kernel is expected to implement;
/// both orders that produce that layout are checked.
pub(crate) fn run_kernel_against_reference(
    pack_fn: PackFn,
    swap_outer: bool,
    max_pixels: usize,
    impl_name: &str,
) {
    let settings_to_check = if swap_outer {
        [
            Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Bgr),
            Rgb565PackSettings::new(ChannelOrder::Bgr, ChannelOrder::Rgb),
        ]
    } else {
        [
            Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Rgb),
            Rgb565PackSettings::new(ChannelOrder::Bgr, ChannelOrder::Bgr),
        ]
    };

    for num_pixels in 0..=max_pixels {
        let input = generate_pixel_test_data(num_pixels);
        // Guard byte past the end catches overruns.
        let mut output = vec![0xCCu8; packed_len(input.len()) + 1];

        unsafe { pack_fn(input.as_ptr(), output.as_mut_ptr(), input.len()) };
        assert_eq!(
            output[packed_len(input.len())],
            0xCC,
            "{impl_name} wrote past the end of the output for {num_pixels} pixels"
        );

        for settings in settings_to_check {
            let expected = reference_pack(&input, settings);
            assert_implementation_matches_reference(
                &expected,
                &output[..packed_len(input.len())],
                impl_name,
                num_pixels,
            );
        }
    }
}

#[test]
fn validate_pixel_test_data_generator() {
    let expected: Vec<u8> = vec![
        0xA5, 0xA4, 0xA7, // pixel 1
        0xA6, 0xA1, 0xA0, // pixel 2
    ];
    assert_eq!(generate_pixel_test_data(2), expected);
}

#[test]
fn reference_pack_matches_documented_scenarios() {
    let input = [0xFF, 0x00, 0x80];
    assert_eq!(
        reference_pack(&input, Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Rgb)),
        [0xF8, 0x10]
    );
    assert_eq!(
        reference_pack(&input, Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Bgr)),
        [0x80, 0x1F]
    );
}
