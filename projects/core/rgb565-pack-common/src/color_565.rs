//! # RGB565 Color Format Support
//!
//! This module provides [`Color565`], a 16-bit colour packed from three 8-bit channels.
//!
//! ## Overview
//!
//! RGB565 packs red, green, and blue components into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! The BGR565 layout used by some display controllers keeps the same field widths, but swaps
//! red and blue: blue sits in bits 15-11 and red in bits 4-0.
//!
//! ## Quantization
//!
//! Channels are truncated, not rounded: each channel is masked down to its top bits
//! (`r & 0xF8`, `g & 0xFC`, `b & 0xF8`) and shifted into place. `0xFF` saturates to the
//! maximum field value and anything below `0x08` (or `0x04` for green) becomes 0.
//!
//! ## Byte Order
//!
//! The value is computed in native integer order. SPI display controllers (ST7789 and friends)
//! expect the most significant byte first on the wire, so [`Color565::to_be_bytes`] is the
//! representation written to output buffers.
//!
//! ## Examples
//!
//! ```rust
//! use rgb565_pack_common::color_565::Color565;
//!
//! let color = Color565::from_rgb(0xFF, 0x00, 0x80);
//! assert_eq!(color.raw_value(), 0xF810);
//! assert_eq!(color.to_be_bytes(), [0xF8, 0x10]);
//!
//! let swapped = Color565::from_bgr(0xFF, 0x00, 0x80);
//! assert_eq!(swapped.raw_value(), 0x801F);
//! ```
//!
//! ## Additional Reading
//!
//! - [etcpak - Fast ETC1/ETC2/EAC encoder](https://github.com/wolfpld/etcpak) -
//!   Source of the single-expression RGB565 packing used in this module

use crate::channel_order::ChannelOrder;

/// Represents a 16-bit colour with 5 bits for each outer channel and 6 bits for green.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color565 {
    /// The underlying 16-bit value, in native byte order
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] in the RGB565 layout from separate RGB components
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        // Implementation matches etcpak's to565 function.
        // Calculating the whole value in one expression gives the compiler an easier time.
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | ((b as u16 & 0xF8) >> 3),
        }
    }

    /// Creates a new [`Color565`] in the BGR565 layout from separate RGB components
    ///
    /// Blue is placed in bits 15-11 and red in bits 4-0.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline(always)]
    pub fn from_bgr(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(b, g, r)
    }

    /// Creates a new [`Color565`] from separate RGB components using the given output layout
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    /// - `layout`: Which channel goes in the top field
    #[inline]
    pub fn from_channels(r: u8, g: u8, b: u8, layout: ChannelOrder) -> Self {
        match layout {
            ChannelOrder::Rgb => Self::from_rgb(r, g, b),
            ChannelOrder::Bgr => Self::from_bgr(r, g, b),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the value as bytes in big-endian order, most significant byte first
    #[inline(always)]
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.value.to_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0xFF, 0x00, 0x80, 0xF810)]
    #[case(0xFF, 0xFF, 0xFF, 0xFFFF)]
    #[case(0x00, 0x00, 0x00, 0x0000)]
    #[case(0xFF, 0x00, 0x00, 0xF800)] // red
    #[case(0x00, 0xFF, 0x00, 0x07E0)] // green
    #[case(0x00, 0x00, 0xFF, 0x001F)] // blue
    #[case(0x07, 0x03, 0x07, 0x0000)] // below first step, truncated away
    #[case(0x08, 0x04, 0x08, 0x0821)] // first step of every channel
    fn from_rgb_packs_truncated_channels(
        #[case] r: u8,
        #[case] g: u8,
        #[case] b: u8,
        #[case] expected: u16,
    ) {
        assert_eq!(Color565::from_rgb(r, g, b).raw_value(), expected);
    }

    #[rstest]
    #[case(0xFF, 0x00, 0x80, 0x801F)]
    #[case(0xFF, 0x00, 0x00, 0x001F)]
    #[case(0x00, 0x00, 0xFF, 0xF800)]
    #[case(0xFF, 0xFF, 0xFF, 0xFFFF)]
    fn from_bgr_swaps_outer_fields(
        #[case] r: u8,
        #[case] g: u8,
        #[case] b: u8,
        #[case] expected: u16,
    ) {
        assert_eq!(Color565::from_bgr(r, g, b).raw_value(), expected);
    }

    #[test]
    fn from_channels_matches_layout_specific_constructors() {
        for r in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(15) {
                let g = r ^ b;
                assert_eq!(
                    Color565::from_channels(r, g, b, ChannelOrder::Rgb),
                    Color565::from_rgb(r, g, b)
                );
                assert_eq!(
                    Color565::from_channels(r, g, b, ChannelOrder::Bgr),
                    Color565::from_bgr(r, g, b)
                );
            }
        }
    }

    #[test]
    fn to_be_bytes_emits_most_significant_byte_first() {
        assert_eq!(Color565::from_raw(0xF810).to_be_bytes(), [0xF8, 0x10]);
        assert_eq!(Color565::from_raw(0x801F).to_be_bytes(), [0x80, 0x1F]);
    }

    #[test]
    fn every_channel_value_keeps_only_its_top_bits() {
        for value in 0..=255u8 {
            let packed = Color565::from_rgb(value, value, value).raw_value();
            assert_eq!(packed >> 11, (value >> 3) as u16);
            assert_eq!((packed >> 5) & 0x3F, (value >> 2) as u16);
            assert_eq!(packed & 0x1F, (value >> 3) as u16);
        }
    }
}
