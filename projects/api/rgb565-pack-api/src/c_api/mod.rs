//! # C API (FFI) Documentation
//!
//! *Note: The C API is only available when the `c-exports` feature is enabled.*
//!
//! The `c-exports` feature enables C-compatible FFI exports for using this library from C, C++,
//! or any runtime that can call into a C ABI (for example a NIF or a Python `ctypes` binding).
//!
//! ## Example Usage
//!
//! ```c
//! #include <stdio.h>
//! #include <stdint.h>
//!
//! uint8_t pixels[] = {0xFF, 0x00, 0x80, 0x00, 0x00, 0x00}; // 2 RGB888 pixels
//! uint8_t packed[4];
//!
//! // 3-argument shape: source and target order are given separately.
//! Rgb565PackResult result = rgb565pack_convert(
//!     pixels, sizeof(pixels), packed, sizeof(packed), "rgb", "bgr");
//!
//! if (result.error_code != RGB565PACK_SUCCESS) {
//!     printf("%s\n", rgb565pack_error_message(result.error_code));
//! }
//! ```
//!
//! ## ABI-Stable Functions (Recommended)
//!
//! - **`rgb565pack_output_len(input_len)`** - Number of output bytes for `input_len` input bytes
//! - **`rgb565pack_convert(input, input_len, output, output_len, source, target)`** - Pack with
//!   separate source and target tags (`"rgb"` or `"bgr"`)
//! - **`rgb565pack_convert_colorspace(input, input_len, output, output_len, colorspace)`** - Pack
//!   with one tag describing both input and output
//! - **`rgb565pack_error_message(error_code)`** - Static description of an error code
//!
//! ## ABI-Unstable Functions (Advanced Users)
//!
//! - **`rgb565pack_unstable_convert(input, input_len, output, output_len, settings)`** - Pack with
//!   an [`Rgb565PackCSettings`] struct, skipping tag parsing. The struct layout may change between
//!   versions.
//!
//! ## Error Handling
//!
//! All conversion functions return [`Rgb565PackResult`]. An error code of 0 means success.
//! Invalid arguments (null pointers, tags that are not valid UTF-8) are rejected before
//! any pixel is read or written.

pub mod convert;
pub mod error;

use rgb565_pack::{AlignmentRequirement, ChannelOrder, Rgb565PackSettings};

/// FFI-safe version of [`Rgb565PackSettings`] for C API.
///
/// This struct mirrors the internal [`Rgb565PackSettings`] but is guaranteed
/// to have stable ABI layout for C interoperability.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb565PackCSettings {
    /// Order of the channels within each input record (0 = rgb, 1 = bgr).
    pub source_order: ChannelOrder,
    /// Layout of each packed sample (0 = rgb, 1 = bgr).
    pub target_order: ChannelOrder,
    /// Reject inputs that are not a multiple of 8 pixels.
    pub strict_alignment: bool,
}

impl Default for Rgb565PackCSettings {
    fn default() -> Self {
        Rgb565PackSettings::default().into()
    }
}

impl From<Rgb565PackSettings> for Rgb565PackCSettings {
    fn from(settings: Rgb565PackSettings) -> Self {
        Self {
            source_order: settings.source_order,
            target_order: settings.target_order,
            strict_alignment: settings.alignment == AlignmentRequirement::Strict,
        }
    }
}

impl From<Rgb565PackCSettings> for Rgb565PackSettings {
    fn from(settings: Rgb565PackCSettings) -> Self {
        Self {
            source_order: settings.source_order,
            target_order: settings.target_order,
            alignment: match settings.strict_alignment {
                true => AlignmentRequirement::Strict,
                false => AlignmentRequirement::Pixel,
            },
        }
    }
}
