//! RGB565 pack entry points (raw pointer and validated slice variants).
//!
//! Note: For production use with ABI stability, consider using
//! `rgb565-pack-api::Rgb565PackBuilder`.

use crate::transform::settings::{packed_len, AlignmentRequirement, Rgb565PackSettings};
use crate::transform::standard;
use thiserror::Error;

/// Validation errors for RGB565 pack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rgb565ValidationError {
    /// Input length does not satisfy the [`AlignmentRequirement`].
    #[error("malformed BGR888/RGB888 binary data: {len} bytes is not a multiple of {required_multiple}")]
    MalformedInput {
        /// Length of the rejected input, in bytes.
        len: usize,
        /// The multiple the length was required to satisfy.
        required_multiple: usize,
    },

    /// Output buffer is too small to hold the packed data.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}

/// Pack RGB888/BGR888 pixels into big-endian RGB565/BGR565.
///
/// This is the raw, single-threaded entry point. The [`Rgb565PackSettings::alignment`]
/// field is not checked here; validation is the caller's job.
///
/// # Parameters
///
/// - `input_ptr`: A pointer to the input pixel records (3 bytes each)
/// - `output_ptr`: A pointer to the output location (2 bytes per pixel)
/// - `len`: The length of the input data in bytes
/// - `settings`: The source and target channel orders
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of `packed_len(len)` bytes
/// - len must be divisible by 3
/// - input and output must not overlap
///
/// # Examples
///
/// ```
/// use rgb565_pack::{pack_rgb565, ChannelOrder, Rgb565PackSettings};
///
/// let input = [0xFF, 0x00, 0x80];
/// let mut output = [0u8; 2];
/// let settings = Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Rgb);
///
/// unsafe { pack_rgb565(input.as_ptr(), output.as_mut_ptr(), input.len(), settings) };
/// assert_eq!(output, [0xF8, 0x10]);
/// ```
#[inline]
pub unsafe fn pack_rgb565(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    len: usize,
    settings: Rgb565PackSettings,
) {
    standard::pack(input_ptr, output_ptr, len, settings)
}

/// Checks that an input of `len` bytes satisfies `alignment`.
///
/// # Errors
///
/// - [`Rgb565ValidationError::MalformedInput`] if `len` is not a multiple of
///   [`AlignmentRequirement::required_multiple`]
#[inline]
pub fn validate_input_len(
    len: usize,
    alignment: AlignmentRequirement,
) -> Result<(), Rgb565ValidationError> {
    let required_multiple = alignment.required_multiple();
    if len % required_multiple != 0 {
        return Err(Rgb565ValidationError::MalformedInput {
            len,
            required_multiple,
        });
    }

    Ok(())
}

/// Validates `input` and `output` against `settings`.
#[inline]
pub(crate) fn validate_buffers(
    input: &[u8],
    output: &[u8],
    settings: &Rgb565PackSettings,
) -> Result<(), Rgb565ValidationError> {
    validate_input_len(input.len(), settings.alignment)?;

    let needed = packed_len(input.len());
    if output.len() < needed {
        return Err(Rgb565ValidationError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    Ok(())
}

/// Pack RGB888/BGR888 pixels into big-endian RGB565/BGR565, single threaded.
///
/// Only the first `packed_len(input.len())` bytes of `output` are written.
/// On error, `output` is left untouched.
///
/// # Parameters
///
/// - `input`: The input pixel records (3 bytes each)
/// - `output`: The output buffer, at least `packed_len(input.len())` bytes
/// - `settings`: The channel orders and alignment requirement to use
///
/// # Errors
///
/// - [`Rgb565ValidationError::MalformedInput`] if input length fails the alignment requirement
/// - [`Rgb565ValidationError::OutputBufferTooSmall`] if output buffer is too small
///
/// # Examples
///
/// ```
/// use rgb565_pack::{pack_rgb565_with_settings, ChannelOrder, Rgb565PackSettings};
/// # use rgb565_pack::Rgb565ValidationError;
///
/// # fn main() -> Result<(), Rgb565ValidationError> {
/// let input = [0xFF, 0x00, 0x80, 0x00, 0x00, 0x00];
/// let mut output = [0u8; 4];
///
/// let settings = Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Bgr);
/// pack_rgb565_with_settings(&input, &mut output, settings)?;
/// assert_eq!(output, [0x80, 0x1F, 0x00, 0x00]);
/// # Ok(())
/// # }
/// ```
pub fn pack_rgb565_with_settings(
    input: &[u8],
    output: &mut [u8],
    settings: Rgb565PackSettings,
) -> Result<(), Rgb565ValidationError> {
    validate_buffers(input, output, &settings)?;

    // Safety: We've validated the input length and output buffer size
    unsafe {
        pack_rgb565(input.as_ptr(), output.as_mut_ptr(), input.len(), settings);
    }

    Ok(())
}
