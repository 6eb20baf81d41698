//! RGB565 pack operations.
//!
//! Both call shapes are provided:
//!
//! - 3 arguments: input, source order and target order ([`convert`], [`convert_tagged`])
//! - 2 arguments: input and a single colorspace tag used for both sides
//!   ([`convert_colorspace`], [`convert_colorspace_tagged`])
//!
//! All of them route to the same core packer.

use crate::buffer::PackedBuffer;
use crate::error::Rgb565Error;
use rgb565_pack::{ChannelOrder, Rgb565PackSettings, packed_len, validate_input_len};

/// Pack RGB888/BGR888 data into a caller-provided buffer.
///
/// Only the first `packed_len(input.len())` bytes of `output` are written.
///
/// # Parameters
///
/// - `input`: The input pixel records (3 bytes each)
/// - `output`: The output buffer to write packed samples to
/// - `settings`: The channel orders and alignment requirement to use
///
/// # Errors
///
/// - [`Rgb565Error::MalformedInput`] if input length fails the alignment requirement
/// - [`Rgb565Error::OutputBufferTooSmall`] if output buffer is smaller than `packed_len(input.len())`
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use rgb565_pack_api::{pack_rgb565_slice, ChannelOrder, Rgb565PackSettings};
/// let pixels = vec![0u8; 3 * 100]; // 100 RGB888 pixels
/// let mut output = vec![0u8; 2 * 100];
///
/// pack_rgb565_slice(&pixels, &mut output, Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Rgb))?;
/// # Ok(())
/// # }
/// ```
pub fn pack_rgb565_slice(
    input: &[u8],
    output: &mut [u8],
    settings: Rgb565PackSettings,
) -> Result<(), Rgb565Error> {
    pack_with(input, output, settings, cfg!(feature = "multithreaded"))
}

/// Pack RGB888/BGR888 data and return a new allocated buffer.
///
/// # Parameters
///
/// - `input`: The input pixel records (3 bytes each)
/// - `source_order`: Order of the channels within each input record
/// - `target_order`: Which channel lands in the top field of each sample
///
/// # Errors
///
/// - [`Rgb565Error::MalformedInput`] if input length is not divisible by 3
/// - [`Rgb565Error::AllocationFailed`] if memory allocation fails
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use rgb565_pack_api::{convert, ChannelOrder};
/// let packed = convert(&[0xFF, 0x00, 0x80], ChannelOrder::Rgb, ChannelOrder::Rgb)?;
/// assert_eq!(packed.as_slice(), &[0xF8, 0x10]);
/// # Ok(())
/// # }
/// ```
pub fn convert(
    input: &[u8],
    source_order: ChannelOrder,
    target_order: ChannelOrder,
) -> Result<PackedBuffer, Rgb565Error> {
    pack_allocating_with(
        input,
        Rgb565PackSettings::new(source_order, target_order),
        cfg!(feature = "multithreaded"),
    )
}

/// Pack RGB888/BGR888 data where one colorspace describes both input and output.
///
/// `rgb` reads `R, G, B` records and writes RGB565; `bgr` reads `B, G, R` records and
/// writes BGR565. Both produce the same bytes for the same input.
///
/// # Errors
///
/// - [`Rgb565Error::MalformedInput`] if input length is not divisible by 3
/// - [`Rgb565Error::AllocationFailed`] if memory allocation fails
pub fn convert_colorspace(
    input: &[u8],
    colorspace: ChannelOrder,
) -> Result<PackedBuffer, Rgb565Error> {
    convert(input, colorspace, colorspace)
}

/// Like [`convert`], but with the channel orders given as text (`"rgb"` or `"bgr"`).
///
/// # Errors
///
/// - [`Rgb565Error::InvalidChannelOrder`] if either tag is unknown
/// - [`Rgb565Error::MalformedInput`] if input length is not divisible by 3
/// - [`Rgb565Error::AllocationFailed`] if memory allocation fails
///
/// # Examples
///
/// ```
/// # use rgb565_pack_api::{convert_tagged, Rgb565Error};
/// let packed = convert_tagged(&[0xFF, 0x00, 0x80], "rgb", "bgr").unwrap();
/// assert_eq!(packed.as_slice(), &[0x80, 0x1F]);
///
/// let result = convert_tagged(&[0xFF, 0x00, 0x80], "rgb", "rgba");
/// assert!(matches!(result, Err(Rgb565Error::InvalidChannelOrder(_))));
/// ```
pub fn convert_tagged(
    input: &[u8],
    source_tag: &str,
    target_tag: &str,
) -> Result<PackedBuffer, Rgb565Error> {
    let source_order = ChannelOrder::from_tag(source_tag)?;
    let target_order = ChannelOrder::from_tag(target_tag)?;
    convert(input, source_order, target_order)
}

/// Like [`convert_colorspace`], but with the colorspace given as text (`"rgb"` or `"bgr"`).
///
/// # Errors
///
/// - [`Rgb565Error::InvalidChannelOrder`] if the tag is unknown
/// - [`Rgb565Error::MalformedInput`] if input length is not divisible by 3
/// - [`Rgb565Error::AllocationFailed`] if memory allocation fails
pub fn convert_colorspace_tagged(
    input: &[u8],
    colorspace_tag: &str,
) -> Result<PackedBuffer, Rgb565Error> {
    convert_colorspace(input, ChannelOrder::from_tag(colorspace_tag)?)
}

pub(crate) fn pack_with(
    input: &[u8],
    output: &mut [u8],
    settings: Rgb565PackSettings,
    multithreaded: bool,
) -> Result<(), Rgb565Error> {
    #[cfg(feature = "multithreaded")]
    if multithreaded {
        return Ok(rgb565_pack::pack_rgb565_parallel(input, output, settings)?);
    }

    #[cfg(not(feature = "multithreaded"))]
    let _ = multithreaded;

    Ok(rgb565_pack::pack_rgb565_with_settings(
        input, output, settings,
    )?)
}

pub(crate) fn pack_allocating_with(
    input: &[u8],
    settings: Rgb565PackSettings,
    multithreaded: bool,
) -> Result<PackedBuffer, Rgb565Error> {
    // Validate before allocating, so bad input never costs an allocation.
    validate_input_len(input.len(), settings.alignment)?;

    let mut output = PackedBuffer::allocate(packed_len(input.len()))?;
    pack_with(input, output.as_mut_slice(), settings, multithreaded)?;
    Ok(output)
}
