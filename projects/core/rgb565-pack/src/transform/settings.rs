//! Settings for RGB565 pack operations.

use rgb565_pack_common::channel_order::ChannelOrder;

/// Number of bytes in one input (RGB888/BGR888) pixel record.
pub const SOURCE_PIXEL_SIZE: usize = 3;

/// Number of bytes in one output (RGB565/BGR565) sample.
pub const PACKED_PIXEL_SIZE: usize = 2;

/// Input length multiple required by [`AlignmentRequirement::Strict`] (8 pixels).
pub const STRICT_ALIGNMENT_BYTES: usize = 24;

/// How strictly the input length is validated.
///
/// The kernels only ever need whole pixels. [`AlignmentRequirement::Strict`] exists for
/// callers that depend on the legacy behaviour of rejecting anything that is not a
/// multiple of 8 pixels.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentRequirement {
    /// Input length must be a multiple of 3 bytes (whole pixels).
    Pixel = 0,
    /// Input length must be a multiple of 24 bytes (8 whole pixels).
    Strict = 1,
}

impl AlignmentRequirement {
    /// Returns the byte multiple the input length must satisfy.
    #[inline]
    pub const fn required_multiple(self) -> usize {
        match self {
            AlignmentRequirement::Pixel => SOURCE_PIXEL_SIZE,
            AlignmentRequirement::Strict => STRICT_ALIGNMENT_BYTES,
        }
    }
}

impl Default for AlignmentRequirement {
    fn default() -> Self {
        Self::Pixel
    }
}

/// Settings for packing RGB888/BGR888 pixels into RGB565/BGR565.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565PackSettings {
    /// Order of the channels within each 3-byte input record.
    pub source_order: ChannelOrder,
    /// Layout of the channels within each packed 16-bit sample.
    pub target_order: ChannelOrder,
    /// Validation applied to the input length by the safe wrappers.
    pub alignment: AlignmentRequirement,
}

impl Rgb565PackSettings {
    /// Creates settings with independent source and target channel orders.
    #[inline]
    pub const fn new(source_order: ChannelOrder, target_order: ChannelOrder) -> Self {
        Self {
            source_order,
            target_order,
            alignment: AlignmentRequirement::Pixel,
        }
    }

    /// Creates settings where a single colorspace tag describes both input and output.
    #[inline]
    pub const fn with_colorspace(colorspace: ChannelOrder) -> Self {
        Self::new(colorspace, colorspace)
    }

    /// Whether the byte at offset 2 of a record (rather than offset 0) ends up in the top field.
    ///
    /// Reading BGR reverses the outer channels once and writing BGR565 reverses them again,
    /// so only a mismatch between source and target moves anything.
    #[inline]
    pub const fn swaps_outer_channels(&self) -> bool {
        !matches!(
            (self.source_order, self.target_order),
            (ChannelOrder::Rgb, ChannelOrder::Rgb) | (ChannelOrder::Bgr, ChannelOrder::Bgr)
        )
    }
}

/// Returns the number of output bytes produced for `input_len` input bytes.
///
/// Trailing bytes that do not form a whole pixel are not counted.
#[inline]
pub const fn packed_len(input_len: usize) -> usize {
    (input_len / SOURCE_PIXEL_SIZE) * PACKED_PIXEL_SIZE
}
