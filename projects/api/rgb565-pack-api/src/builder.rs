//! Builder pattern implementation for RGB565 pack configuration.

use crate::buffer::PackedBuffer;
use crate::convert::{pack_allocating_with, pack_with};
use crate::error::Rgb565Error;
use rgb565_pack::{AlignmentRequirement, ChannelOrder, Rgb565PackSettings, validate_input_len};

/// RGB565 pack configuration builder.
///
/// Unset options fall back to their defaults: `rgb` source and target order,
/// [`AlignmentRequirement::Pixel`], and multithreading whenever the `multithreaded`
/// feature is compiled in.
#[derive(Debug, Clone, Copy)]
pub struct Rgb565PackBuilder {
    source_order: Option<ChannelOrder>,
    target_order: Option<ChannelOrder>,
    alignment: Option<AlignmentRequirement>,
    multithreaded: Option<bool>,
}

impl Rgb565PackBuilder {
    /// Create a new pack builder.
    pub fn new() -> Self {
        Self {
            source_order: None,
            target_order: None,
            alignment: None,
            multithreaded: None,
        }
    }

    /// Set the order of the channels within each 3-byte input record.
    pub fn source_order(mut self, order: ChannelOrder) -> Self {
        self.source_order = Some(order);
        self
    }

    /// Set which channel lands in the top 5-bit field of each packed sample.
    pub fn target_order(mut self, order: ChannelOrder) -> Self {
        self.target_order = Some(order);
        self
    }

    /// Set both the source and target order from a single colorspace tag.
    pub fn colorspace(self, colorspace: ChannelOrder) -> Self {
        self.source_order(colorspace).target_order(colorspace)
    }

    /// Set how strictly the input length is validated.
    ///
    /// [`AlignmentRequirement::Strict`] rejects inputs that are not a multiple of 8 pixels.
    pub fn alignment(mut self, alignment: AlignmentRequirement) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set whether large inputs are split across the rayon thread pool.
    ///
    /// Has no effect unless the `multithreaded` feature is enabled.
    pub fn multithreaded(mut self, multithreaded: bool) -> Self {
        self.multithreaded = Some(multithreaded);
        self
    }

    /// Resolve the configured settings, filling in defaults.
    pub fn build(&self) -> Rgb565PackSettings {
        Rgb565PackSettings {
            source_order: self.source_order.unwrap_or_default(),
            target_order: self.target_order.unwrap_or_default(),
            alignment: self.alignment.unwrap_or_default(),
        }
    }

    /// Check that an input of `input_len` bytes would be accepted, without packing anything.
    ///
    /// # Errors
    ///
    /// - [`Rgb565Error::MalformedInput`] if `input_len` fails the alignment requirement
    pub fn validate_input_len(&self, input_len: usize) -> Result<(), Rgb565Error> {
        Ok(validate_input_len(input_len, self.build().alignment)?)
    }

    /// Pack pixels into a caller-provided buffer using the configured settings.
    ///
    /// # Errors
    ///
    /// - [`Rgb565Error::MalformedInput`] if input length fails the alignment requirement
    /// - [`Rgb565Error::OutputBufferTooSmall`] if output buffer is too small
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb565_pack_api::{AlignmentRequirement, Rgb565Error, Rgb565PackBuilder};
    ///
    /// let builder = Rgb565PackBuilder::new().alignment(AlignmentRequirement::Strict);
    /// let mut output = [0u8; 2];
    ///
    /// // One pixel is not a multiple of 8 pixels.
    /// let result = builder.pack_slice(&[0xFF, 0x00, 0x80], &mut output);
    /// assert!(matches!(result, Err(Rgb565Error::MalformedInput { .. })));
    /// ```
    pub fn pack_slice(&self, input: &[u8], output: &mut [u8]) -> Result<(), Rgb565Error> {
        pack_with(input, output, self.build(), self.use_threads())
    }

    /// Pack pixels into a newly allocated buffer using the configured settings.
    ///
    /// # Errors
    ///
    /// - [`Rgb565Error::MalformedInput`] if input length fails the alignment requirement
    /// - [`Rgb565Error::AllocationFailed`] if memory allocation fails
    pub fn pack_allocating(&self, input: &[u8]) -> Result<PackedBuffer, Rgb565Error> {
        pack_allocating_with(input, self.build(), self.use_threads())
    }

    fn use_threads(&self) -> bool {
        self.multithreaded
            .unwrap_or(cfg!(feature = "multithreaded"))
    }
}

impl Default for Rgb565PackBuilder {
    fn default() -> Self {
        Self::new()
    }
}
