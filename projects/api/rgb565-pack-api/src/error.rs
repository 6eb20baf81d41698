//! Error types for RGB565 pack operations.

use rgb565_pack::Rgb565ValidationError;
use rgb565_pack_common::allocate::AllocateError;
use rgb565_pack_common::channel_order::InvalidChannelOrderError;
use thiserror::Error;

/// Errors that can occur during RGB565 pack operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rgb565Error {
    /// The input length does not satisfy the alignment requirement.
    #[error(
        "malformed BGR888/RGB888 binary data: {len} bytes is not a multiple of {required_multiple}"
    )]
    MalformedInput {
        /// Length of the rejected input, in bytes
        len: usize,
        /// The multiple the length was required to satisfy
        required_multiple: usize,
    },

    /// A channel order tag was neither `rgb` nor `bgr`.
    #[error(transparent)]
    InvalidChannelOrder(#[from] InvalidChannelOrderError),

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// Memory allocation failed.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),
}

impl From<Rgb565ValidationError> for Rgb565Error {
    fn from(error: Rgb565ValidationError) -> Self {
        match error {
            Rgb565ValidationError::MalformedInput {
                len,
                required_multiple,
            } => Rgb565Error::MalformedInput {
                len,
                required_multiple,
            },
            Rgb565ValidationError::OutputBufferTooSmall { needed, actual } => {
                Rgb565Error::OutputBufferTooSmall { needed, actual }
            }
        }
    }
}
