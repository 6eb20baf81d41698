//! Multithreaded packing on the rayon thread pool.
//!
//! Input and output are cut into matching chunks of [`PARALLEL_CHUNK_PIXELS`] pixels.
//! Chunks never share bytes, so each worker runs the single-threaded kernel on its own
//! pair of sub-slices and the result is identical to [`pack_rgb565_with_settings`].
//!
//! [`pack_rgb565_with_settings`]: crate::pack_rgb565_with_settings

use crate::transform::operations::{pack_rgb565, validate_buffers, Rgb565ValidationError};
use crate::transform::settings::{
    packed_len, Rgb565PackSettings, PACKED_PIXEL_SIZE, SOURCE_PIXEL_SIZE,
};
use rayon::prelude::*;

/// Number of pixels handed to each worker at a time.
///
/// A multiple of 8, so every chunk but the last runs entirely in the unrolled kernel.
pub const PARALLEL_CHUNK_PIXELS: usize = 64 * 1024;

/// Inputs smaller than this (in bytes) are packed on the calling thread.
pub const PARALLEL_THRESHOLD_BYTES: usize = 1024 * 1024;

/// Pack RGB888/BGR888 pixels into big-endian RGB565/BGR565, split across the rayon pool.
///
/// Produces exactly the same bytes as [`pack_rgb565_with_settings`]; only the first
/// `packed_len(input.len())` bytes of `output` are written.
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
/// [`pack_rgb565_with_settings`]: crate::pack_rgb565_with_settings
pub fn pack_rgb565_parallel(
    input: &[u8],
    output: &mut [u8],
    settings: Rgb565PackSettings,
) -> Result<(), Rgb565ValidationError> {
    validate_buffers(input, output, &settings)?;

    let output = &mut output[..packed_len(input.len())];
    if input.len() < PARALLEL_THRESHOLD_BYTES {
        trace!("pack_rgb565_parallel: {} bytes, below threshold", input.len());
        // Safety: validated above
        unsafe { pack_rgb565(input.as_ptr(), output.as_mut_ptr(), input.len(), settings) };
        return Ok(());
    }

    trace!(
        "pack_rgb565_parallel: {} bytes in chunks of {} pixels",
        input.len(),
        PARALLEL_CHUNK_PIXELS
    );

    output
        .par_chunks_mut(PARALLEL_CHUNK_PIXELS * PACKED_PIXEL_SIZE)
        .zip(input.par_chunks(PARALLEL_CHUNK_PIXELS * SOURCE_PIXEL_SIZE))
        .for_each(|(output_chunk, input_chunk)| {
            // Safety: each input chunk holds whole pixels and the paired output chunk
            // is exactly packed_len(input_chunk.len()) bytes.
            unsafe {
                pack_rgb565(
                    input_chunk.as_ptr(),
                    output_chunk.as_mut_ptr(),
                    input_chunk.len(),
                    settings,
                )
            };
        });

    Ok(())
}
