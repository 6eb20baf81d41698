use super::{pack_pixel, portable32};
use core::ptr::{read_unaligned, write_unaligned};

/// Bytes of input consumed per unrolled iteration (8 pixels).
const CHUNK_INPUT_BYTES: usize = 24;

/// Bytes of output produced per unrolled iteration (8 samples).
const CHUNK_OUTPUT_BYTES: usize = 16;

/// Packs 8 pixels per iteration, using 64-bit loads and stores.
///
/// Each iteration reads 24 bytes as three little-endian `u64` words and writes two
/// big-endian `u64` words holding 4 samples each. Leftover pixels (fewer than 8) are
/// handled by [`portable32::pixel`].
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len / 3 * 2 bytes
/// - len must be divisible by 3
#[inline(always)]
pub(crate) unsafe fn unroll_8<const SWAP_OUTER: bool>(
    mut input_ptr: *const u8,
    mut output_ptr: *mut u8,
    len: usize,
) {
    debug_assert!(len % 3 == 0);

    let aligned_len = len - (len % CHUNK_INPUT_BYTES);
    let max_aligned_ptr = input_ptr.add(aligned_len);
    while input_ptr < max_aligned_ptr {
        let words = [
            u64::from_le(read_unaligned(input_ptr as *const u64)),
            u64::from_le(read_unaligned(input_ptr.add(8) as *const u64)),
            u64::from_le(read_unaligned(input_ptr.add(16) as *const u64)),
        ];

        write_unaligned(
            output_ptr as *mut u64,
            pack_4::<SWAP_OUTER>(&words, 0).to_be(),
        );
        write_unaligned(
            output_ptr.add(8) as *mut u64,
            pack_4::<SWAP_OUTER>(&words, 4).to_be(),
        );

        input_ptr = input_ptr.add(CHUNK_INPUT_BYTES);
        output_ptr = output_ptr.add(CHUNK_OUTPUT_BYTES);
    }

    portable32::pixel::<SWAP_OUTER>(input_ptr, output_ptr, len - aligned_len);
}

/// Packs pixels `first_pixel..first_pixel + 4` of a 24-byte chunk into one `u64`,
/// the first pixel in the most significant 16 bits.
#[inline(always)]
fn pack_4<const SWAP_OUTER: bool>(words: &[u64; 3], first_pixel: usize) -> u64 {
    let mut packed = 0u64;
    for pixel in first_pixel..first_pixel + 4 {
        let offset = pixel * 3;
        let colour = pack_pixel::<SWAP_OUTER>(
            byte_at(words, offset),
            byte_at(words, offset + 1),
            byte_at(words, offset + 2),
        );
        packed = (packed << 16) | colour.raw_value() as u64;
    }
    packed
}

/// Extracts byte `index` (0-23) of the chunk, as it was laid out in memory.
#[inline(always)]
fn byte_at(words: &[u64; 3], index: usize) -> u8 {
    (words[index / 8] >> ((index % 8) * 8)) as u8
}
