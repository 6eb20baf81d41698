use super::pack_pixel;
use core::ptr::write_unaligned;

/// Packs one pixel per iteration.
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len / 3 * 2 bytes
/// - len must be divisible by 3
#[inline(always)]
pub(crate) unsafe fn pixel<const SWAP_OUTER: bool>(
    mut input_ptr: *const u8,
    mut output_ptr: *mut u8,
    len: usize,
) {
    debug_assert!(len % 3 == 0);

    let max_ptr = input_ptr.add(len);
    while input_ptr < max_ptr {
        let colour = pack_pixel::<SWAP_OUTER>(*input_ptr, *input_ptr.add(1), *input_ptr.add(2));
        write_unaligned(output_ptr as *mut [u8; 2], colour.to_be_bytes());

        input_ptr = input_ptr.add(3);
        output_ptr = output_ptr.add(2);
    }
}
