use crate::transform::settings::Rgb565PackSettings;
use multiversion::multiversion;
use rgb565_pack_common::color_565::Color565;

pub(crate) mod portable32;
pub(crate) mod portable64;

/// Packs the 3 bytes of one input record into a [`Color565`].
///
/// When `SWAP_OUTER` is false, `byte0` lands in bits 15-11 and `byte2` in bits 4-0.
/// When true, the two are exchanged. Green (`byte1`) never moves.
#[inline(always)]
pub(crate) fn pack_pixel<const SWAP_OUTER: bool>(byte0: u8, byte1: u8, byte2: u8) -> Color565 {
    if SWAP_OUTER {
        Color565::from_rgb(byte2, byte1, byte0)
    } else {
        Color565::from_rgb(byte0, byte1, byte2)
    }
}

/// Pack RGB888/BGR888 pixels into big-endian RGB565/BGR565
/// using the best known implementation for the current CPU.
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len / 3 * 2 bytes
/// - len must be divisible by 3
/// - input and output must not overlap
#[inline]
pub(crate) unsafe fn pack(
    input_ptr: *const u8,
    output_ptr: *mut u8,
    len: usize,
    settings: Rgb565PackSettings,
) {
    debug_assert!(len % 3 == 0);

    if settings.swaps_outer_channels() {
        trace!("pack_rgb565: swapped outer channels, {} bytes", len);
        pack_swapped(input_ptr, output_ptr, len)
    } else {
        trace!("pack_rgb565: straight outer channels, {} bytes", len);
        pack_straight(input_ptr, output_ptr, len)
    }
}

// The kernels are plain scalar code; multiversion lets the compiler auto-vectorize them
// for newer x86 levels, with runtime selection when `std` is available.

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)] // improve register budget.
unsafe fn pack_straight(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
    unsafe { portable64::unroll_8::<false>(input_ptr, output_ptr, len) }
}

#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)] // improve register budget.
unsafe fn pack_swapped(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
    unsafe { portable64::unroll_8::<true>(input_ptr, output_ptr, len) }
}
