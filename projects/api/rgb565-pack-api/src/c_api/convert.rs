//! RGB565 pack operations for C API.
//!
//! Tags are NUL-terminated strings (`"rgb"` or `"bgr"`, any ASCII case). Every argument is
//! checked before the packer runs; on error, the output buffer is not written.

use crate::c_api::Rgb565PackCSettings;
use crate::c_api::error::{Rgb565PackErrorCode, Rgb565PackResult};
use crate::convert::pack_rgb565_slice;
use core::ffi::{CStr, c_char};
use core::slice;
use rgb565_pack::{ChannelOrder, Rgb565PackSettings, packed_len};

/// Number of output bytes produced for `input_len` input bytes.
///
/// Use this to size the `output` buffer passed to the conversion functions.
#[unsafe(no_mangle)]
pub extern "C" fn rgb565pack_output_len(input_len: usize) -> usize {
    packed_len(input_len)
}

/// Pack RGB888/BGR888 data with separate source and target channel orders.
///
/// # Parameters
/// - `input`: Pointer to the input pixel records (3 bytes each)
/// - `input_len`: Length of input data in bytes (must be divisible by 3)
/// - `output`: Pointer to output buffer where packed samples will be written
/// - `output_len`: Length of output buffer in bytes (must be at least [`rgb565pack_output_len`])
/// - `source_order`: NUL-terminated tag describing the input records
/// - `target_order`: NUL-terminated tag describing the output layout
///
/// # Returns
/// A [`Rgb565PackResult`] indicating success or containing an error.
///
/// # Safety
/// - `input` must be valid for reads of `input_len` bytes
/// - `output` must be valid for writes of `output_len` bytes
/// - `source_order` and `target_order` must be valid NUL-terminated strings
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rgb565pack_convert(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
    source_order: *const c_char,
    target_order: *const c_char,
) -> Rgb565PackResult {
    let source_order = match unsafe { parse_tag(source_order) } {
        Ok(order) => order,
        Err(code) => return Rgb565PackResult::from_error_code(code),
    };
    let target_order = match unsafe { parse_tag(target_order) } {
        Ok(order) => order,
        Err(code) => return Rgb565PackResult::from_error_code(code),
    };

    unsafe {
        convert_raw(
            input,
            input_len,
            output,
            output_len,
            Rgb565PackSettings::new(source_order, target_order),
        )
    }
}

/// Pack RGB888/BGR888 data where one colorspace tag describes both input and output.
///
/// # Parameters
/// - `input`: Pointer to the input pixel records (3 bytes each)
/// - `input_len`: Length of input data in bytes (must be divisible by 3)
/// - `output`: Pointer to output buffer where packed samples will be written
/// - `output_len`: Length of output buffer in bytes (must be at least [`rgb565pack_output_len`])
/// - `colorspace`: NUL-terminated tag used as both source and target order
///
/// # Returns
/// A [`Rgb565PackResult`] indicating success or containing an error.
///
/// # Safety
/// - `input` must be valid for reads of `input_len` bytes
/// - `output` must be valid for writes of `output_len` bytes
/// - `colorspace` must be a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rgb565pack_convert_colorspace(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
    colorspace: *const c_char,
) -> Rgb565PackResult {
    let colorspace = match unsafe { parse_tag(colorspace) } {
        Ok(order) => order,
        Err(code) => return Rgb565PackResult::from_error_code(code),
    };

    unsafe {
        convert_raw(
            input,
            input_len,
            output,
            output_len,
            Rgb565PackSettings::with_colorspace(colorspace),
        )
    }
}

/// Pack RGB888/BGR888 data using an explicit settings struct (ABI-unstable).
///
/// ## ABI Instability Warning
/// This function accepts ABI-unstable structures which may change between versions.
/// Use [`rgb565pack_convert`] for ABI stability.
///
/// # Parameters
/// - `input`: Pointer to the input pixel records (3 bytes each)
/// - `input_len`: Length of input data in bytes
/// - `output`: Pointer to output buffer where packed samples will be written
/// - `output_len`: Length of output buffer in bytes (must be at least [`rgb565pack_output_len`])
/// - `settings`: The settings to use
///
/// # Returns
/// A [`Rgb565PackResult`] indicating success or containing an error.
///
/// # Safety
/// - `input` must be valid for reads of `input_len` bytes
/// - `output` must be valid for writes of `output_len` bytes
/// - `settings.source_order` and `settings.target_order` must hold 0 or 1
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rgb565pack_unstable_convert(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
    settings: Rgb565PackCSettings,
) -> Rgb565PackResult {
    unsafe { convert_raw(input, input_len, output, output_len, settings.into()) }
}

/// Checks pointers, builds slices and runs the packer.
unsafe fn convert_raw(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
    settings: Rgb565PackSettings,
) -> Rgb565PackResult {
    // Validate pointers
    if input.is_null() {
        return Rgb565PackResult::from_error_code(Rgb565PackErrorCode::NullInputPointer);
    }
    if output.is_null() {
        return Rgb565PackResult::from_error_code(Rgb565PackErrorCode::NullOutputBufferPointer);
    }

    // Create slices from raw pointers
    let input_slice = unsafe { slice::from_raw_parts(input, input_len) };
    let output_slice = unsafe { slice::from_raw_parts_mut(output, output_len) };

    pack_rgb565_slice(input_slice, output_slice, settings).into()
}

/// Reads a NUL-terminated channel order tag.
unsafe fn parse_tag(tag: *const c_char) -> Result<ChannelOrder, Rgb565PackErrorCode> {
    if tag.is_null() {
        return Err(Rgb565PackErrorCode::NullTagPointer);
    }

    let tag = unsafe { CStr::from_ptr(tag) }
        .to_str()
        .map_err(|_| Rgb565PackErrorCode::InvalidTagEncoding)?;
    ChannelOrder::from_tag(tag).map_err(|_| Rgb565PackErrorCode::InvalidChannelOrder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::ptr;

    #[rstest]
    #[case(c"rgb", c"rgb", [0xF8, 0x10])]
    #[case(c"rgb", c"bgr", [0x80, 0x1F])]
    #[case(c"BGR", c"rgb", [0x80, 0x1F])]
    #[case(c"bgr", c"bgr", [0xF8, 0x10])]
    fn convert_with_tags(#[case] source: &CStr, #[case] target: &CStr, #[case] expected: [u8; 2]) {
        let input = [0xFF, 0x00, 0x80];
        let mut output = [0u8; 2];

        let result = unsafe {
            rgb565pack_convert(
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                source.as_ptr(),
                target.as_ptr(),
            )
        };
        assert!(result.is_success());
        assert_eq!(output, expected);
    }

    #[test]
    fn colorspace_shape_matches_three_argument_shape() {
        let input = generate_pixel_test_data(37);
        let mut two_arg = vec![0u8; rgb565pack_output_len(input.len())];
        let mut three_arg = vec![0u8; rgb565pack_output_len(input.len())];

        let two = unsafe {
            rgb565pack_convert_colorspace(
                input.as_ptr(),
                input.len(),
                two_arg.as_mut_ptr(),
                two_arg.len(),
                c"bgr".as_ptr(),
            )
        };
        let three = unsafe {
            rgb565pack_convert(
                input.as_ptr(),
                input.len(),
                three_arg.as_mut_ptr(),
                three_arg.len(),
                c"bgr".as_ptr(),
                c"bgr".as_ptr(),
            )
        };

        assert!(two.is_success() && three.is_success());
        assert_eq!(two_arg, three_arg);
    }

    #[test]
    fn unknown_tag_is_rejected_without_writing() {
        let input = [0xFF, 0x00, 0x80];
        let mut output = [0xAAu8; 2];

        let result = unsafe {
            rgb565pack_convert(
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                c"rgb".as_ptr(),
                c"rgba".as_ptr(),
            )
        };
        assert_eq!(result.error_code, Rgb565PackErrorCode::InvalidChannelOrder);
        assert_eq!(output, [0xAA, 0xAA]);
    }

    #[test]
    fn non_utf8_tag_is_rejected() {
        let input = [0xFF, 0x00, 0x80];
        let mut output = [0u8; 2];
        let tag = [0xFFu8, 0xFE, 0x00];

        let result = unsafe {
            rgb565pack_convert_colorspace(
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                tag.as_ptr() as *const c_char,
            )
        };
        assert_eq!(result.error_code, Rgb565PackErrorCode::InvalidTagEncoding);
    }

    #[test]
    fn null_pointers_are_rejected() {
        let input = [0u8; 3];
        let mut output = [0u8; 2];

        let result = unsafe {
            rgb565pack_convert(
                ptr::null(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                c"rgb".as_ptr(),
                c"rgb".as_ptr(),
            )
        };
        assert_eq!(result.error_code, Rgb565PackErrorCode::NullInputPointer);

        let result = unsafe {
            rgb565pack_convert(
                input.as_ptr(),
                input.len(),
                ptr::null_mut(),
                output.len(),
                c"rgb".as_ptr(),
                c"rgb".as_ptr(),
            )
        };
        assert_eq!(result.error_code, Rgb565PackErrorCode::NullOutputBufferPointer);

        let result = unsafe {
            rgb565pack_convert(
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                c"rgb".as_ptr(),
                ptr::null(),
            )
        };
        assert_eq!(result.error_code, Rgb565PackErrorCode::NullTagPointer);
    }

    #[test]
    fn malformed_input_is_reported() {
        let input = [0u8; 4];
        let mut output = [0u8; 4];

        let result = unsafe {
            rgb565pack_convert_colorspace(
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                c"rgb".as_ptr(),
            )
        };
        assert_eq!(result.error_code, Rgb565PackErrorCode::MalformedInput);
    }

    #[rstest]
    #[case(false, 3, Rgb565PackErrorCode::Success)]
    #[case(true, 3, Rgb565PackErrorCode::MalformedInput)]
    #[case(true, 24, Rgb565PackErrorCode::Success)]
    fn unstable_convert_honours_strict_alignment(
        #[case] strict_alignment: bool,
        #[case] len: usize,
        #[case] expected: Rgb565PackErrorCode,
    ) {
        let input = generate_pixel_test_data(len / 3);
        let mut output = vec![0u8; rgb565pack_output_len(len)];
        let settings = Rgb565PackCSettings {
            source_order: ChannelOrder::Rgb,
            target_order: ChannelOrder::Bgr,
            strict_alignment,
        };

        let result = unsafe {
            rgb565pack_unstable_convert(
                input.as_ptr(),
                input.len(),
                output.as_mut_ptr(),
                output.len(),
                settings,
            )
        };
        assert_eq!(result.error_code, expected);
        if result.is_success() {
            assert_eq!(output, reference_pack(&input, settings.into()));
        }
    }

    #[test]
    fn settings_convert_both_ways() {
        let settings = Rgb565PackSettings {
            source_order: ChannelOrder::Bgr,
            target_order: ChannelOrder::Rgb,
            alignment: AlignmentRequirement::Strict,
        };
        let c_settings: Rgb565PackCSettings = settings.into();
        assert!(c_settings.strict_alignment);
        assert_eq!(Rgb565PackSettings::from(c_settings), settings);
    }
}
