//! C API error handling for RGB565 pack operations.

use crate::error::Rgb565Error;
use core::ffi::c_char;

/// C-compatible error codes for RGB565 pack operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rgb565PackErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Input length fails the alignment requirement
    MalformedInput = 1,
    /// A channel order tag was neither `rgb` nor `bgr`
    InvalidChannelOrder = 2,
    /// Output buffer too small for the operation
    OutputBufferTooSmall = 3,
    /// Memory allocation failed
    AllocationFailed = 4,
    /// Null pointer provided for input parameter
    NullInputPointer = 5,
    /// Null pointer provided for output buffer parameter
    NullOutputBufferPointer = 6,
    /// Null pointer provided for a channel order tag
    NullTagPointer = 7,
    /// A channel order tag was not valid UTF-8
    InvalidTagEncoding = 8,
}

/// C-compatible Result type for RGB565 pack operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb565PackResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: Rgb565PackErrorCode,
}

impl Rgb565PackResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: Rgb565PackErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: Rgb565PackErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, Rgb565PackErrorCode::Success)
    }
}

impl<T> From<Result<T, Rgb565Error>> for Rgb565PackResult {
    fn from(result: Result<T, Rgb565Error>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(e) => e.into(),
        }
    }
}

impl From<Rgb565Error> for Rgb565PackResult {
    fn from(error: Rgb565Error) -> Self {
        let error_code = match error {
            Rgb565Error::MalformedInput { .. } => Rgb565PackErrorCode::MalformedInput,
            Rgb565Error::InvalidChannelOrder(_) => Rgb565PackErrorCode::InvalidChannelOrder,
            Rgb565Error::OutputBufferTooSmall { .. } => Rgb565PackErrorCode::OutputBufferTooSmall,
            Rgb565Error::AllocationFailed(_) => Rgb565PackErrorCode::AllocationFailed,
        };
        Self::from_error_code(error_code)
    }
}

/// Get a null-terminated string description of the error code.
///
/// The returned string is a static string literal that does not need to be freed.
///
/// # Safety
/// This function is safe to call with any error code value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rgb565pack_error_message(
    error_code: Rgb565PackErrorCode,
) -> *const c_char {
    match error_code {
        Rgb565PackErrorCode::Success => c"Success".as_ptr(),
        Rgb565PackErrorCode::MalformedInput => c"malformed BGR888/RGB888 binary data".as_ptr(),
        Rgb565PackErrorCode::InvalidChannelOrder => {
            c"invalid channel order, expecting rgb or bgr".as_ptr()
        }
        Rgb565PackErrorCode::OutputBufferTooSmall => {
            c"Output buffer too small for the operation".as_ptr()
        }
        Rgb565PackErrorCode::AllocationFailed => c"output allocation failed".as_ptr(),
        Rgb565PackErrorCode::NullInputPointer => {
            c"Null pointer provided for input data parameter".as_ptr()
        }
        Rgb565PackErrorCode::NullOutputBufferPointer => {
            c"Null pointer provided for output buffer parameter".as_ptr()
        }
        Rgb565PackErrorCode::NullTagPointer => {
            c"Null pointer provided for channel order tag parameter".as_ptr()
        }
        Rgb565PackErrorCode::InvalidTagEncoding => {
            c"channel order tag is not valid UTF-8".as_ptr()
        }
    }
}
