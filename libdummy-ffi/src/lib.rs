//! C ABI for libdummy.
//!
//! Builds as `libdummy.a` with a cbindgen-generated `include/libdummy.h`.
//! Each function validates the raw pointers it receives, reporting
//! `LIBDUMMY_ERROR_INVALID_PARAM` for null ones, then delegates to the safe
//! Rust crates. Nothing here allocates or keeps a pointer past the call.

#![allow(non_camel_case_types)]
#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::{CStr, c_char, c_int, c_longlong};
use std::slice;

use libdummy_core::ErrorCode;

pub const LIBDUMMY_VERSION_MAJOR: c_int = 1;
pub const LIBDUMMY_VERSION_MINOR: c_int = 0;
pub const LIBDUMMY_VERSION_PATCH: c_int = 0;

const VERSION_C: &CStr = c"1.0.0";

/// Error codes returned by fallible libdummy functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum libdummy_error_t {
    LIBDUMMY_SUCCESS = 0,
    LIBDUMMY_ERROR_INVALID_PARAM = -1,
    LIBDUMMY_ERROR_DIVISION_BY_ZERO = -2,
    LIBDUMMY_ERROR_BUFFER_TOO_SMALL = -3,
}

use libdummy_error_t::*;

impl From<ErrorCode> for libdummy_error_t {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Success => LIBDUMMY_SUCCESS,
            ErrorCode::InvalidParam => LIBDUMMY_ERROR_INVALID_PARAM,
            ErrorCode::DivisionByZero => LIBDUMMY_ERROR_DIVISION_BY_ZERO,
            ErrorCode::BufferTooSmall => LIBDUMMY_ERROR_BUFFER_TOO_SMALL,
        }
    }
}

/// Write `value` through `out` on success, or map the error to its code.
unsafe fn write_result<T>(out: *mut T, result: libdummy_core::Result<T>) -> libdummy_error_t {
    let code = ErrorCode::from(&result);
    if let Ok(value) = result {
        *out = value;
    }
    code.into()
}

fn invalid_param(param: &'static str) -> libdummy_error_t {
    tracing::debug!(param, "rejected invalid parameter");
    LIBDUMMY_ERROR_INVALID_PARAM
}

/// Get the library version string.
///
/// The returned pointer is static and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn libdummy_get_version() -> *const c_char {
    VERSION_C.as_ptr()
}

/// Initialize the library. Idempotent; always succeeds.
#[unsafe(no_mangle)]
pub extern "C" fn libdummy_init() -> libdummy_error_t {
    ErrorCode::from(&libdummy_core::init()).into()
}

/// Release library state. No-op when not initialized.
#[unsafe(no_mangle)]
pub extern "C" fn libdummy_cleanup() {
    libdummy_core::cleanup();
}

#[unsafe(no_mangle)]
pub extern "C" fn libdummy_add(a: c_int, b: c_int) -> c_int {
    libdummy_math::add(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn libdummy_subtract(a: c_int, b: c_int) -> c_int {
    libdummy_math::subtract(a, b)
}

#[unsafe(no_mangle)]
pub extern "C" fn libdummy_multiply(a: c_int, b: c_int) -> c_int {
    libdummy_math::multiply(a, b)
}

/// Divide `a` by `b`, truncating toward zero.
///
/// # Safety
/// `result` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_divide(a: c_int, b: c_int, result: *mut c_int) -> libdummy_error_t {
    if result.is_null() {
        return invalid_param("result");
    }
    write_result(result, libdummy_math::divide(a, b))
}

/// Compute `n!` into `result`.
///
/// # Safety
/// `result` must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_factorial(n: c_int, result: *mut c_longlong) -> libdummy_error_t {
    if result.is_null() {
        return invalid_param("result");
    }
    write_result(result, libdummy_math::factorial(n))
}

/// Length of a NUL-terminated string; 0 for null.
///
/// # Safety
/// `str` must be null or point to a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_strlen(str: *const c_char) -> usize {
    if str.is_null() {
        return 0;
    }
    CStr::from_ptr(str).to_bytes().len()
}

/// Copy `src` (with its terminator) into `dest`, which holds `dest_size` bytes.
///
/// # Safety
/// `dest` must be null or valid for `dest_size` bytes of writes; `src` must
/// be null or NUL-terminated. The two must not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_strcpy(
    dest: *mut c_char,
    src: *const c_char,
    dest_size: usize,
) -> libdummy_error_t {
    if dest.is_null() {
        return invalid_param("dest");
    }
    if src.is_null() {
        return invalid_param("src");
    }
    if dest_size == 0 {
        return invalid_param("dest_size");
    }

    let src = CStr::from_ptr(src).to_bytes_with_nul();
    let dest = slice::from_raw_parts_mut(dest.cast::<u8>(), dest_size);
    ErrorCode::from(&libdummy_text::string_copy(dest, src)).into()
}

/// Upper-case at most `len` bytes of `str` in place, stopping at the terminator.
///
/// # Safety
/// `str` must be null, or readable and writable up to its terminator or
/// `len` bytes, whichever comes first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_toupper(str: *mut c_char, len: usize) -> libdummy_error_t {
    if str.is_null() {
        return invalid_param("str");
    }

    // Never read past `len`, even when the terminator is further away.
    let mut text_len = 0;
    while text_len < len && *str.add(text_len) != 0 {
        text_len += 1;
    }

    let text = slice::from_raw_parts_mut(str.cast::<u8>(), text_len);
    libdummy_text::to_upper_inplace(text, text_len);
    LIBDUMMY_SUCCESS
}

/// Sum `size` elements of `arr` into `result`. An empty array sums to 0.
///
/// # Safety
/// `arr` must be null or valid for `size` reads; `result` must be null or
/// valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_array_sum(
    arr: *const c_int,
    size: usize,
    result: *mut c_longlong,
) -> libdummy_error_t {
    if arr.is_null() {
        return invalid_param("arr");
    }
    if result.is_null() {
        return invalid_param("result");
    }
    *result = libdummy_array::array_sum(slice::from_raw_parts(arr, size));
    LIBDUMMY_SUCCESS
}

/// Largest of `size` elements of `arr`. An empty array is rejected.
///
/// # Safety
/// `arr` must be null or valid for `size` reads; `result` must be null or
/// valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_array_max(
    arr: *const c_int,
    size: usize,
    result: *mut c_int,
) -> libdummy_error_t {
    if arr.is_null() {
        return invalid_param("arr");
    }
    if result.is_null() {
        return invalid_param("result");
    }
    if size == 0 {
        return invalid_param("size");
    }
    write_result(result, libdummy_array::array_max(slice::from_raw_parts(arr, size)))
}

/// Sort `size` elements of `arr` ascending, in place.
///
/// # Safety
/// `arr` must be null or valid for `size` reads and writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn libdummy_array_sort(arr: *mut c_int, size: usize) -> libdummy_error_t {
    if arr.is_null() {
        return invalid_param("arr");
    }
    libdummy_array::array_sort(slice::from_raw_parts_mut(arr, size));
    LIBDUMMY_SUCCESS
}
