//! # libdummy
//!
//! Arithmetic, string and array utilities, originally written to check that a
//! static-library toolchain builds and links correctly.
//!
//! This facade re-exports the safe Rust API of the member crates:
//! - [`libdummy_core`]: [`ErrorCode`], [`DummyError`], version and lifecycle
//! - [`libdummy_math`]: `add`, `subtract`, `multiply`, `divide`, `factorial`
//! - [`libdummy_text`]: `string_length`, `string_copy`, `to_upper_inplace`
//! - [`libdummy_array`]: `array_sum`, `array_max`, `array_sort`
//!
//! The C ABI (`libdummy.a` + `libdummy.h`) lives in `libdummy-ffi`.
//!
//! ```
//! use libdummy::prelude::*;
//!
//! assert_eq!(divide(7, -2)?, -3);
//! assert_eq!(factorial(5)?, 120);
//!
//! let mut values = [5, 2, 8, 1, 9];
//! array_sort(&mut values);
//! assert_eq!(values, [1, 2, 5, 8, 9]);
//! # Ok::<(), DummyError>(())
//! ```

pub use libdummy_core::{cleanup, get_version, init, is_initialized, DummyError, ErrorCode, Result, VERSION};

pub mod prelude {
    pub use libdummy_array::{array_max, array_sort, array_sum};
    pub use libdummy_core::{cleanup, get_version, init, DummyError, ErrorCode};
    pub use libdummy_math::{add, divide, factorial, multiply, subtract};
    pub use libdummy_text::{string_copy, string_length, to_upper_inplace};
}
