//! # libdummy-core
//!
//! Shared foundation for the libdummy utility crates.
//!
//! - [`ErrorCode`] / [`DummyError`]: the flat four-way outcome taxonomy every
//!   fallible operation reports, with stable integer codes for the C ABI
//! - [`lifecycle`]: version constants plus the process-wide init flag
//!
//! None of the arithmetic, string or array operations consult the init flag;
//! they behave the same before `init`, after `init` and after `cleanup`.

pub mod error;
pub mod lifecycle;

pub use error::{DummyError, ErrorCode, Result};
pub use lifecycle::{cleanup, get_version, init, is_initialized, VERSION};
