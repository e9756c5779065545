//! # libdummy-text
//!
//! String helpers over caller-owned byte buffers holding NUL-terminated text.
//!
//! A buffer's text is every byte before its first `0`; a slice with no `0`
//! is treated as text filling the whole slice. Nothing here allocates.

pub mod strings;

pub use strings::{string_copy, string_length, to_upper_inplace};
