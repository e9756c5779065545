//! # libdummy-array
//!
//! Linear-scan helpers over `i32` slices.
//!
//! - [`array_sum`]: widening sum into `i64`; an empty slice sums to 0
//! - [`array_max`]: first-occurrence maximum; an empty slice is an error
//! - [`array_sort`]: in-place ascending bubble sort with early exit

pub mod ops;

pub use ops::{array_max, array_sort, array_sum};
