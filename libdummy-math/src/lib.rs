//! # libdummy-math
//!
//! Fixed-width `i32` arithmetic for libdummy.
//!
//! `add`, `subtract` and `multiply` wrap on overflow (two's complement) with no
//! detection. [`divide`] and [`factorial`] validate their inputs and report a
//! [`DummyError`](libdummy_core::DummyError) instead of panicking.

pub mod ops;

pub use ops::{add, divide, factorial, multiply, subtract};
