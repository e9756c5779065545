use libdummy_core::{DummyError, Result};

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Truncating division (rounds toward zero)
///
/// `i32::MIN / -1` wraps to `i32::MIN` rather than trapping.
pub fn divide(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        tracing::debug!(dividend = a, "divide rejected: zero divisor");
        return Err(DummyError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// n! accumulated in an `i64`
///
/// `factorial(0) == 1`. Results past 20! wrap silently.
pub fn factorial(n: i32) -> Result<i64> {
    if n < 0 {
        tracing::debug!(n, "factorial rejected: negative input");
        return Err(DummyError::invalid_param("factorial of a negative number"));
    }
    Ok((2..=i64::from(n)).fold(1i64, |acc, i| acc.wrapping_mul(i)))
}
