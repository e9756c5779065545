use thiserror::Error;

/// Outcome of a fallible libdummy call.
///
/// The discriminants are part of the C ABI and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    InvalidParam = -1,
    DivisionByZero = -2,
    BufferTooSmall = -3,
}

impl ErrorCode {
    /// Raw integer code as seen across the C ABI
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Inverse of [`ErrorCode::as_raw`]; unknown codes yield `None`
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Success),
            -1 => Some(Self::InvalidParam),
            -2 => Some(Self::DivisionByZero),
            -3 => Some(Self::BufferTooSmall),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DummyError {
    #[error("Invalid parameter: {reason}")]
    InvalidParam { reason: &'static str },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, DummyError>;

impl DummyError {
    pub fn invalid_param(reason: &'static str) -> Self {
        Self::InvalidParam { reason }
    }

    /// Collapse the error onto its wire-level code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidParam { .. } => ErrorCode::InvalidParam,
            Self::DivisionByZero => ErrorCode::DivisionByZero,
            Self::BufferTooSmall { .. } => ErrorCode::BufferTooSmall,
        }
    }
}

impl From<&DummyError> for ErrorCode {
    fn from(err: &DummyError) -> Self {
        err.code()
    }
}

impl<T> From<&Result<T>> for ErrorCode {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Success,
            Err(e) => e.code(),
        }
    }
}
