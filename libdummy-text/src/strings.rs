use libdummy_core::{DummyError, Result};

const NUL: u8 = 0;

/// Number of bytes before the first NUL
pub fn string_length(s: &[u8]) -> usize {
    s.iter().position(|&b| b == NUL).unwrap_or(s.len())
}

/// Copy the text of `src` plus a terminator into `dest`
///
/// `dest.len()` is the capacity and must exceed the source length, leaving
/// room for the terminator. On error `dest` is left untouched.
/// Returns the number of text bytes copied.
pub fn string_copy(dest: &mut [u8], src: &[u8]) -> Result<usize> {
    if dest.is_empty() {
        tracing::debug!("string_copy rejected: zero-capacity destination");
        return Err(DummyError::invalid_param("destination capacity is zero"));
    }

    let len = string_length(src);
    if len >= dest.len() {
        tracing::debug!(len, capacity = dest.len(), "string_copy rejected: buffer too small");
        return Err(DummyError::BufferTooSmall {
            needed: len + 1,
            capacity: dest.len(),
        });
    }

    dest[..len].copy_from_slice(&src[..len]);
    dest[len] = NUL;
    Ok(len)
}

/// ASCII-uppercase at most `max_len` bytes in place, stopping at the first NUL
pub fn to_upper_inplace(s: &mut [u8], max_len: usize) {
    let limit = max_len.min(s.len());
    for b in s[..limit].iter_mut().take_while(|b| **b != NUL) {
        b.make_ascii_uppercase();
    }
}
