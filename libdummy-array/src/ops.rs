use libdummy_core::{DummyError, Result};

pub fn array_sum(arr: &[i32]) -> i64 {
    arr.iter().map(|&x| i64::from(x)).sum()
}

/// Largest element; ties keep the first occurrence
pub fn array_max(arr: &[i32]) -> Result<i32> {
    let (&first, rest) = arr.split_first().ok_or_else(|| {
        tracing::debug!("array_max rejected: empty array");
        DummyError::invalid_param("maximum of an empty array")
    })?;

    let mut max = first;
    for &x in rest {
        if x > max {
            max = x;
        }
    }
    Ok(max)
}

/// Ascending bubble sort
///
/// Each pass bubbles the largest remaining element to the end; equal
/// neighbours never swap. Stops after the first pass with no swaps.
pub fn array_sort(arr: &mut [i32]) {
    let mut end = arr.len();
    while end > 1 {
        let mut swapped = false;
        for j in 0..end - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}
