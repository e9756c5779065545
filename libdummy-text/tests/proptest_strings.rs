use proptest::prelude::*;
use libdummy_core::DummyError;
use libdummy_text::{string_copy, string_length, to_upper_inplace};

fn text() -> impl Strategy<Value = Vec<u8>> {
    // NUL-free bytes; callers append the terminator
    prop::collection::vec(1u8..=255, 0..64)
}

// Property 1: length of terminated text equals the number of text bytes
proptest! {
    #[test]
    fn prop_length_counts_text(mut bytes in text(), tail in prop::collection::vec(any::<u8>(), 0..8)) {
        let n = bytes.len();
        bytes.push(0);
        bytes.extend(tail);
        prop_assert_eq!(string_length(&bytes), n);
    }
}

// Property 2: copy succeeds iff len < capacity, and never writes on failure
proptest! {
    #[test]
    fn prop_copy_capacity_contract(mut src in text(), capacity in 1usize..80) {
        let len = src.len();
        src.push(0);
        let mut dest = vec![0xAAu8; capacity];

        match string_copy(&mut dest, &src) {
            Ok(copied) => {
                prop_assert!(len < capacity);
                prop_assert_eq!(copied, len);
                prop_assert_eq!(&dest[..=len], &src[..]);
                prop_assert!(dest[len + 1..].iter().all(|&b| b == 0xAA));
            }
            Err(e) => {
                prop_assert!(len >= capacity);
                prop_assert_eq!(e, DummyError::BufferTooSmall { needed: len + 1, capacity });
                prop_assert!(dest.iter().all(|&b| b == 0xAA));
            }
        }
    }
}

// Property 3: upper-casing is idempotent and matches the std ASCII mapping
proptest! {
    #[test]
    fn prop_to_upper_matches_ascii(src in text()) {
        let mut once = src.clone();
        once.push(0);
        let len = once.len();
        to_upper_inplace(&mut once, len);

        let mut twice = once.clone();
        to_upper_inplace(&mut twice, len);

        let expected = src.to_ascii_uppercase();
        prop_assert_eq!(&once[..src.len()], &expected[..]);
        prop_assert_eq!(once, twice);
    }
}
