use proptest::prelude::*;
use dummy::libdummy_error_t::*;
use libdummy::prelude::*;

// Property 1: the C divide reports the same code and quotient as the Rust one
proptest! {
    #[test]
    fn prop_divide_agrees(a in any::<i32>(), b in prop_oneof![Just(0), any::<i32>()]) {
        let mut out: i32 = 0;
        let code = unsafe { dummy::libdummy_divide(a, b, &mut out) };
        match divide(a, b) {
            Ok(q) => {
                prop_assert_eq!(code, LIBDUMMY_SUCCESS);
                prop_assert_eq!(out, q);
            }
            Err(e) => prop_assert_eq!(code as i32, e.code().as_raw()),
        }
    }
}

// Property 2: sum, max and sort through raw pointers match the slice API
proptest! {
    #[test]
    fn prop_array_ops_agree(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut sum: i64 = 0;
        let code = unsafe { dummy::libdummy_array_sum(values.as_ptr(), values.len(), &mut sum) };
        prop_assert_eq!(code, LIBDUMMY_SUCCESS);
        prop_assert_eq!(sum, array_sum(&values));

        let mut max: i32 = 0;
        let code = unsafe { dummy::libdummy_array_max(values.as_ptr(), values.len(), &mut max) };
        match array_max(&values) {
            Ok(m) => {
                prop_assert_eq!(code, LIBDUMMY_SUCCESS);
                prop_assert_eq!(max, m);
            }
            Err(_) => prop_assert_eq!(code, LIBDUMMY_ERROR_INVALID_PARAM),
        }

        let mut via_c = values.clone();
        let code = unsafe { dummy::libdummy_array_sort(via_c.as_mut_ptr(), via_c.len()) };
        prop_assert_eq!(code, LIBDUMMY_SUCCESS);
        let mut via_rust = values;
        array_sort(&mut via_rust);
        prop_assert_eq!(via_c, via_rust);
    }
}

// Property 3: strcpy succeeds exactly when the text plus terminator fits
proptest! {
    #[test]
    fn prop_strcpy_agrees(text in prop::collection::vec(1u8..=255, 0..32), capacity in 1usize..40) {
        let mut src = text;
        src.push(0);

        let mut c_dest = vec![0x55u8; capacity];
        let code = unsafe {
            dummy::libdummy_strcpy(c_dest.as_mut_ptr().cast(), src.as_ptr().cast(), capacity)
        };
        let mut rust_dest = vec![0x55u8; capacity];
        match string_copy(&mut rust_dest, &src) {
            Ok(_) => prop_assert_eq!(code, LIBDUMMY_SUCCESS),
            Err(e) => prop_assert_eq!(code as i32, e.code().as_raw()),
        }
        prop_assert_eq!(c_dest, rust_dest);
    }
}
