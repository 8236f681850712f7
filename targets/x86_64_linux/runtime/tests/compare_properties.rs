//! Property checks for the bounded comparator.

use boundcmp_runtime::{_string_compare_n, compare_n, compare_n_ordering};
use proptest::prelude::*;

fn nul_terminated(bytes: &[u8]) -> Vec<u8> {
    let mut owned: Vec<u8> = bytes.iter().copied().filter(|b| *b != 0).collect();
    owned.push(0);
    owned
}

proptest! {
    #[test]
    fn reflexive(bytes in proptest::collection::vec(any::<u8>(), 0..64), bound in 0usize..96) {
        prop_assert_eq!(compare_n(&bytes, &bytes, bound), 0);
    }

    #[test]
    fn antisymmetric(
        left in proptest::collection::vec(any::<u8>(), 0..32),
        right in proptest::collection::vec(any::<u8>(), 0..32),
        bound in 0usize..48,
    ) {
        let forward = compare_n(&left, &right, bound);
        let backward = compare_n(&right, &left, bound);
        prop_assert_eq!(forward, -backward);
        prop_assert_eq!(
            compare_n_ordering(&left, &right, bound),
            compare_n_ordering(&right, &left, bound).reverse()
        );
    }

    #[test]
    fn shared_prefix_within_bound_is_equal(
        prefix in proptest::collection::vec(any::<u8>(), 0..32),
        left_tail in proptest::collection::vec(any::<u8>(), 0..16),
        right_tail in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut left = prefix.clone();
        left.extend_from_slice(&left_tail);
        let mut right = prefix.clone();
        right.extend_from_slice(&right_tail);

        prop_assert_eq!(compare_n(&left, &right, prefix.len()), 0);
    }

    #[test]
    fn magnitude_is_first_byte_difference(
        prefix in proptest::collection::vec(1u8..=255, 0..16),
        left_byte in 1u8..=255,
        right_byte in 1u8..=255,
    ) {
        prop_assume!(left_byte != right_byte);
        let mut left = prefix.clone();
        left.push(left_byte);
        let mut right = prefix.clone();
        right.push(right_byte);

        prop_assert_eq!(compare_n(&left, &right, left.len()), left_byte as i32 - right_byte as i32);
    }

    #[test]
    fn raw_pointer_entry_agrees_with_slices(
        left in proptest::collection::vec(any::<u8>(), 0..32),
        right in proptest::collection::vec(any::<u8>(), 0..32),
        bound in 0u64..48,
    ) {
        let left = nul_terminated(&left);
        let right = nul_terminated(&right);
        let raw = unsafe { _string_compare_n(left.as_ptr(), right.as_ptr(), bound) };
        prop_assert_eq!(raw, compare_n(&left, &right, bound as usize));
    }
}
