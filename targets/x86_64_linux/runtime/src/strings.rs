use core::cmp::Ordering;

/// Reads the byte at `index`, treating the end of the slice as a terminator.
#[inline]
fn byte_at(bytes: &[u8], index: usize) -> u8 {
    match bytes.get(index) {
        Some(byte) => *byte,
        None => 0,
    }
}

/// Compares at most `bound` bytes of `left` and `right`.
///
/// Stops early when both sides hold a zero byte at the same index. The result
/// is the difference of the first mismatching bytes (`left[i] - right[i]`), so
/// only its sign is meaningful for ordering. A slice that is shorter than the
/// scanned window reads as zero past its end. Bytes compare as unsigned values,
/// so `0xff` sorts above `0x01` where a signed `char` port would say the reverse.
pub fn compare_n(left: &[u8], right: &[u8], bound: usize) -> i32 {
    let mut index = 0usize;
    while index < bound {
        let left_byte = byte_at(left, index);
        let right_byte = byte_at(right, index);

        if left_byte == 0 && right_byte == 0 {
            break;
        }

        if left_byte != right_byte {
            return left_byte as i32 - right_byte as i32;
        }

        index += 1;
    }

    0
}

/// [`compare_n`] reduced to its sign.
pub fn compare_n_ordering(left: &[u8], right: &[u8], bound: usize) -> Ordering {
    compare_n(left, right, bound).cmp(&0)
}

/// # Safety
///
/// Both pointers must be valid for reads up to the first index where both hold
/// a NUL byte, the first mismatch, or `bound` bytes, whichever comes first.
/// Null pointers are not checked for; passing one is undefined behavior, as it
/// is for the C library `strncmp`.
#[no_mangle]
pub unsafe extern "C" fn _string_compare_n(left: *const u8, right: *const u8, bound: u64) -> i32 {
    let limit = if bound > usize::MAX as u64 { usize::MAX } else { bound as usize };

    let mut index = 0usize;
    while index < limit {
        let left_byte = *left.add(index);
        let right_byte = *right.add(index);

        if left_byte == 0 && right_byte == 0 {
            break;
        }

        if left_byte != right_byte {
            return left_byte as i32 - right_byte as i32;
        }

        index += 1;
    }

    0
}
