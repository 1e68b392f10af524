//! Mapping from a hash byte-string to a bit index
//!
//! Every entry point (payload or pre-computed hash) goes through
//! [`bit_index`], which is what makes serialized state portable between
//! filters that share `max_bits` and a hash scheme.
//!
//! Algorithm:
//! 1. Normalize the hash to 4 bytes: keep the last 4 bytes of a longer hash,
//!    left-pad a shorter one with zero bytes.
//! 2. Assemble a signed 32-bit integer with byte 0 least significant.
//! 3. Take the magnitude. `i32::MIN` keeps its magnitude 2^31.
//! 4. Reduce modulo `max_bits`.

use std::borrow::Cow;

/// Width of the index window taken from each hash
pub const INDEX_BYTES: usize = 4;

/// Truncate or left-zero-pad `hash` to exactly `size` bytes
///
/// Longer inputs keep their trailing (low-order) bytes.
pub fn truncate_hash(size: usize, hash: &[u8]) -> Cow<'_, [u8]> {
    match hash.len() {
        len if len > size => Cow::Borrowed(&hash[len - size..]),
        len if len < size => {
            let mut padded = vec![0u8; size - len];
            padded.extend_from_slice(hash);
            Cow::Owned(padded)
        }
        _ => Cow::Borrowed(hash),
    }
}

/// Compute the bit index for `hash` within `[0, max_bits)`
///
/// # Panics
/// Panics if `max_bits` is zero. Filters always resolve a zero capacity to
/// the default before calling this.
pub fn bit_index(hash: &[u8], max_bits: usize) -> usize {
    let window = truncate_hash(INDEX_BYTES, hash);
    let value = i32::from_le_bytes([window[0], window[1], window[2], window[3]]);

    (value.unsigned_abs() as usize) % max_bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_keeps_trailing_bytes() {
        let hash = [0xAA, 0xBB, 0x01, 0x02, 0x03, 0x04];

        assert_eq!(truncate_hash(4, &hash).as_ref(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_truncate_left_pads_short_hash() {
        assert_eq!(truncate_hash(4, &[0x07]).as_ref(), &[0x00, 0x00, 0x00, 0x07]);
        assert_eq!(truncate_hash(4, &[]).as_ref(), &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_truncate_exact_length_is_borrowed() {
        let hash = [1u8, 2, 3, 4];

        let window = truncate_hash(4, &hash);
        assert!(matches!(window, Cow::Borrowed(_)));
        assert_eq!(window.as_ref(), &hash);
    }

    #[test]
    fn test_byte_zero_is_least_significant() {
        assert_eq!(bit_index(&[0x05, 0x00, 0x00, 0x00], 16), 5);
        assert_eq!(bit_index(&[0x00, 0x01, 0x00, 0x00], 1_000_000), 256);
        // 5 * 2^24 is a multiple of 16
        assert_eq!(bit_index(&[0x00, 0x00, 0x00, 0x05], 16), 0);
        assert_eq!(bit_index(&[0x00, 0x00, 0x00, 0x05], 100_000_007), 83_886_080);
    }

    #[test]
    fn test_negative_values_use_magnitude() {
        // 0xFFFFFFFF is -1
        assert_eq!(bit_index(&[0xFF, 0xFF, 0xFF, 0xFF], 1_000), 1);
        // 0xFFFFFFFE is -2
        assert_eq!(bit_index(&[0xFE, 0xFF, 0xFF, 0xFF], 1_000), 2);
    }

    #[test]
    fn test_i32_min_treated_as_non_negative() {
        // 0x80000000 is i32::MIN; its magnitude 2^31 is used as-is
        let hash = [0x00, 0x00, 0x00, 0x80];

        assert_eq!(bit_index(&hash, 100_000_007), 2_147_483_648 % 100_000_007);
        assert_eq!(bit_index(&hash, 1_000), 648);
    }

    #[test]
    fn test_only_last_four_bytes_participate() {
        let short = [0x10, 0x20, 0x30, 0x40];
        let long = [0xDE, 0xAD, 0xBE, 0xEF, 0x10, 0x20, 0x30, 0x40];

        assert_eq!(bit_index(&short, 4_099), bit_index(&long, 4_099));
    }

    #[test]
    fn test_short_hash_is_padded_before_interpretation() {
        // [0x01, 0x02] pads to [0x00, 0x00, 0x01, 0x02] = 0x02010000
        assert_eq!(bit_index(&[0x01, 0x02], u32::MAX as usize), 0x0201_0000);
    }

    proptest! {
        #[test]
        fn prop_index_always_in_range(
            hash in proptest::collection::vec(any::<u8>(), 0..64),
            max_bits in 1usize..10_000_000,
        ) {
            prop_assert!(bit_index(&hash, max_bits) < max_bits);
        }

        #[test]
        fn prop_index_is_deterministic(
            hash in proptest::collection::vec(any::<u8>(), 0..64),
            max_bits in 1usize..10_000_000,
        ) {
            prop_assert_eq!(bit_index(&hash, max_bits), bit_index(&hash, max_bits));
        }

        #[test]
        fn prop_prefix_bytes_do_not_matter(
            prefix in proptest::collection::vec(any::<u8>(), 0..32),
            tail in proptest::array::uniform4(any::<u8>()),
            max_bits in 1usize..10_000_000,
        ) {
            let mut long = prefix.clone();
            long.extend_from_slice(&tail);
            prop_assert_eq!(bit_index(&long, max_bits), bit_index(&tail, max_bits));
        }

        #[test]
        fn prop_truncate_yields_requested_size(
            hash in proptest::collection::vec(any::<u8>(), 0..64),
            size in 1usize..16,
        ) {
            prop_assert_eq!(truncate_hash(size, &hash).len(), size);
        }
    }
}
