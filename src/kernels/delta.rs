//! This module contains the pure, stateless kernel for delta encoding and
//! decoding of sample slices.
//!
//! The transform replaces each element with its wrapping difference from the
//! previous one, which concentrates slowly-varying signal traces around zero
//! ahead of the zig-zag stage. Both directions run **in-place** on a mutable
//! working copy owned by the caller.

use num_traits::{WrappingAdd, WrappingSub};

/// Performs delta encoding in-place: `data[i] = data[i] - data[i - 1]`, with
/// two's-complement wrap-around at the element width.
pub fn encode_slice_inplace<T>(data: &mut [T])
where
    T: Copy + WrappingSub,
{
    if data.len() <= 1 {
        return;
    }
    // Iterate backwards so each subtraction still sees the original neighbour.
    for i in (1..data.len()).rev() {
        data[i] = data[i].wrapping_sub(&data[i - 1]);
    }
}

/// Reconstructs the original values in-place via the wrapping prefix sum:
/// `data[i] = data[i] + data[i - 1]`.
pub fn decode_slice_inplace<T>(data: &mut [T])
where
    T: Copy + WrappingAdd,
{
    if data.len() <= 1 {
        return;
    }
    // Iterate forwards so each sum uses the already-reconstructed neighbour.
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(&data[i - 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_roundtrip_i32() {
        let original: Vec<i32> = vec![100, 110, 115, 112, 122];
        let mut buffer = original.clone();

        encode_slice_inplace(&mut buffer);
        assert_eq!(buffer, vec![100, 10, 5, -3, 10]);

        decode_slice_inplace(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_delta_wraps_at_width() {
        // i8::MIN - i8::MAX wraps; the prefix sum must wrap back identically.
        let original: Vec<i8> = vec![i8::MAX, i8::MIN, -1, i8::MAX];
        let mut buffer = original.clone();

        encode_slice_inplace(&mut buffer);
        decode_slice_inplace(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn test_delta_empty_and_single() {
        let mut empty: Vec<i16> = vec![];
        encode_slice_inplace(&mut empty);
        decode_slice_inplace(&mut empty);
        assert!(empty.is_empty());

        let mut single: Vec<i16> = vec![42];
        encode_slice_inplace(&mut single);
        assert_eq!(single, vec![42]);
        decode_slice_inplace(&mut single);
        assert_eq!(single, vec![42]);
    }
}
