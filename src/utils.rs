//! Shared, low-level utility functions used throughout the codec.
//!
//! Its primary responsibility is providing safe, validated conversions between
//! raw byte slices and typed sample slices, built on `bytemuck` so that no
//! hand-rolled pointer casts appear anywhere else in the crate.

use crate::error::VbzError;

/// Safely reinterprets a byte slice as a slice of a primitive integer type.
///
/// This is the gateway for converting caller-supplied sample bytes into a
/// workable, typed slice. It is a zero-copy view; `bytemuck` rejects length or
/// alignment mismatches before the cast happens.
///
/// # Errors
/// Returns `VbzError::InputSize` if the byte slice length is not a multiple of
/// the target type's size (or the slice is misaligned for it).
pub fn safe_bytes_to_typed_slice<T>(bytes: &[u8]) -> Result<&[T], VbzError>
where
    T: bytemuck::Pod,
{
    bytemuck::try_cast_slice(bytes).map_err(|e| {
        VbzError::InputSize(format!(
            "byte buffer of length {} cannot be viewed as {}-byte samples: {}",
            bytes.len(),
            std::mem::size_of::<T>(),
            e
        ))
    })
}

/// Converts a slice of primitive integers into an owned `Vec<u8>`.
///
/// `bytemuck` preserves the in-memory representation, which is little-endian on
/// every platform the codec supports.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_bytes_to_typed_slice_success() {
        let original: Vec<i32> = vec![1, -2, 1_000_000];
        let bytes = typed_slice_to_bytes(&original);

        let typed = safe_bytes_to_typed_slice::<i32>(&bytes).unwrap();
        assert_eq!(typed, original.as_slice());
    }

    #[test]
    fn test_safe_bytes_to_typed_slice_mismatch_error() {
        // 5 bytes is divisible by neither 2 nor 4.
        let bytes: Vec<u8> = vec![0, 1, 2, 3, 4];

        assert!(matches!(
            safe_bytes_to_typed_slice::<i32>(&bytes),
            Err(VbzError::InputSize(_))
        ));
        assert!(matches!(
            safe_bytes_to_typed_slice::<i16>(&bytes),
            Err(VbzError::InputSize(_))
        ));
    }

    #[test]
    fn test_typed_slice_to_bytes_little_endian() {
        // 258 = 0x0102: least significant byte first.
        let bytes = typed_slice_to_bytes(&[258u16]);
        assert_eq!(bytes, vec![0x02, 0x01]);
    }
}
