//! The bit-stream StreamVByte layout.
//!
//! The key codes are packed as one contiguous bit stream of `2 * n` bits,
//! most-significant-bit-first within each byte, rounded up to a whole byte and
//! placed ahead of the data stream. Decoding walks the key stream two bits at
//! a time; there is no shuffle table and no SIMD requirement, which makes this
//! layout the portable choice where the v0 fast path is unavailable.

use bitvec::prelude::*;

use crate::error::VbzError;

use super::key_code;

/// Encodes `values` into `out`, returning the number of bytes written.
pub fn encode(values: &[u32], out: &mut [u8]) -> Result<usize, VbzError> {
    let n = values.len();
    let key_len = (2 * n + 7) / 8;
    let data_len: usize = values.iter().map(|&v| key_code(v) as usize + 1).sum();
    let total = key_len + data_len;

    if out.len() < total {
        return Err(VbzError::DestinationTooSmall {
            needed: total,
            available: out.len(),
        });
    }

    // Zero-initialised bit stream; untouched padding bits stay zero.
    let mut keys = bitvec![u8, Msb0; 0; 2 * n];
    let data = &mut out[key_len..total];

    let mut offset = 0;
    for (i, &v) in values.iter().enumerate() {
        let code = key_code(v);
        keys.set(2 * i, code & 0b10 != 0);
        keys.set(2 * i + 1, code & 0b01 != 0);

        let len = code as usize + 1;
        data[offset..offset + len].copy_from_slice(&v.to_le_bytes()[..len]);
        offset += len;
    }

    out[..key_len].copy_from_slice(keys.as_raw_slice());
    Ok(total)
}

/// Decodes `n` values from `input` into `out` (which must hold exactly `n`
/// elements).
///
/// Returns `InputCorrupted` if the key stream implies more data bytes than
/// `input` provides.
pub fn decode(input: &[u8], n: usize, out: &mut [u32]) -> Result<(), VbzError> {
    debug_assert_eq!(out.len(), n);

    let key_len = (2 * n + 7) / 8;
    if input.len() < key_len {
        return Err(VbzError::InputCorrupted(format!(
            "key stream needs {} bytes but only {} are available",
            key_len,
            input.len()
        )));
    }
    let (key_bytes, data) = input.split_at(key_len);
    let keys = BitSlice::<u8, Msb0>::from_slice(key_bytes);

    let mut offset = 0;
    for i in 0..n {
        let code = (keys[2 * i] as u8) << 1 | keys[2 * i + 1] as u8;
        let len = code as usize + 1;

        let bytes = data.get(offset..offset + len).ok_or_else(|| {
            VbzError::InputCorrupted(format!(
                "value {} needs {} data bytes at offset {} but the stream ends at {}",
                i,
                len,
                offset,
                data.len()
            ))
        })?;
        let mut buf = [0u8; 4];
        buf[..len].copy_from_slice(bytes);
        out[i] = u32::from_le_bytes(buf);
        offset += len;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::max_encoded_size;
    use super::*;
    use rand::Rng;

    fn roundtrip(values: &[u32]) -> Vec<u8> {
        let mut encoded = vec![0u8; max_encoded_size(values.len())];
        let n = encode(values, &mut encoded).unwrap();
        encoded.truncate(n);

        let mut decoded = vec![0u32; values.len()];
        decode(&encoded, values.len(), &mut decoded).unwrap();
        assert_eq!(decoded, values);
        encoded
    }

    #[test]
    fn test_key_bits_are_msb_first() {
        // Codes 1,0,3,2 -> bits 01 00 11 10 -> 0x4E.
        let values = [0x100u32, 1, 0x100_0000, 0x1_0000];
        let encoded = roundtrip(&values);
        assert_eq!(encoded[0], 0x4E);
    }

    #[test]
    fn test_partial_key_byte_padding_is_zero() {
        // One value, code 3: bits 11 followed by six zero padding bits.
        let encoded = roundtrip(&[u32::MAX]);
        assert_eq!(encoded[0], 0b1100_0000);
        assert_eq!(encoded.len(), 1 + 4);
    }

    #[test]
    fn test_empty_and_zero() {
        assert!(roundtrip(&[]).is_empty());
        assert_eq!(roundtrip(&[0]), vec![0x00, 0x00]);
    }

    #[test]
    fn test_extreme_values() {
        roundtrip(&[0, 1, 0xFF, 0x100, 0xFFFF, 0x1_0000, 0xFF_FFFF, 0x100_0000, u32::MAX]);
    }

    #[test]
    fn test_destination_too_small() {
        let values = [u32::MAX; 5];
        let mut out = vec![0u8; max_encoded_size(5) - 1];
        let result = encode(&values, &mut out);
        assert!(matches!(result, Err(VbzError::DestinationTooSmall { .. })));
    }

    #[test]
    fn test_truncated_input_is_corrupted() {
        let values = [70000u32, 300, 5];
        let mut encoded = vec![0u8; max_encoded_size(values.len())];
        let n = encode(&values, &mut encoded).unwrap();
        encoded.truncate(n - 1);

        let mut decoded = vec![0u32; values.len()];
        let result = decode(&encoded, values.len(), &mut decoded);
        assert!(matches!(result, Err(VbzError::InputCorrupted(_))));
    }

    #[test]
    fn test_random_roundtrips() {
        let mut rng = rand::thread_rng();
        for len in [1usize, 2, 7, 8, 100, 4097] {
            let values: Vec<u32> = (0..len)
                .map(|_| {
                    let v: u32 = rng.gen();
                    v >> (8 * (rng.gen_range(0..4u32)))
                })
                .collect();
            roundtrip(&values);
        }
    }
}
