//! StreamVByte integer packing: a variable-byte encoding of `u32` sequences
//! that stores the per-value byte lengths (2 bits each) in a separate key
//! stream ahead of the data stream, keeping the data stream free of control
//! bits.
//!
//! Two wire-incompatible layout versions exist side by side and are selected
//! per call:
//!
//! - [`v0`] — the reference layout: four key codes per key byte, with an SSSE3
//!   shuffle fast path on x86-64 decodes.
//! - [`v1`] — the key codes packed as one contiguous bit stream.
//!
//! The versions share nothing beyond the 2-bit code derivation and the
//! worst-case size bound below; each owns its key-stream packer outright.

pub mod v0;
pub mod v1;

use crate::config::FormatVersion;
use crate::error::VbzError;

/// The 2-bit key code for a value: the number of data bytes it needs, minus
/// one.
#[inline]
pub(crate) fn key_code(v: u32) -> u8 {
    match v {
        0..=0xFF => 0,
        0x100..=0xFFFF => 1,
        0x1_0000..=0xFF_FFFF => 2,
        _ => 3,
    }
}

/// Worst-case encoded size for `n` values: one key byte per four values plus
/// four data bytes per value. Identical for both layout versions.
pub fn max_encoded_size(n: usize) -> usize {
    (n + 3) / 4 + 4 * n
}

/// Encodes `values` into `out` using the given layout version, returning the
/// number of bytes written.
pub fn encode(
    version: FormatVersion,
    values: &[u32],
    out: &mut [u8],
) -> Result<usize, VbzError> {
    match version {
        FormatVersion::V0 => v0::encode(values, out),
        FormatVersion::V1 => v1::encode(values, out),
    }
}

/// Decodes `n` values from `input` into `out` using the given layout version.
/// `out` must hold exactly `n` elements.
pub fn decode(
    version: FormatVersion,
    input: &[u8],
    n: usize,
    out: &mut [u32],
) -> Result<(), VbzError> {
    match version {
        FormatVersion::V0 => v0::decode(input, n, out),
        FormatVersion::V1 => v1::decode(input, n, out),
    }
}
