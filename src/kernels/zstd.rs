//! This module contains the pure, stateless kernel for the Zstandard entropy
//! stage.
//!
//! It is the final transform in the compression pipeline: it takes the packed
//! StreamVByte payload and applies a general-purpose entropy coder to it. This
//! module is a safe, panic-free wrapper around the `zstd` crate's bulk API,
//! which compresses directly between caller-owned buffers so the pipeline's
//! destination-capacity contract is preserved. No length header is added here;
//! the sized frame is the only place the codec records the original length.

use crate::error::VbzError;

/// Worst-case compressed size for an input of `input_len` bytes.
pub fn max_compressed_size(input_len: usize) -> usize {
    zstd::zstd_safe::compress_bound(input_len)
}

/// Compresses `input` into `output` at the given level, returning the number of
/// bytes written.
///
/// Levels outside zstd's documented range are passed through; zstd clamps them.
pub fn encode_into(input: &[u8], output: &mut [u8], level: i32) -> Result<usize, VbzError> {
    zstd::bulk::compress_to_buffer(input, output, level).map_err(|e| {
        let needed = max_compressed_size(input.len());
        if output.len() < needed {
            VbzError::DestinationTooSmall {
                needed,
                available: output.len(),
            }
        } else {
            VbzError::Zstd(e.to_string())
        }
    })
}

/// Decompresses a zstd frame into `output`, returning the number of bytes
/// written.
///
/// Every failure here is treated as input corruption: a malformed frame, a
/// truncated frame, or a frame whose content exceeds what the surrounding
/// stream said to expect.
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize, VbzError> {
    zstd::bulk::decompress_to_buffer(input, output)
        .map_err(|e| VbzError::InputCorrupted(format!("zstd frame rejected: {}", e)))
}
