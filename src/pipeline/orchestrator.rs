//! The top-level orchestration of the compression pipeline.
//!
//! Every entry point here is a pure function over caller-owned buffers: no
//! internal threads, no global state, no I/O. The orchestrator validates the
//! options, dispatches on the sample width, runs the stages in order and
//! returns the byte count written, with the destination contents undefined on
//! error.

use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned, WrappingAdd, WrappingSub};

use crate::config::{CompressionOptions, VbzSize};
use crate::error::VbzError;
use crate::kernels::{delta, streamvbyte, zigzag, zstd};
use crate::traits::{HasSigned, HasUnsigned};
use crate::utils::{safe_bytes_to_typed_slice, typed_slice_to_bytes};

/// Length of the sized frame's little-endian original-length header.
const SIZED_HEADER_BYTES: usize = 4;

//==================================================================================
// 1. Size Bound
//==================================================================================

/// A conservative upper bound on the compressed size of `input_bytes` bytes
/// under `options`. `compress` never writes more than this into a destination
/// of at least this capacity, and the bound is non-decreasing in `input_bytes`.
///
/// The sized entry points need `SIZED_HEADER_BYTES` on top of this.
pub fn max_compressed_size(input_bytes: VbzSize, options: &CompressionOptions) -> VbzSize {
    // An out-of-range width cannot compress anyway; bound it by the smallest
    // width, which maximises the element count.
    let width = match options.integer_size {
        1 | 2 | 4 => options.integer_size as usize,
        _ => 1,
    };
    let n = (input_bytes as usize + width - 1) / width;

    let mut bound = streamvbyte::max_encoded_size(n);
    if options.zstd_enabled() {
        bound = zstd::max_compressed_size(bound);
    }
    bound.min(VbzSize::MAX as usize) as VbzSize
}

//==================================================================================
// 2. Non-Sized Codec
//==================================================================================

/// Compresses `src` into `dst`, returning the number of bytes written.
pub fn compress(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, VbzError> {
    options.validate()?;
    check_input_len(src.len(), options)?;

    let written = match options.integer_size {
        1 => compress_typed::<i8>(src, dst, options),
        2 => compress_typed::<i16>(src, dst, options),
        4 => compress_typed::<i32>(src, dst, options),
        other => Err(VbzError::InputSize(format!(
            "integer size must be 1, 2 or 4 bytes, got {}",
            other
        ))),
    }?;

    log_metric!(
        "event" = "compress",
        "input_bytes" = src.len(),
        "output_bytes" = written,
    );
    Ok(written)
}

/// Decompresses `src` into `dst`, returning the number of bytes written.
///
/// The element count is taken from the destination: `dst` must be exactly the
/// decompressed length, a multiple of the sample width.
pub fn decompress(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, VbzError> {
    options.validate()?;

    let width = options.integer_size as usize;
    if dst.len() % width != 0 {
        return Err(VbzError::InputSize(format!(
            "destination length {} is not a multiple of the sample width {}",
            dst.len(),
            width
        )));
    }
    let n = dst.len() / width;
    if n > VbzSize::MAX as usize {
        return Err(VbzError::InputSize(format!(
            "element count {} exceeds the 32-bit size domain",
            n
        )));
    }

    match options.integer_size {
        1 => decompress_typed::<i8>(src, dst, n, options),
        2 => decompress_typed::<i16>(src, dst, n, options),
        4 => decompress_typed::<i32>(src, dst, n, options),
        other => Err(VbzError::InputSize(format!(
            "integer size must be 1, 2 or 4 bytes, got {}",
            other
        ))),
    }
}

//==================================================================================
// 3. Sized Codec
//==================================================================================

/// Like [`compress`], but prefixes the payload with a 4-byte little-endian
/// header holding the original byte length, making the stream self-describing.
pub fn compress_sized(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, VbzError> {
    options.validate()?;
    check_input_len(src.len(), options)?;

    if dst.len() < SIZED_HEADER_BYTES {
        return Err(VbzError::DestinationTooSmall {
            needed: SIZED_HEADER_BYTES,
            available: dst.len(),
        });
    }
    let (header, payload) = dst.split_at_mut(SIZED_HEADER_BYTES);
    header.copy_from_slice(&(src.len() as VbzSize).to_le_bytes());

    let written = compress(src, payload, options)?;
    Ok(SIZED_HEADER_BYTES + written)
}

/// Reads the original byte length from a sized frame without touching the
/// payload.
pub fn decompressed_size(src: &[u8], options: &CompressionOptions) -> Result<VbzSize, VbzError> {
    options.validate()?;

    let header = src.get(..SIZED_HEADER_BYTES).ok_or_else(|| {
        VbzError::InputCorrupted(format!(
            "sized frame of {} bytes is shorter than its length header",
            src.len()
        ))
    })?;
    let mut buf = [0u8; SIZED_HEADER_BYTES];
    buf.copy_from_slice(header);
    Ok(VbzSize::from_le_bytes(buf))
}

/// Inverse of [`compress_sized`]: recovers the original length from the header
/// and decodes the payload after it.
pub fn decompress_sized(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, VbzError> {
    let size = decompressed_size(src, options)? as usize;
    if dst.len() < size {
        return Err(VbzError::DestinationTooSmall {
            needed: size,
            available: dst.len(),
        });
    }
    decompress(&src[SIZED_HEADER_BYTES..], &mut dst[..size], options)
}

//==================================================================================
// 4. Allocating Convenience Wrappers
//==================================================================================

/// Compresses into a freshly allocated buffer sized from
/// [`max_compressed_size`] and truncated to the bytes written.
pub fn compress_to_vec(src: &[u8], options: &CompressionOptions) -> Result<Vec<u8>, VbzError> {
    options.validate()?;
    check_input_len(src.len(), options)?;

    let mut out = vec![0u8; max_compressed_size(src.len() as VbzSize, options) as usize];
    let written = compress(src, &mut out, options)?;
    out.truncate(written);
    Ok(out)
}

/// Sized-frame counterpart of [`compress_to_vec`].
pub fn compress_sized_to_vec(
    src: &[u8],
    options: &CompressionOptions,
) -> Result<Vec<u8>, VbzError> {
    options.validate()?;
    check_input_len(src.len(), options)?;

    let capacity =
        SIZED_HEADER_BYTES + max_compressed_size(src.len() as VbzSize, options) as usize;
    let mut out = vec![0u8; capacity];
    let written = compress_sized(src, &mut out, options)?;
    out.truncate(written);
    Ok(out)
}

//==================================================================================
// 5. Stage Helpers
//==================================================================================

fn check_input_len(len: usize, options: &CompressionOptions) -> Result<(), VbzError> {
    if len > VbzSize::MAX as usize {
        return Err(VbzError::InputSize(format!(
            "input of {} bytes exceeds the 32-bit size domain",
            len
        )));
    }
    let width = options.integer_size as usize;
    if len % width != 0 {
        return Err(VbzError::InputSize(format!(
            "input length {} is not a multiple of the sample width {}",
            len, width
        )));
    }
    Ok(())
}

fn compress_typed<T>(
    src: &[u8],
    dst: &mut [u8],
    options: &CompressionOptions,
) -> Result<usize, VbzError>
where
    T: PrimInt + Signed + WrappingSub + HasUnsigned + bytemuck::Pod,
    T::Unsigned: PrimInt + Unsigned + AsPrimitive<u32> + bytemuck::Pod,
{
    let values = widen_samples::<T>(src, options.perform_delta_zig_zag)?;

    if options.zstd_enabled() {
        let mut scratch = vec![0u8; streamvbyte::max_encoded_size(values.len())];
        let packed = streamvbyte::encode(options.version, &values, &mut scratch)?;
        zstd::encode_into(
            &scratch[..packed],
            dst,
            options.zstd_compression_level as i32,
        )
    } else {
        streamvbyte::encode(options.version, &values, dst)
    }
}

fn decompress_typed<T>(
    src: &[u8],
    dst: &mut [u8],
    n: usize,
    options: &CompressionOptions,
) -> Result<usize, VbzError>
where
    T: PrimInt + Signed + WrappingAdd + HasUnsigned + bytemuck::Pod,
    T::Unsigned: PrimInt + Unsigned + HasSigned<Signed = T> + bytemuck::Pod,
    u32: AsPrimitive<T::Unsigned>,
{
    let mut values = vec![0u32; n];

    if options.zstd_enabled() {
        let mut scratch = vec![0u8; streamvbyte::max_encoded_size(n)];
        let unpacked = zstd::decode_into(src, &mut scratch)?;
        streamvbyte::decode(options.version, &scratch[..unpacked], n, &mut values)?;
    } else {
        streamvbyte::decode(options.version, src, n, &mut values)?;
    }

    let bytes = narrow_samples::<T>(&values, options.perform_delta_zig_zag);
    dst[..bytes.len()].copy_from_slice(&bytes);
    Ok(bytes.len())
}

/// Runs the optional pre-transform on a working copy of the samples and widens
/// every element to `u32` for the packing stage.
///
/// On the pre-transformed path the zig-zag output is already unsigned; on the
/// raw path the W-byte bit pattern is reinterpreted as unsigned. Both widen by
/// zero-extension, so small widths keep producing short key codes.
fn widen_samples<T>(src: &[u8], delta_zig_zag: bool) -> Result<Vec<u32>, VbzError>
where
    T: PrimInt + Signed + WrappingSub + HasUnsigned + bytemuck::Pod,
    T::Unsigned: PrimInt + AsPrimitive<u32>,
{
    let samples = safe_bytes_to_typed_slice::<T>(src)?;

    if delta_zig_zag {
        let mut work = samples.to_vec();
        delta::encode_slice_inplace(&mut work);
        Ok(work.iter().map(|&s| zigzag::encode_val(s).as_()).collect())
    } else {
        Ok(samples
            .iter()
            .map(|&s| zigzag::cast_unsigned(s).as_())
            .collect())
    }
}

/// Truncates every decoded `u32` back to the sample width and inverts the
/// pre-transform if it ran: zig-zag first, then the wrapping prefix sum.
fn narrow_samples<T>(values: &[u32], delta_zig_zag: bool) -> Vec<u8>
where
    T: PrimInt + Signed + WrappingAdd + HasUnsigned + bytemuck::Pod,
    T::Unsigned: PrimInt + Unsigned + HasSigned<Signed = T> + bytemuck::Pod,
    u32: AsPrimitive<T::Unsigned>,
{
    if delta_zig_zag {
        let mut work: Vec<T> = values
            .iter()
            .map(|&v| zigzag::decode_val::<T::Unsigned>(v.as_()))
            .collect();
        delta::decode_slice_inplace(&mut work);
        typed_slice_to_bytes(&work)
    } else {
        let narrowed: Vec<T::Unsigned> = values.iter().map(|&v| v.as_()).collect();
        typed_slice_to_bytes(&narrowed)
    }
}
