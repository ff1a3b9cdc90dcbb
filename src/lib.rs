//! Lossless compression for sequences of small fixed-width signed integers,
//! such as nanopore signal traces.
//!
//! The codec is a three-stage pipeline: an optional delta + zig-zag
//! pre-transform, StreamVByte integer packing (two selectable layout versions),
//! and an optional zstd entropy stage. A "sized" frame variant prefixes the
//! original byte length so round-trips are self-describing.
//!
//! ```
//! use vbz::{compress_to_vec, decompress, CompressionOptions};
//!
//! let samples: Vec<i16> = vec![10, 20, 30, 40, 50];
//! let raw: &[u8] = bytemuck::cast_slice(&samples);
//!
//! let options = CompressionOptions::default();
//! let compressed = compress_to_vec(raw, &options).unwrap();
//!
//! let mut recovered = vec![0u8; raw.len()];
//! decompress(&compressed, &mut recovered, &options).unwrap();
//! assert_eq!(recovered, raw);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;

mod traits;
mod utils;

//==================================================================================
// 2. Public Surface
//==================================================================================
pub use config::{CompressionOptions, FormatVersion, VbzSize, VBZ_DEFAULT_VERSION};
pub use error::{is_error, VbzError};
pub use pipeline::{
    compress, compress_sized, compress_sized_to_vec, compress_to_vec, decompress,
    decompress_sized, decompressed_size, max_compressed_size,
};

/// The library version string.
pub fn version() -> &'static str {
    VERSION
}
