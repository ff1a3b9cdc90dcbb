// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Pipeline Layer
// ====================================================================================
//
// The `pipeline` is the public-facing API of the vbz library. It composes the
// pure kernels into the codec's three fixed stages and owns every buffer-level
// contract (capacity checks, the sized frame, the size bound).
//
// Data Flow (Compression):
//
//   [caller buffer: N samples of width W]
//         |
//         `-> kernels::delta + kernels::zigzag   (optional, on a working copy)
//         |
//         `-> widen each element to u32 (zero-extension)
//         |
//         `-> kernels::streamvbyte (layout selected by options.version)
//         |
//         `-> kernels::zstd                      (optional entropy stage)
//         |
//   [caller destination buffer]
//
// Decompression runs the exact inverse, and the sized entry points wrap the
// payload in a 4-byte little-endian original-length header.
//
// ====================================================================================

mod orchestrator;

pub use orchestrator::{
    compress, compress_sized, compress_sized_to_vec, compress_to_vec, decompress,
    decompress_sized, decompressed_size, max_compressed_size,
};
