//! This module defines the single, unified error type for the entire vbz library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every variant carries a stable negative integer code via [`VbzError::code`].
//! Host containers that embed the codec as a block filter key their behaviour on
//! these codes, so the numeric values must never change between releases.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VbzError {
    /// The input length is incompatible with the configured sample width, or
    /// the element count exceeds the 32-bit size domain.
    #[error("invalid input size: {0}")]
    InputSize(String),

    /// The destination buffer cannot hold what the current stage must write.
    #[error("destination buffer too small: need {needed} bytes, have {available}")]
    DestinationTooSmall { needed: usize, available: usize },

    /// The compressed input claims more bytes than it provides, or the zstd
    /// frame is malformed.
    #[error("compressed input is corrupted: {0}")]
    InputCorrupted(String),

    /// Zstd failed for a reason not attributable to the input itself.
    #[error("zstd operation failed: {0}")]
    Zstd(String),

    /// The options name a StreamVByte format version this build does not know.
    #[error("unrecognised format version: {0}")]
    UnknownVersion(u32),
}

impl VbzError {
    /// The stable negative code for this error.
    pub fn code(&self) -> i32 {
        match self {
            VbzError::InputSize(_) => -1,
            VbzError::DestinationTooSmall { .. } => -2,
            VbzError::InputCorrupted(_) => -3,
            VbzError::Zstd(_) => -4,
            VbzError::UnknownVersion(_) => -5,
        }
    }
}

/// Reports whether an integer returned through the flat (code-based) surface
/// is an error. Success values are non-negative byte counts.
pub fn is_error(n: i32) -> bool {
    n < 0
}
