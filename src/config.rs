//! The single source of truth for vbz compression configuration.
//!
//! This module defines the `CompressionOptions` struct that every entry point
//! takes. The options are created once at the application boundary (e.g. from a
//! host container's filter parameters) and passed by reference through the
//! pipeline; nothing in the codec mutates them.

use serde::{Deserialize, Serialize};

use crate::error::VbzError;

/// The 32-bit size domain of the codec. All counts and byte lengths that cross
/// the public surface or the wire fit in this type.
pub type VbzSize = u32;

//==================================================================================
// I. Format Version
//==================================================================================

/// The StreamVByte layout version used for the packed integer stream.
///
/// The two versions are wire-incompatible: `V0` packs four key codes per byte
/// in the reference layout, `V1` packs the codes as a contiguous bit stream.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatVersion {
    #[default]
    V0,
    V1,
}

/// The version new streams are written with unless the caller asks otherwise.
pub const VBZ_DEFAULT_VERSION: FormatVersion = FormatVersion::V0;

impl FormatVersion {
    /// Converts a raw version integer (as stored by a host container) into a
    /// `FormatVersion`.
    pub fn from_raw(raw: u32) -> Result<Self, VbzError> {
        match raw {
            0 => Ok(FormatVersion::V0),
            1 => Ok(FormatVersion::V1),
            other => Err(VbzError::UnknownVersion(other)),
        }
    }

    /// The raw integer stored by host containers for this version.
    pub fn as_raw(self) -> u32 {
        match self {
            FormatVersion::V0 => 0,
            FormatVersion::V1 => 1,
        }
    }
}

//==================================================================================
// II. Compression Options
//==================================================================================

/// Describes how one buffer is processed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    /// Apply the delta + zig-zag pre-transform before integer packing.
    pub perform_delta_zig_zag: bool,

    /// Sample width in bytes. Must be 1, 2 or 4.
    pub integer_size: u32,

    /// Zstd level for the entropy stage. `0` disables the stage entirely; any
    /// non-zero value is handed to zstd as the level (zstd clamps it to its
    /// own valid range).
    pub zstd_compression_level: u32,

    /// StreamVByte layout version.
    #[serde(default)]
    pub version: FormatVersion,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        // 16-bit samples with the pre-transform and a light zstd pass is the
        // common configuration for raw signal traces.
        Self {
            perform_delta_zig_zag: true,
            integer_size: 2,
            zstd_compression_level: 1,
            version: VBZ_DEFAULT_VERSION,
        }
    }
}

impl CompressionOptions {
    /// Checks the option invariants shared by every entry point.
    pub fn validate(&self) -> Result<(), VbzError> {
        match self.integer_size {
            1 | 2 | 4 => Ok(()),
            other => Err(VbzError::InputSize(format!(
                "integer size must be 1, 2 or 4 bytes, got {}",
                other
            ))),
        }
    }

    /// Whether the zstd entropy stage runs for these options.
    pub fn zstd_enabled(&self) -> bool {
        self.zstd_compression_level != 0
    }
}

//==================================================================================
// III. Unit Tests
//==================================================================================
