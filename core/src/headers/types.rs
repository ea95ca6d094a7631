//! headers/types.rs
//! Wire header for vector blobs.
//!
//! Notes:
//! - 16 bytes, four big-endian u32 fields, fixed order.
//! - Fields are kept raw so a decoded header can be inspected before it is
//!   trusted; `validate()` is the gate.

use serde::{Deserialize, Serialize};

use crate::constants::{HEADER_LEN, VECTOR_MAGIC, VECTOR_VERSION};
use crate::registry::ElementKind;
use crate::types::VectorError;

/// Canonical vector blob header.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorHeader {
    pub magic: u32,         // "VECT" marker
    pub version: u32,       // format revision
    pub element_count: u32, // number of elements, > 0
    pub element_kind: u32,  // registry tag (ElementKind)
}

impl VectorHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Header for `element_count` elements of `kind` with current magic/version.
    pub fn new(kind: ElementKind, element_count: u32) -> Self {
        Self {
            magic: VECTOR_MAGIC,
            version: VECTOR_VERSION,
            element_count,
            element_kind: kind.to_raw(),
        }
    }

    /// Check magic, version and kind tag, in that order.
    ///
    /// Does not look at `element_count`; use `payload_len` for the length
    /// binding.
    pub fn validate(&self) -> Result<ElementKind, VectorError> {
        if self.magic != VECTOR_MAGIC {
            return Err(VectorError::InvalidMagic { have: self.magic, need: VECTOR_MAGIC });
        }
        if self.version != VECTOR_VERSION {
            return Err(VectorError::UnsupportedVersion { have: self.version, need: VECTOR_VERSION });
        }
        ElementKind::try_from_raw(self.element_kind)
    }

    pub fn kind(&self) -> Result<ElementKind, VectorError> {
        ElementKind::try_from_raw(self.element_kind)
    }

    /// Payload bytes implied by the header: `element_count * width(kind)`.
    pub fn payload_len(&self) -> Result<usize, VectorError> {
        let width = self.kind()?.width();
        let count = self.element_count as usize;
        count
            .checked_mul(width)
            .ok_or(VectorError::SizeOverflow { count, width })
    }

    /// Total blob length implied by the header.
    pub fn blob_len(&self) -> Result<usize, VectorError> {
        let width = self.kind()?.width();
        let count = self.element_count as usize;
        self.payload_len()?
            .checked_add(Self::LEN)
            .ok_or(VectorError::SizeOverflow { count, width })
    }

    /// Short summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "magic={} version={} count={} kind={}",
            crate::utils::fmt_magic(self.magic),
            self.version,
            self.element_count,
            crate::utils::enum_name_or_hex::<ElementKind>(self.element_kind),
        )
    }
}
