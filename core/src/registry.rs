//! registry.rs
//! Element kind registry: the closed set of numeric kinds a vector blob may carry.
//!
//! Notes:
//! - Tags are stable wire ids (`constants::kind_ids`), never reorder them.
//! - Widths are invariant per kind: 4 bytes for 32-bit kinds, 8 for 64-bit kinds.
//! - Tag decode and width lookup are exhaustive matches, no default fallthrough.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::kind_ids;
use crate::constants::widths::{WIDTH_32, WIDTH_64};
use crate::types::VectorError;

/// Numeric element kinds (header registry).
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum ElementKind {
    Float32 = kind_ids::FLOAT32,
    Float64 = kind_ids::FLOAT64,
    Int32   = kind_ids::INT32,
    Int64   = kind_ids::INT64,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Float32,
        ElementKind::Float64,
        ElementKind::Int32,
        ElementKind::Int64,
    ];

    /// Byte width of one element of this kind.
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            ElementKind::Float32 | ElementKind::Int32 => WIDTH_32,
            ElementKind::Float64 | ElementKind::Int64 => WIDTH_64,
        }
    }

    /// Wire tag written into the header.
    #[inline(always)]
    pub const fn to_raw(self) -> u32 {
        self as u32
    }

    /// Map a wire tag back to a kind.
    #[inline(always)]
    pub const fn try_from_raw(raw: u32) -> Result<Self, VectorError> {
        match raw {
            kind_ids::FLOAT32 => Ok(ElementKind::Float32),
            kind_ids::FLOAT64 => Ok(ElementKind::Float64),
            kind_ids::INT32   => Ok(ElementKind::Int32),
            kind_ids::INT64   => Ok(ElementKind::Int64),
            _ => Err(VectorError::UnknownElementKind { raw }),
        }
    }

    pub fn verify(raw: u32) -> Result<(), VectorError> {
        Self::try_from_raw(raw).map(|_| ())
    }

    /// Convenience: human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte width of `kind`. Total over the registry.
#[inline]
pub const fn width_of(kind: ElementKind) -> usize {
    kind.width()
}

/// Byte width for a raw wire tag, `None` when the tag is not registered.
#[inline]
pub fn width_of_raw(raw: u32) -> Option<usize> {
    match ElementKind::try_from_raw(raw) {
        Ok(kind) => Some(kind.width()),
        Err(_) => None,
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Rust scalar types that map onto a registry kind.
///
/// Sealed: the registry is closed, so is the set of element types.
pub trait Element: bytemuck::Pod + sealed::Sealed {
    const KIND: ElementKind;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float32;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float64;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Int32;
}

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Int64;
}
