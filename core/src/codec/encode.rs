use bytes::Bytes;

use crate::constants::MAX_ELEMENT_COUNT;
use crate::headers::{encode_header_be, VectorHeader};
use crate::registry::ElementKind;
use crate::types::VectorError;
use crate::vector::{try_alloc, BinaryBlob, NumericVector};

/// Encode a vector into the blob wire format.
///
/// Layout:
///
/// ```text
/// [ magic (4, BE) ]
/// [ version (4, BE) ]
/// [ element_count (4, BE) ]
/// [ element_kind (4, BE) ]
/// [ payload (element_count * width, native order) ]
/// ```
///
/// # Errors
/// Checked in order, first failure wins:
/// - `EmptyVector` (unreachable through `NumericVector` constructors, kept as a gate)
/// - `WidthMismatch` if the vector width is not the registry width of `kind`
/// - `TooManyElements` / `SizeOverflow` on size arithmetic
/// - `ResourceExhausted` if the output buffer cannot be allocated
pub fn encode(vector: &NumericVector, kind: ElementKind) -> Result<BinaryBlob, VectorError> {
    if vector.is_empty() {
        return Err(VectorError::EmptyVector);
    }

    let width = kind.width();
    if vector.element_width() != width {
        return Err(VectorError::WidthMismatch { have: vector.element_width(), need: width });
    }

    let count = vector.len();
    if count > MAX_ELEMENT_COUNT {
        return Err(VectorError::TooManyElements { count });
    }
    let payload_len = count
        .checked_mul(width)
        .ok_or(VectorError::SizeOverflow { count, width })?;
    let total_len = payload_len
        .checked_add(VectorHeader::LEN)
        .ok_or(VectorError::SizeOverflow { count, width })?;

    let header = VectorHeader::new(kind, count as u32);
    tracing::trace!(header = %header.summary(), "encoding vector header");

    let mut out = try_alloc(total_len)?;
    out.extend_from_slice(&encode_header_be(&header));
    out.extend_from_slice(vector.as_bytes());

    debug_assert_eq!(out.len(), total_len, "encoding wrote incorrect length");
    tracing::debug!(kind = %kind, count, bytes = total_len, "encoded vector blob");

    Ok(BinaryBlob::new(Bytes::from(out)))
}

/// Encode with an untyped kind tag.
///
/// Same contract as `encode`, with the tag checked against the registry
/// after the empty check and before the width check.
pub fn encode_raw(vector: &NumericVector, raw_kind: u32) -> Result<BinaryBlob, VectorError> {
    if vector.is_empty() {
        return Err(VectorError::EmptyVector);
    }
    let kind = ElementKind::try_from_raw(raw_kind)?;
    encode(vector, kind)
}
