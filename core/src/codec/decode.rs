use crate::headers::{decode_header_be, VectorHeader};
use crate::registry::ElementKind;
use crate::types::VectorError;
use crate::vector::{BinaryBlob, NumericVector};
use crate::codec::types::VectorView;

/// Read and validate the header of a blob without binding its length.
///
/// Runs buffer-length, magic, version and kind checks.
#[inline]
pub fn peek_header(wire: &[u8]) -> Result<VectorHeader, VectorError> {
    let header = decode_header_be(wire)?;
    header.validate()?;
    Ok(header)
}

/// Validate a blob and borrow its payload.
///
/// Checks, in order:
/// 1. at least 16 bytes
/// 2. magic
/// 3. version (exact match)
/// 4. kind tag is registered
/// 5. element count is non-zero
/// 6. `wire.len() == 16 + count * width(kind)`
pub fn decode_view(wire: &[u8]) -> Result<VectorView<'_>, VectorError> {
    let header = decode_header_be(wire)?;
    header.validate()?;

    if header.element_count == 0 {
        return Err(VectorError::EmptyVector);
    }

    let expected = header.blob_len()?;
    if wire.len() != expected {
        return Err(VectorError::LengthMismatch { expected, actual: wire.len() });
    }

    tracing::trace!(header = %header.summary(), "decoded vector header");

    VectorView::new(header, &wire[VectorHeader::LEN..])
}

/// Decode a raw byte slice into an owned vector and its recorded kind.
pub fn decode_bytes(wire: &[u8]) -> Result<(NumericVector, ElementKind), VectorError> {
    let view = decode_view(wire)?;
    let vector = view.to_owned_vector()?;

    tracing::debug!(kind = %view.kind(), count = vector.len(), bytes = wire.len(), "decoded vector blob");

    Ok((vector, view.kind()))
}

/// Decode a blob into an owned vector and the kind recorded in its header.
///
/// All-or-nothing: nothing is returned unless every check passes.
#[inline]
pub fn decode(blob: &BinaryBlob) -> Result<(NumericVector, ElementKind), VectorError> {
    decode_bytes(blob.as_bytes())
}
