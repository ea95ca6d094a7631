use crate::headers::VectorHeader;
use crate::registry::ElementKind;
use crate::types::VectorError;
use crate::vector::{try_alloc, NumericVector};

/// Borrowed view of a validated blob.
///
/// Only built by `decode_view`: the header has passed every check and the
/// payload slice has exactly `element_count * width(kind)` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorView<'a> {
    header: VectorHeader,
    kind: ElementKind,
    payload: &'a [u8],
}

impl<'a> VectorView<'a> {
    /// Bind a header to its payload.
    ///
    /// The kind comes from the header, never from the caller, and the payload
    /// must be exactly as long as the header says.
    pub(crate) fn new(header: VectorHeader, payload: &'a [u8]) -> Result<Self, VectorError> {
        let kind = header.validate()?;
        if header.element_count == 0 {
            return Err(VectorError::EmptyVector);
        }
        let expected = header.payload_len()?;
        if payload.len() != expected {
            return Err(VectorError::LengthMismatch { expected, actual: payload.len() });
        }
        Ok(Self { header, kind, payload })
    }

    #[inline]
    pub fn header(&self) -> &VectorHeader {
        &self.header
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.header.element_count as usize
    }

    /// Copy the payload into an owned vector.
    pub fn to_owned_vector(&self) -> Result<NumericVector, VectorError> {
        let mut data = try_alloc(self.payload.len())?;
        data.extend_from_slice(self.payload);
        NumericVector::from_raw_parts(self.kind.width(), data)
    }
}
