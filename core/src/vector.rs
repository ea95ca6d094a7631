//! vector.rs
//! In-memory vector and blob value types.
//!
//! - `NumericVector` owns a contiguous payload of fixed-width elements.
//!   It can never be empty, and its width is always a registry width.
//! - `BinaryBlob` owns the encoded bytes (`bytes::Bytes`) and is what gets
//!   handed to storage.

use bytes::Bytes;

use crate::constants::MAX_ELEMENT_COUNT;
use crate::constants::widths::{WIDTH_32, WIDTH_64};
use crate::registry::Element;
use crate::types::VectorError;

/// Allocate an empty buffer with exactly `len` bytes of capacity.
/// Allocation failure surfaces as `ResourceExhausted` instead of aborting.
pub(crate) fn try_alloc(len: usize) -> Result<Vec<u8>, VectorError> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        tracing::error!(bytes = len, "vector buffer allocation failed");
        return Err(VectorError::ResourceExhausted { bytes: len });
    }
    Ok(buf)
}

/// Ordered, homogeneous sequence of fixed-width elements.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NumericVector {
    element_width: usize,
    data: Vec<u8>,
}

impl NumericVector {
    /// Build a vector from typed values (copied in native byte order).
    pub fn from_slice<T: Element>(values: &[T]) -> Result<Self, VectorError> {
        if values.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        if values.len() > MAX_ELEMENT_COUNT {
            return Err(VectorError::TooManyElements { count: values.len() });
        }

        let raw: &[u8] = bytemuck::cast_slice(values);
        let mut data = try_alloc(raw.len())?;
        data.extend_from_slice(raw);

        Ok(Self { element_width: T::KIND.width(), data })
    }

    pub fn from_f32(values: &[f32]) -> Result<Self, VectorError> {
        Self::from_slice(values)
    }

    pub fn from_f64(values: &[f64]) -> Result<Self, VectorError> {
        Self::from_slice(values)
    }

    pub fn from_i32(values: &[i32]) -> Result<Self, VectorError> {
        Self::from_slice(values)
    }

    pub fn from_i64(values: &[i64]) -> Result<Self, VectorError> {
        Self::from_slice(values)
    }

    /// Wrap an already laid out payload.
    ///
    /// # Errors
    /// - `InvalidElementWidth` if `element_width` is not 4 or 8.
    /// - `EmptyVector` if `data` is empty.
    /// - `RaggedPayload` if `data.len()` is not a multiple of the width.
    /// - `TooManyElements` if the count does not fit in 32 bits.
    pub fn from_raw_parts(element_width: usize, data: Vec<u8>) -> Result<Self, VectorError> {
        match element_width {
            WIDTH_32 | WIDTH_64 => {}
            width => return Err(VectorError::InvalidElementWidth { width }),
        }
        if data.is_empty() {
            return Err(VectorError::EmptyVector);
        }
        if data.len() % element_width != 0 {
            return Err(VectorError::RaggedPayload { len: data.len(), width: element_width });
        }
        let count = data.len() / element_width;
        if count > MAX_ELEMENT_COUNT {
            return Err(VectorError::TooManyElements { count });
        }

        Ok(Self { element_width, data })
    }

    #[inline]
    pub fn element_width(&self) -> usize {
        self.element_width
    }

    /// Number of elements (always >= 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.element_width
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Payload bytes in native element byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Raw bytes of element `index`.
    pub fn element(&self, index: usize) -> Option<&[u8]> {
        let start = index.checked_mul(self.element_width)?;
        let end = start.checked_add(self.element_width)?;
        self.data.get(start..end)
    }

    pub fn iter_elements(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.element_width)
    }

    /// Read the payload back as typed values.
    ///
    /// Fails with `WidthMismatch` when `T` does not have the vector's width.
    /// Only the width is bound here; the kind recorded in a blob header is the
    /// authority on how the bytes should be interpreted.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, VectorError> {
        let need = T::KIND.width();
        if self.element_width != need {
            return Err(VectorError::WidthMismatch { have: self.element_width, need });
        }
        // Payload may be unaligned for T (e.g. copied out of a blob).
        Ok(self
            .data
            .chunks_exact(need)
            .map(bytemuck::pod_read_unaligned::<T>)
            .collect())
    }
}

impl std::fmt::Debug for NumericVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericVector")
            .field("element_width", &self.element_width)
            .field("len", &self.len())
            .finish()
    }
}

/// Owned encoded vector blob.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryBlob {
    bytes: Bytes,
}

impl BinaryBlob {
    pub fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl From<Vec<u8>> for BinaryBlob {
    fn from(v: Vec<u8>) -> Self {
        Self { bytes: Bytes::from(v) }
    }
}

impl From<Bytes> for BinaryBlob {
    fn from(bytes: Bytes) -> Self {
        Self { bytes }
    }
}

impl From<BinaryBlob> for Bytes {
    fn from(blob: BinaryBlob) -> Self {
        blob.bytes
    }
}

impl AsRef<[u8]> for BinaryBlob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
