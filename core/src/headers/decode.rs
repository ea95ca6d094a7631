//! headers/decode.rs
//!
//! Header decoding.
//!
//! - Reads the first 16 bytes of a blob as four big-endian u32 fields.
//! - Field order must match `encode.rs` exactly.
//! - Returns the raw header; callers decide how much to validate.

use byteorder::{BigEndian, ByteOrder};

use crate::headers::types::VectorHeader;
use crate::types::VectorError;

/// Deserialize the 16-byte big-endian header at the start of `buf`.
///
/// Trailing bytes (the payload) are ignored.
///
/// # Errors
/// - `BufferTooShort` if `buf` is shorter than the header.
#[inline]
pub fn decode_header_be(buf: &[u8]) -> Result<VectorHeader, VectorError> {
    if buf.len() < VectorHeader::LEN {
        return Err(VectorError::BufferTooShort { have: buf.len(), need: VectorHeader::LEN });
    }

    Ok(VectorHeader {
        magic: BigEndian::read_u32(&buf[0..4]),          // 0..4   magic
        version: BigEndian::read_u32(&buf[4..8]),        // 4..8   version
        element_count: BigEndian::read_u32(&buf[8..12]), // 8..12  element count
        element_kind: BigEndian::read_u32(&buf[12..16]), // 12..16 element kind
    })
}
