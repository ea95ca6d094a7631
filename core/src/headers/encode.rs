//! headers/encode.rs
//!
//! Header encoding.
//!
//! - Serializes `VectorHeader` into a fixed 16-byte buffer in big-endian order.
//! - Field order must match `decode.rs` exactly.
//! - No validation here: the codec validates before it builds a header.

use byteorder::{BigEndian, ByteOrder};

use crate::headers::types::VectorHeader;

/// Serialize a `VectorHeader` into 16 big-endian bytes.
#[inline]
pub fn encode_header_be(h: &VectorHeader) -> [u8; VectorHeader::LEN] {
    let mut out = [0u8; VectorHeader::LEN];

    BigEndian::write_u32(&mut out[0..4], h.magic);           // 0..4   magic
    BigEndian::write_u32(&mut out[4..8], h.version);         // 4..8   version
    BigEndian::write_u32(&mut out[8..12], h.element_count);  // 8..12  element count
    BigEndian::write_u32(&mut out[12..16], h.element_kind);  // 12..16 element kind

    out
}
