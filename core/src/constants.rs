/// Magic number for the vector blob format.
/// 0x56454354 = "VECT" when written big-endian.
pub const VECTOR_MAGIC: u32 = 0x5645_4354;

/// Current (and only) supported blob format version.
/// Decoders accept this exact value, no compatibility window.
pub const VECTOR_VERSION: u32 = 0x0000_0001;

/// Fixed header size: magic + version + element_count + element_kind.
pub const HEADER_LEN: usize = 4 + 4 + 4 + 4;

/// Element count is carried in a 32-bit header field.
pub const MAX_ELEMENT_COUNT: usize = u32::MAX as usize;

/// Header integers are big-endian. The payload is NOT: elements are copied in
/// the producer's native byte order and the format records no marker for it.
/// A blob written on a little-endian host and read on a big-endian host passes
/// every structural check and yields wrong numbers.
pub const PAYLOAD_NATIVE_ENDIAN: bool = true;

/// Element kind identifiers (mirrored in the header `element_kind` field).
pub mod kind_ids {
    pub const FLOAT32: u32 = 1;
    pub const FLOAT64: u32 = 2;
    pub const INT32: u32   = 3;
    pub const INT64: u32   = 4;
}

/// Element widths in bytes.
pub mod widths {
    pub const WIDTH_32: usize = 4;
    pub const WIDTH_64: usize = 8;
}
