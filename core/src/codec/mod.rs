//! Vector blob codec.
//!
//! Responsibilities:
//! - Encode a `NumericVector` + `ElementKind` into a `BinaryBlob`
//! - Decode a blob with strict, all-or-nothing validation
//!
//! Non-responsibilities:
//! - Similarity computation
//! - Numeric validation (NaN, ranges)
//! - Compression
//!
//! Byte order: header fields are big-endian, the payload is written in the
//! producer's native order and carries no marker. Blobs do not decode
//! correctly across hosts of different endianness. Changing this would change
//! the wire format, so it is left as is.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::VectorView;
pub use encode::{encode, encode_raw};
pub use decode::{decode, decode_bytes, decode_view, peek_header};
