//! vector-blob-core
//!
//! Pure Rust codec for self-describing ML vector blobs.
//! No FFI, no I/O, no shared state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Registry and values
pub mod registry;
pub mod vector;

// Wire format
pub mod headers;
pub mod codec;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{decode, decode_bytes, decode_view, encode, encode_raw, peek_header, VectorView};
    pub use crate::headers::VectorHeader;
    pub use crate::registry::{width_of, width_of_raw, Element, ElementKind};
    pub use crate::types::{ErrorKind, VectorError};
    pub use crate::vector::{BinaryBlob, NumericVector};
}
