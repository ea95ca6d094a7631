//! headers/mod.rs
//! Fixed 16-byte vector blob header.
//!
//! Layout (all big-endian u32):
//!
//! ```text
//! [ magic (4) ][ version (4) ][ element_count (4) ][ element_kind (4) ]
//! ```

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
