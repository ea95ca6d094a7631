use thiserror::Error;

use crate::registry::ElementKind;
use crate::utils::{enum_name_or_hex, fmt_magic};

/// Coarse error taxonomy exposed to callers.
///
/// - `InvalidArgument`: the supplied vector or blob is malformed. Not retryable.
/// - `ResourceExhausted`: the output buffer could not be allocated. A higher
///   layer may retry with backoff; the codec never does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    ResourceExhausted,
}

/// Unified codec error covering vector construction, encode and decode.
/// - Every variant except `ResourceExhausted` is an `InvalidArgument`.
/// - Messages aim to be stable and contextual for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Vector (or decoded header) carries zero elements.
    #[error("vector must contain at least one element")]
    EmptyVector,

    /// Tag outside the element kind registry.
    #[error("unknown element kind: {}", kind_name(.raw))]
    UnknownElementKind { raw: u32 },

    /// Element width not present in the registry.
    #[error("invalid element width: {width} bytes")]
    InvalidElementWidth { width: usize },

    /// Vector width does not match the declared kind (or requested type).
    #[error("element width mismatch: vector has {have} bytes, kind needs {need}")]
    WidthMismatch { have: usize, need: usize },

    /// Payload length is not a multiple of the element width.
    #[error("payload of {len} bytes is not a multiple of element width {width}")]
    RaggedPayload { len: usize, width: usize },

    /// Element count does not fit the 32-bit header field.
    #[error("too many elements: {count} > {}", u32::MAX)]
    TooManyElements { count: usize },

    /// `count * width + header` overflowed.
    #[error("blob size overflow: {count} elements of {width} bytes")]
    SizeOverflow { count: usize, width: usize },

    /// Buffer too short to contain a header.
    #[error("vector blob too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Not a recognized vector blob.
    #[error("invalid magic: expected {}, got {}", magic_name(.need), magic_name(.have))]
    InvalidMagic { have: u32, need: u32 },

    /// Unsupported format revision.
    #[error("unsupported version: {have} (supported: {need})")]
    UnsupportedVersion { have: u32, need: u32 },

    /// Blob length disagrees with its own header.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Allocation of the output buffer failed.
    #[error("failed to allocate {bytes} bytes for vector buffer")]
    ResourceExhausted { bytes: usize },
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
            _ => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

fn kind_name(raw: &u32) -> String {
    enum_name_or_hex::<ElementKind>(*raw)
}

fn magic_name(magic: &u32) -> String {
    fmt_magic(*magic)
}
