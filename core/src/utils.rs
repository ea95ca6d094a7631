use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a raw registry tag as its variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Render bytes as an ASCII literal when printable, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Render a big-endian u32 magic field (e.g. 0x56454354 -> b"VECT").
pub fn fmt_magic(magic: u32) -> String {
    fmt_bytes(&magic.to_be_bytes())
}
