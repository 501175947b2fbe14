//! Fixed-width element helpers used by the message codecs

use std::io::{Read, Write};

use super::WireResult;

/// Read a little-endian `u64`, consuming exactly 8 bytes.
///
/// A short read surfaces as `ErrorKind::UnexpectedEof` from the stream.
pub fn read_u64_le(r: &mut dyn Read) -> WireResult<u64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Write `value` as a little-endian `u64`.
///
/// A sink that stops accepting bytes surfaces as `ErrorKind::WriteZero`.
pub fn write_u64_le(w: &mut dyn Write, value: u64) -> WireResult<()> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Parse a decimal or `0x`-prefixed hex integer literal.
///
/// Signs, separators and empty digit strings are rejected.
pub(crate) fn parse_u64_literal(s: &str) -> Option<u64> {
    let s = s.trim();
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}
