//! File system utility helpers (BOM-aware readers, etc.)
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;

/// Read a source file as text.
///
/// A byte order mark selects the encoding (UTF-8, UTF-16LE/BE) and is
/// stripped; without one the bytes are taken as UTF-8 with invalid
/// sequences replaced.
pub fn read_source_file(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_source(&bytes))
}

/// Decode raw file bytes the way [`read_source_file`] does.
pub fn decode_source(bytes: &[u8]) -> String {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        tracing::debug!("replaced malformed {} sequences while decoding", encoding.name());
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_source(b"var a;"), "var a;");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        assert_eq!(decode_source(b"\xEF\xBB\xBFvar a;"), "var a;");
    }

    #[test]
    fn test_decode_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "x=1".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_source(&bytes), "x=1");
    }
}
