use crate::constants::HEADER_STRING_LEN;

/// Printable form of a raw byte field: quoted when ASCII, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Build the fixed 32-byte header string field.
///
/// - Takes the first 32 bytes of the UTF-8 encoding, even if that splits a
///   multi-byte character.
/// - Right-pads with `pad`.
pub fn pad_header_string(text: &str, pad: u8) -> [u8; HEADER_STRING_LEN] {
    let mut out = [pad; HEADER_STRING_LEN];
    let raw = text.as_bytes();
    let n = raw.len().min(HEADER_STRING_LEN);
    out[..n].copy_from_slice(&raw[..n]);
    out
}

/// Recover the label from a raw header string field.
///
/// Trailing 0x00 and 0xFF are both stripped since either fill convention may
/// have written the file. Interior bytes are kept. Invalid UTF-8 sequences
/// are dropped.
pub fn clean_header_string(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != 0x00 && b != 0xFF)
        .map_or(0, |i| i + 1);

    let mut out = String::with_capacity(end);
    for chunk in raw[..end].utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
