//! headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes `OtaHeader` field by field in little-endian order.
//! - Field order must match `decode.rs` exactly.
//! - Emits 60 bytes when the hardware version range is present, 56 otherwise.

use byteorder::{ByteOrder, LittleEndian};

use crate::headers::types::OtaHeader;

/// Serialize an `OtaHeader` into its on-disk layout.
///
/// # Notes
/// - Infallible: every field already has its wire width.
/// - `header_length` is copied as-is, it is not derived from the output size.
pub fn encode_header_le(h: &OtaHeader) -> Vec<u8> {
    let mut out = vec![0u8; h.encoded_len()];
    // Write cursor index.
    let mut i = 0usize;

    fn put_u16(out: &mut [u8], i: &mut usize, v: u16) {
        LittleEndian::write_u16(&mut out[*i..*i + 2], v);
        *i += 2;
    }
    fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
        LittleEndian::write_u32(&mut out[*i..*i + 4], v);
        *i += 4;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_u32(&mut out, &mut i, h.magic);                 // 0..4   magic number
    put_u16(&mut out, &mut i, h.header_version);        // 4..6   header version
    put_u16(&mut out, &mut i, h.header_length);         // 6..8   header length
    put_u16(&mut out, &mut i, h.field_control.bits());  // 8..10  field control
    put_u16(&mut out, &mut i, h.manufacturer_code);     // 10..12 manufacturer code
    put_u16(&mut out, &mut i, h.image_type);            // 12..14 image type
    put_u32(&mut out, &mut i, h.file_version);          // 14..18 file version
    put_u16(&mut out, &mut i, h.stack_version);         // 18..20 stack version
    put_bytes(&mut out, &mut i, &h.header_string);      // 20..52 header string
    put_u32(&mut out, &mut i, h.total_image_size);      // 52..56 total image size

    if let Some(hw) = h.hardware_versions {
        put_u16(&mut out, &mut i, hw.min);              // 56..58 min hardware version
        put_u16(&mut out, &mut i, hw.max);              // 58..60 max hardware version
    }

    debug_assert_eq!(i, out.len(), "encoding wrote incorrect length");

    out
}
