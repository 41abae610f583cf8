//! headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Reads the 56-byte minimal header, then the hardware range when declared.
//! - Field order must match `encode.rs` exactly.
//! - Only a short buffer or a wrong magic is fatal; everything else is tolerated.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{HEADER_STRING_LEN, OTA_HEADER_LEN_EXTENDED, OTA_MAGIC};
use crate::headers::types::{EncodingMode, FieldControl, HardwareVersions, OtaHeader};
use crate::types::{OtaError, Result};

/// Deserialize a little-endian OTA header from the start of `buf`.
///
/// # Returns
/// - `Ok(OtaHeader)` when the magic matches.
/// - `Err(OtaError::TooShort)` if fewer than 56 bytes are available.
/// - `Err(OtaError::InvalidMagic)` if the first four bytes are not `0x0BEEF11E`.
///
/// # Notes
/// - The hardware version range is read only when the field control bit is
///   set, `header_length >= 60` and the buffer holds 60 bytes.
/// - `buf` may extend past the header; trailing bytes are ignored here.
pub fn decode_header_le(buf: &[u8]) -> Result<OtaHeader> {
    if buf.len() < OtaHeader::LEN_MIN {
        return Err(OtaError::TooShort { have: buf.len(), need: OtaHeader::LEN_MIN });
    }

    // Cursor helpers
    let mut i = 0usize;
    #[inline] fn get_u16(buf: &[u8], i: &mut usize) -> u16 { let v = LittleEndian::read_u16(&buf[*i..*i + 2]); *i += 2; v }
    #[inline] fn get_u32(buf: &[u8], i: &mut usize) -> u32 { let v = LittleEndian::read_u32(&buf[*i..*i + 4]); *i += 4; v }
    #[inline] fn get_bytes<const N: usize>(buf: &[u8], i: &mut usize) -> [u8; N] {
        let mut dst = [0u8; N]; dst.copy_from_slice(&buf[*i..*i + N]); *i += N; dst
    }

    let magic = get_u32(buf, &mut i);                                   // 0..4
    if magic != OTA_MAGIC {
        return Err(OtaError::InvalidMagic { have: magic, need: OTA_MAGIC });
    }

    let header_version    = get_u16(buf, &mut i);                       // 4..6
    let header_length     = get_u16(buf, &mut i);                       // 6..8
    let field_control     = FieldControl::from_bits_retain(get_u16(buf, &mut i)); // 8..10
    let manufacturer_code = get_u16(buf, &mut i);                       // 10..12
    let image_type        = get_u16(buf, &mut i);                       // 12..14
    let file_version      = get_u32(buf, &mut i);                       // 14..18
    let stack_version     = get_u16(buf, &mut i);                       // 18..20
    let header_string     = get_bytes::<HEADER_STRING_LEN>(buf, &mut i); // 20..52
    let total_image_size  = get_u32(buf, &mut i);                       // 52..56

    debug_assert_eq!(i, OtaHeader::LEN_MIN);

    let hardware_versions = if field_control.contains(FieldControl::HARDWARE_VERSIONS)
        && usize::from(header_length) >= OTA_HEADER_LEN_EXTENDED
        && buf.len() >= OTA_HEADER_LEN_EXTENDED
    {
        let min = get_u16(buf, &mut i);                                 // 56..58
        let max = get_u16(buf, &mut i);                                 // 58..60
        Some(HardwareVersions { min, max })
    } else {
        None
    };

    Ok(OtaHeader {
        magic,
        header_version,
        header_length,
        field_control,
        manufacturer_code,
        image_type,
        file_version,
        stack_version,
        header_string,
        total_image_size,
        hardware_versions,
    })
}

/// Guess which size convention wrote `total_image_size`.
///
/// - Whole file size → `VendorCompatible` (checked first).
/// - File size minus `header_length` → `SpecCompliant`.
/// - Anything else → `None` (non-standard; not an error).
///
/// A `header_length` larger than the file never matches the spec-compliant
/// expectation.
pub fn detect_size_convention(header: &OtaHeader, file_size: usize) -> Option<EncodingMode> {
    let declared = header.total_image_size as u64;

    if declared == file_size as u64 {
        return Some(EncodingMode::VendorCompatible);
    }

    match file_size.checked_sub(usize::from(header.header_length)) {
        Some(after_header) if declared == after_header as u64 => Some(EncodingMode::SpecCompliant),
        _ => None,
    }
}
