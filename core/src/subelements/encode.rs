use byteorder::{ByteOrder, LittleEndian};

use crate::constants::SUB_ELEMENT_HEADER_LEN;

/// Encode a sub-element record header.
///
/// Layout:
///
/// ```text
/// [ tag_id (2) ]
/// [ length (4) ]
/// ```
///
/// The payload follows verbatim and is not part of the returned bytes.
pub fn encode_sub_element_header(tag_id: u16, length: u32) -> [u8; SUB_ELEMENT_HEADER_LEN] {
    let mut out = [0u8; SUB_ELEMENT_HEADER_LEN];
    LittleEndian::write_u16(&mut out[0..2], tag_id);
    LittleEndian::write_u32(&mut out[2..6], length);
    out
}
