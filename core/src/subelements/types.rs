use num_enum::TryFromPrimitive;

use crate::constants::{tag_ids, SUB_ELEMENT_HEADER_LEN};

/// Known sub-element tags.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum SubElementTag {
    UpgradeImage     = tag_ids::UPGRADE_IMAGE,
    EcdsaSignature   = tag_ids::ECDSA_SIGNATURE,
    EcdsaCertificate = tag_ids::ECDSA_CERTIFICATE,
}

/// Display names by tag id. New tags are added here and in `SubElementTag`.
pub const TAG_NAMES: &[(u16, &str)] = &[
    (tag_ids::UPGRADE_IMAGE,     "Upgrade Image"),
    (tag_ids::ECDSA_SIGNATURE,   "ECDSA Signature"),
    (tag_ids::ECDSA_CERTIFICATE, "ECDSA Certificate"),
];

/// Name of a known tag id.
pub fn tag_name(tag_id: u16) -> Option<&'static str> {
    TAG_NAMES
        .iter()
        .find(|(id, _)| *id == tag_id)
        .map(|(_, name)| *name)
}

/// Name of any tag id; unknown ids render as `Unknown (0xNNNN)`.
pub fn describe_tag(tag_id: u16) -> String {
    match tag_name(tag_id) {
        Some(name) => name.to_string(),
        None => format!("Unknown (0x{:04X})", tag_id),
    }
}

/// One tagged record following the header.
///
/// `payload` borrows from the scanned buffer and is clipped to its end, so it
/// may be shorter than `length` for a truncated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubElement<'a> {
    /// Byte offset of the tag id within the file.
    pub offset: usize,
    pub tag_id: u16,
    /// Declared payload length.
    pub length: u32,
    pub payload: &'a [u8],
}

impl SubElement<'_> {
    pub const HEADER_LEN: usize = 2 // tag_id
        + 4;                        // length

    /// Typed tag, `None` for ids outside the registry.
    pub fn tag(&self) -> Option<SubElementTag> {
        SubElementTag::try_from_primitive(self.tag_id).ok()
    }

    pub fn name(&self) -> Option<&'static str> {
        tag_name(self.tag_id)
    }

    pub fn describe(&self) -> String {
        describe_tag(self.tag_id)
    }

    /// Declared length claims more bytes than the buffer holds.
    pub fn is_truncated(&self) -> bool {
        (self.payload.len() as u64) < u64::from(self.length)
    }

    /// Offset one past the declared end of this record.
    pub fn declared_end(&self) -> u64 {
        self.offset as u64 + SUB_ELEMENT_HEADER_LEN as u64 + u64::from(self.length)
    }
}
