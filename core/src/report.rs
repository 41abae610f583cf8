//! report.rs
//!
//! Serializable snapshot of a parsed image.
//!
//! Design notes:
//! - `ImageReport` owns all of its data so it outlives the parsed buffer.
//! - Raw numeric fields are kept as numbers; the CLI decides on hex or decimal.
//! - Sub-elements are listed exactly as the scanner yields them.

use serde::{Deserialize, Serialize};

use crate::headers::{EncodingMode, HardwareVersions};
use crate::image::{ImageWarning, ParsedImage};
use crate::subelements::SubElement;

/// One scanned sub-element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubElementReport {
    pub offset: usize,
    pub tag_id: u16,
    pub name: String,
    pub length: u32,
    /// Payload bytes actually present in the file.
    pub available: usize,
    pub truncated: bool,
}

impl From<&SubElement<'_>> for SubElementReport {
    fn from(el: &SubElement<'_>) -> Self {
        Self {
            offset: el.offset,
            tag_id: el.tag_id,
            name: el.describe(),
            length: el.length,
            available: el.payload.len(),
            truncated: el.is_truncated(),
        }
    }
}

/// Everything `parse` reports about a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReport {
    pub magic: u32,
    pub header_version: u16,
    pub header_length: u16,
    pub field_control: u16,
    pub manufacturer_code: u16,
    pub image_type: u16,
    pub file_version: u32,
    pub stack_version: u16,
    pub header_string: String,
    pub total_image_size: u32,
    pub hardware_versions: Option<HardwareVersions>,
    pub file_size: usize,
    /// `None` means non-standard.
    pub detected_mode: Option<EncodingMode>,
    pub sha512: String,
    pub sub_elements: Vec<SubElementReport>,
    pub warnings: Vec<ImageWarning>,
}

impl ImageReport {
    pub fn from_image(image: &ParsedImage<'_>) -> Self {
        let h = &image.header;

        Self {
            magic: h.magic,
            header_version: h.header_version,
            header_length: h.header_length,
            field_control: h.field_control.bits(),
            manufacturer_code: h.manufacturer_code,
            image_type: h.image_type,
            file_version: h.file_version,
            stack_version: h.stack_version,
            header_string: h.header_string_text(),
            total_image_size: h.total_image_size,
            hardware_versions: h.hardware_versions,
            file_size: image.file_size(),
            detected_mode: image.detected_mode,
            sha512: image.sha512_hex(),
            sub_elements: image.sub_elements().map(|el| SubElementReport::from(&el)).collect(),
            warnings: image.warnings(),
        }
    }
}
