//! image.rs
//! Whole-file encode/decode entry points.
//!
//! Design notes:
//! - `encode` always emits the extended header and exactly one Upgrade Image record.
//! - `decode` borrows the input; sub-elements are scanned lazily on demand.
//! - Irregularities found while decoding are `ImageWarning`s, never errors.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::constants::{tag_ids, OTA_HEADER_LEN_EXTENDED, SUB_ELEMENT_HEADER_LEN};
use crate::digest::sha512_hex;
use crate::headers::{decode_header_le, detect_size_convention, encode_header_le};
use crate::headers::{EncodingMode, OtaHeader, OtaImageParams};
use crate::subelements::{encode_sub_element_header, SubElementIter};
use crate::types::{OtaError, Result};

/// Output of `encode`: the file bytes and the header written into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub header: OtaHeader,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// SHA-512 of the complete file, hex encoded.
    pub fn sha512_hex(&self) -> String {
        sha512_hex(&self.bytes)
    }
}

/// Build an OTA file around `firmware`.
///
/// Layout: 60-byte header ‖ Upgrade Image record header ‖ firmware.
///
/// # Errors
/// `InputTooLarge` if `firmware` overflows the 32-bit length or size fields
/// for the chosen mode. Any byte content is accepted.
pub fn encode(params: &OtaImageParams, firmware: &[u8]) -> Result<EncodedImage> {
    let header = OtaHeader::for_firmware(params, firmware.len())?;
    let payload_len = u32::try_from(firmware.len()).map_err(|_| OtaError::InputTooLarge {
        len: firmware.len(),
        max: params.mode.max_firmware_len(),
    })?;

    let mut bytes =
        Vec::with_capacity(OTA_HEADER_LEN_EXTENDED + SUB_ELEMENT_HEADER_LEN + firmware.len());
    bytes.extend_from_slice(&encode_header_le(&header));
    bytes.extend_from_slice(&encode_sub_element_header(tag_ids::UPGRADE_IMAGE, payload_len));
    bytes.extend_from_slice(firmware);

    Ok(EncodedImage { header, bytes })
}

/// Parse an OTA file held in memory.
///
/// # Errors
/// - `TooShort` under 56 bytes.
/// - `InvalidMagic` on a magic mismatch.
pub fn decode(data: &[u8]) -> Result<ParsedImage<'_>> {
    let header = decode_header_le(data)?;
    let detected_mode = detect_size_convention(&header, data.len());

    Ok(ParsedImage {
        header,
        detected_mode,
        data,
    })
}

/// Result of `decode`.
#[derive(Debug, Clone)]
pub struct ParsedImage<'a> {
    pub header: OtaHeader,
    /// `None` when `total_image_size` matches neither convention.
    pub detected_mode: Option<EncodingMode>,
    data: &'a [u8],
}

impl<'a> ParsedImage<'a> {
    /// The buffer this image was parsed from.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn file_size(&self) -> usize {
        self.data.len()
    }

    /// Fresh scanner over the records starting at `header_length`.
    pub fn sub_elements(&self) -> SubElementIter<'a> {
        SubElementIter::new(self.data, usize::from(self.header.header_length))
    }

    /// SHA-512 of the complete file, hex encoded.
    pub fn sha512_hex(&self) -> String {
        sha512_hex(self.data)
    }

    /// Every non-fatal irregularity, in file order.
    pub fn warnings(&self) -> Vec<ImageWarning> {
        let mut out = Vec::new();
        let h = &self.header;

        if self.detected_mode.is_none() {
            out.push(ImageWarning::NonStandardImageSize {
                declared: h.total_image_size,
                file_size: self.file_size(),
                header_length: h.header_length,
            });
        }

        if h.has_hardware_versions_flag() && h.hardware_versions.is_none() {
            out.push(ImageWarning::MissingHardwareVersions {
                header_length: h.header_length,
                file_size: self.file_size(),
            });
        }

        let mut scan = self.sub_elements();
        for el in scan.by_ref() {
            if el.name().is_none() {
                out.push(ImageWarning::UnknownTag {
                    offset: el.offset,
                    tag_id: el.tag_id,
                });
            }
            if el.is_truncated() {
                out.push(ImageWarning::TruncatedSubElement {
                    offset: el.offset,
                    tag_id: el.tag_id,
                    declared: el.length,
                    available: el.payload.len(),
                });
            }
        }

        let rest = scan.remainder();
        if !rest.is_empty() {
            out.push(ImageWarning::TrailingBytes {
                offset: scan.cursor(),
                count: rest.len(),
            });
        }

        out
    }
}

/// Non-fatal finding while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageWarning {
    /// `total_image_size` matches neither size convention.
    NonStandardImageSize { declared: u32, file_size: usize, header_length: u16 },

    /// Hardware version bit set but the range could not be read.
    MissingHardwareVersions { header_length: u16, file_size: usize },

    /// Tag id outside the known registry.
    UnknownTag { offset: usize, tag_id: u16 },

    /// Declared length runs past the end of the file; scanning stopped here.
    TruncatedSubElement { offset: usize, tag_id: u16, declared: u32, available: usize },

    /// Leftover bytes too short to hold a sub-element header.
    TrailingBytes { offset: usize, count: usize },
}

impl fmt::Display for ImageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ImageWarning::*;
        match self {
            NonStandardImageSize { declared, file_size, header_length } =>
                write!(f, "total image size {} matches neither {} (whole file) nor {} (after header)",
                    declared, file_size, file_size.saturating_sub(usize::from(*header_length))),
            MissingHardwareVersions { header_length, file_size } =>
                write!(f, "hardware version bit set but range absent (header length {}, file size {})",
                    header_length, file_size),
            UnknownTag { offset, tag_id } =>
                write!(f, "unknown sub-element tag 0x{:04X} at offset {}", tag_id, offset),
            TruncatedSubElement { offset, tag_id, declared, available } =>
                write!(f, "sub-element 0x{:04X} at offset {} declares {} bytes, only {} present",
                    tag_id, offset, declared, available),
            TrailingBytes { offset, count } =>
                write!(f, "{} trailing byte(s) at offset {} ignored", count, offset),
        }
    }
}
