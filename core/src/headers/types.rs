//! headers/types.rs
//! Core OTA header struct, encoding mode and encode parameters.
//!
//! Format notes:
//! - Little-endian for every multi-byte field, no padding between fields.
//! - 56 bytes up to `total_image_size`; 60 when the hardware version range follows.
//! - `header_string` is stored raw; use `header_string_text()` for the label.

use serde::{Deserialize, Serialize};

use crate::constants::{field_control, pad};
use crate::constants::{
    DEFAULT_HEADER_STRING, DEFAULT_MAX_HARDWARE_VERSION, DEFAULT_MIN_HARDWARE_VERSION,
    DEFAULT_STACK_VERSION, HEADER_STRING_LEN, OTA_HEADER_LEN_EXTENDED, OTA_HEADER_LEN_MIN,
    OTA_HEADER_VERSION, OTA_MAGIC, SUB_ELEMENT_HEADER_LEN,
};
use crate::types::{OtaError, Result};
use crate::utils::{clean_header_string, pad_header_string};

bitflags::bitflags! {
    /// Field control bits. Unknown bits are retained as read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldControl: u16 {
        /// Security credential version byte present (not emitted by this encoder)
        const SECURITY_CREDENTIAL_VERSION = field_control::SECURITY_CREDENTIAL_VERSION;

        /// Image targets a single device
        const DEVICE_SPECIFIC_FILE = field_control::DEVICE_SPECIFIC_FILE;

        /// Minimum/maximum hardware version follow `total_image_size`
        const HARDWARE_VERSIONS = field_control::HARDWARE_VERSIONS;
    }
}

/// Size-accounting convention for `total_image_size` and header string fill.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// `total_image_size` counts everything after the header; pad 0xFF.
    #[default]
    SpecCompliant,
    /// `total_image_size` counts the whole file; pad 0x00 (Espressif tooling).
    VendorCompatible,
}

impl EncodingMode {
    /// Fill byte for the unused tail of the header string.
    pub const fn pad_byte(self) -> u8 {
        match self {
            EncodingMode::SpecCompliant => pad::SPEC_COMPLIANT,
            EncodingMode::VendorCompatible => pad::VENDOR_COMPATIBLE,
        }
    }

    /// Header string used when the caller supplies none.
    pub const fn default_header_string(self) -> &'static str {
        match self {
            EncodingMode::SpecCompliant | EncodingMode::VendorCompatible => DEFAULT_HEADER_STRING,
        }
    }

    /// Bytes counted by `total_image_size` on top of the firmware itself.
    pub const fn size_overhead(self) -> usize {
        match self {
            EncodingMode::SpecCompliant => SUB_ELEMENT_HEADER_LEN,
            EncodingMode::VendorCompatible => OTA_HEADER_LEN_EXTENDED + SUB_ELEMENT_HEADER_LEN,
        }
    }

    /// Largest firmware that keeps every 32-bit size field in range.
    pub const fn max_firmware_len(self) -> usize {
        u32::MAX as usize - self.size_overhead()
    }

    /// `total_image_size` for a firmware of `firmware_len` bytes.
    pub fn total_image_size(self, firmware_len: usize) -> Result<u32> {
        u32::try_from(firmware_len)
            .ok()
            .and_then(|n| n.checked_add(self.size_overhead() as u32))
            .ok_or(OtaError::InputTooLarge {
                len: firmware_len,
                max: self.max_firmware_len(),
            })
    }

    /// Human-readable name, as shown by the CLI.
    pub const fn label(self) -> &'static str {
        match self {
            EncodingMode::SpecCompliant => "Zigbee spec compliant",
            EncodingMode::VendorCompatible => "Espressif-compatible",
        }
    }
}

/// Inclusive hardware version range from the extended header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareVersions {
    pub min: u16,
    pub max: u16,
}

/// Encode parameters.
///
/// `Default` mirrors the command-line defaults; manufacturer code, image type
/// and file version default to zero and are expected to be set by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtaImageParams {
    pub manufacturer_code: u16,
    pub image_type: u16,
    pub file_version: u32,
    pub stack_version: u16,
    pub min_hardware_version: u16,
    pub max_hardware_version: u16,
    /// `None` falls back to the mode's default label.
    pub header_string: Option<String>,
    pub mode: EncodingMode,
}

impl Default for OtaImageParams {
    fn default() -> Self {
        Self {
            manufacturer_code: 0,
            image_type: 0,
            file_version: 0,
            stack_version: DEFAULT_STACK_VERSION,
            min_hardware_version: DEFAULT_MIN_HARDWARE_VERSION,
            max_hardware_version: DEFAULT_MAX_HARDWARE_VERSION,
            header_string: None,
            mode: EncodingMode::default(),
        }
    }
}

impl OtaImageParams {
    /// Label that will be written, before truncation and padding.
    pub fn header_string_or_default(&self) -> &str {
        self.header_string
            .as_deref()
            .unwrap_or_else(|| self.mode.default_header_string())
    }
}

/// OTA upgrade image header.
/// - `hardware_versions` is `Some` only when the header carries the range.
/// - `header_length` is written verbatim; `OtaHeader::for_firmware` keeps it
///   consistent with `hardware_versions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtaHeader {
    pub magic: u32,                              // 0x0BEEF11E
    pub header_version: u16,                     // 0x0100
    pub header_length: u16,                      // 56 or 60
    pub field_control: FieldControl,             // optional section bits
    pub manufacturer_code: u16,
    pub image_type: u16,
    pub file_version: u32,
    pub stack_version: u16,
    pub header_string: [u8; HEADER_STRING_LEN],  // raw, padded
    pub total_image_size: u32,                   // mode dependent
    pub hardware_versions: Option<HardwareVersions>,
}

impl OtaHeader {
    pub const LEN_MIN: usize = 4 // magic
        + 2                      // header_version
        + 2                      // header_length
        + 2                      // field_control
        + 2                      // manufacturer_code
        + 2                      // image_type
        + 4                      // file_version
        + 2                      // stack_version
        + HEADER_STRING_LEN      // header_string
        + 4;                     // total_image_size

    pub const LEN_EXTENDED: usize = OtaHeader::LEN_MIN
        + 2                      // min_hardware_version
        + 2;                     // max_hardware_version

    /// Header for a firmware image of `firmware_len` bytes.
    ///
    /// Always the extended layout with the hardware version bit set.
    ///
    /// # Errors
    /// `InputTooLarge` when `total_image_size` would not fit 32 bits.
    pub fn for_firmware(params: &OtaImageParams, firmware_len: usize) -> Result<Self> {
        let total_image_size = params.mode.total_image_size(firmware_len)?;

        Ok(Self {
            magic: OTA_MAGIC,
            header_version: OTA_HEADER_VERSION,
            header_length: OTA_HEADER_LEN_EXTENDED as u16,
            field_control: FieldControl::HARDWARE_VERSIONS,
            manufacturer_code: params.manufacturer_code,
            image_type: params.image_type,
            file_version: params.file_version,
            stack_version: params.stack_version,
            header_string: pad_header_string(
                params.header_string_or_default(),
                params.mode.pad_byte(),
            ),
            total_image_size,
            hardware_versions: Some(HardwareVersions {
                min: params.min_hardware_version,
                max: params.max_hardware_version,
            }),
        })
    }

    /// Number of bytes `encode_header_le` produces for this header.
    pub fn encoded_len(&self) -> usize {
        if self.hardware_versions.is_some() {
            Self::LEN_EXTENDED
        } else {
            Self::LEN_MIN
        }
    }

    /// Header declares more than the minimal 56 bytes.
    pub fn is_extended(&self) -> bool {
        usize::from(self.header_length) > OTA_HEADER_LEN_MIN
    }

    /// Field control advertises a hardware version range.
    pub fn has_hardware_versions_flag(&self) -> bool {
        self.field_control.contains(FieldControl::HARDWARE_VERSIONS)
    }

    /// Header string with fill bytes stripped.
    pub fn header_string_text(&self) -> String {
        clean_header_string(&self.header_string)
    }
}
