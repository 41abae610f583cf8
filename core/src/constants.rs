/// Magic number at offset 0 of every OTA upgrade image.
pub const OTA_MAGIC: u32 = 0x0BEE_F11E;

/// Header version written by the encoder (major 0x01, minor 0x00).
pub const OTA_HEADER_VERSION: u16 = 0x0100;

/// Minimal header: everything up to and including `total_image_size`.
pub const OTA_HEADER_LEN_MIN: usize = 56;
/// Extended header: minimal header plus the hardware version range.
pub const OTA_HEADER_LEN_EXTENDED: usize = 60;

/// Length of the fixed-width header string field.
pub const HEADER_STRING_LEN: usize = 32;

/// Tag id (u16) + length (u32) preceding every sub-element payload.
pub const SUB_ELEMENT_HEADER_LEN: usize = 6;

/// Header string used when the caller does not supply one.
pub const DEFAULT_HEADER_STRING: &str = "ESP32 Zigbee OTA";

/// Defaults when the caller leaves a field unset.
pub const DEFAULT_STACK_VERSION: u16 = 0x0002;
pub const DEFAULT_MIN_HARDWARE_VERSION: u16 = 1;
pub const DEFAULT_MAX_HARDWARE_VERSION: u16 = 1;

/// Header string fill bytes.
pub mod pad {
    pub const SPEC_COMPLIANT: u8 = 0xFF;
    pub const VENDOR_COMPATIBLE: u8 = 0x00;
}

/// Sub-element tag identifiers (mirrored in `subelements::types`).
pub mod tag_ids {
    pub const UPGRADE_IMAGE: u16     = 0x0000;
    pub const ECDSA_SIGNATURE: u16   = 0x0001;
    pub const ECDSA_CERTIFICATE: u16 = 0x0002;
}

/// Field control bitmask for optional header sections.
pub mod field_control {
    pub const SECURITY_CREDENTIAL_VERSION: u16 = 0x0001;
    pub const DEVICE_SPECIFIC_FILE: u16        = 0x0002;
    pub const HARDWARE_VERSIONS: u16           = 0x0004;
}
