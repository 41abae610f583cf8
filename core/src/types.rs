use thiserror::Error;

/// Unified codec error.
/// - Only raised when the input cannot be handled as an OTA image at all.
/// - Every other irregularity is reported as an `ImageWarning` next to a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtaError {
    /// Buffer too short to contain the minimal header.
    #[error("buffer too short for OTA header: {have} < {need}")]
    TooShort { have: usize, need: usize },

    /// Magic number mismatch; nothing else is interpreted.
    #[error("invalid magic: expected 0x{need:08X}, got 0x{have:08X}")]
    InvalidMagic { have: u32, need: u32 },

    /// Firmware payload does not fit the 32-bit length fields.
    #[error("firmware too large: {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },
}

/// A convenience `Result` alias using the crate's `OtaError` type.
pub type Result<T> = std::result::Result<T, OtaError>;
