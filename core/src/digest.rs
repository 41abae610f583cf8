//! SHA-512 over a finished OTA file.
//!
//! Update servers (zigbee2mqtt among them) pin images by the SHA-512 of the
//! whole file, so the digest covers header, sub-elements and payload alike.

use sha2::{Digest as _, Sha512};

/// SHA-512 output length in bytes.
pub const SHA512_LEN: usize = 64;

/// Raw SHA-512 digest of `data`.
pub fn sha512(data: &[u8]) -> Vec<u8> {
    Sha512::digest(data).to_vec()
}

/// Lowercase hex SHA-512 digest of `data`.
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(sha512(data))
}

/// Check `data` against a hex digest, ignoring case and surrounding whitespace.
pub fn verify_sha512_hex(data: &[u8], expected: &str) -> bool {
    sha512_hex(data).eq_ignore_ascii_case(expected.trim())
}
