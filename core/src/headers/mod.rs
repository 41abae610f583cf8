//! headers/mod.rs
//! Public module export for the OTA upgrade image header.
//!
//! Format notes:
//! - Fixed layout, 56 bytes minimal, 60 bytes with the hardware version range.
//! - Magic `0x0BEEF11E` is the only hard validation on decode.
//! - `total_image_size` has two incompatible meanings; see `EncodingMode`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
