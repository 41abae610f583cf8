//! ota-core
//!
//! Zigbee OTA upgrade image codec.
//! No I/O, no logging, no CLI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Codec
pub mod headers;
pub mod subelements;
pub mod image;

// Collaborator helpers
pub mod digest;
pub mod report;

pub use image::{decode, encode, EncodedImage, ImageWarning, ParsedImage};
pub use types::{OtaError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::headers::{EncodingMode, FieldControl, HardwareVersions, OtaHeader, OtaImageParams};
    pub use crate::image::{decode, encode, EncodedImage, ImageWarning, ParsedImage};
    pub use crate::report::{ImageReport, SubElementReport};
    pub use crate::subelements::{SubElement, SubElementIter, SubElementTag};
    pub use crate::types::{OtaError, Result};
}
