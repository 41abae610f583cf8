//! Sub-element records following the OTA header.
//!
//! Responsibilities:
//! - Classify tag ids through a static table
//! - Encode the 6-byte record header
//! - Scan records without trusting their length fields
//!
//! Non-responsibilities:
//! - Interpreting payloads (signatures, certificates)

pub mod types;
pub mod encode;
pub mod scan;

pub use types::{describe_tag, tag_name, SubElement, SubElementTag, TAG_NAMES};
pub use encode::encode_sub_element_header;
pub use scan::{scan_sub_elements, SubElementIter};
