use std::iter::FusedIterator;

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::SUB_ELEMENT_HEADER_LEN;
use crate::subelements::types::SubElement;

/// Lazy walk over the sub-elements of an OTA file.
///
/// - Stops when fewer than 6 bytes remain.
/// - Yields a record whose declared length runs past the end, then stops.
/// - Never indexes outside `data`, whatever the length fields say.
#[derive(Debug, Clone)]
pub struct SubElementIter<'a> {
    data: &'a [u8],
    cursor: usize,
    done: bool,
}

impl<'a> SubElementIter<'a> {
    /// Start scanning `data` at byte `start` (normally `header_length`).
    pub fn new(data: &'a [u8], start: usize) -> Self {
        Self {
            data,
            cursor: start,
            done: false,
        }
    }

    /// Current read position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes after the last complete record that are too short to form a
    /// record header. Empty after a truncated record.
    pub fn remainder(&self) -> &'a [u8] {
        self.data.get(self.cursor..).unwrap_or(&[])
    }
}

impl<'a> Iterator for SubElementIter<'a> {
    type Item = SubElement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let remaining = self.data.len().saturating_sub(self.cursor);
        if remaining < SUB_ELEMENT_HEADER_LEN {
            self.done = true;
            return None;
        }

        let offset = self.cursor;
        let tag_id = LittleEndian::read_u16(&self.data[offset..offset + 2]);
        let length = LittleEndian::read_u32(&self.data[offset + 2..offset + 6]);

        let body = offset + SUB_ELEMENT_HEADER_LEN;
        let next = usize::try_from(length)
            .ok()
            .and_then(|len| body.checked_add(len));

        let payload = match next {
            Some(end) if end <= self.data.len() => {
                self.cursor = end;
                &self.data[body..end]
            }
            _ => {
                // Declared length overruns the buffer; offsets past here are unreliable.
                self.cursor = self.data.len();
                self.done = true;
                &self.data[body..]
            }
        };

        Some(SubElement {
            offset,
            tag_id,
            length,
            payload,
        })
    }
}

impl FusedIterator for SubElementIter<'_> {}

/// Scan `data` from `start`.
pub fn scan_sub_elements(data: &[u8], start: usize) -> SubElementIter<'_> {
    SubElementIter::new(data, start)
}
