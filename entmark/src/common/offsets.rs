//! Maps entity offsets to byte indices.
//!
//! Entity offsets are counted in whatever unit the producer used; the Bot API counts UTF-16
//! code units. A position may then fall inside a character (between the two halves of a
//! surrogate pair, or inside a multi byte UTF-8 sequence), which [`OffsetMap::locate`] reports
//! instead of slicing blindly.

use serde::{Deserialize, Serialize};

/// Unit entity offsets and lengths are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-16 code units
    #[default]
    Utf16,
    /// Unicode scalar values
    Chars,
    /// UTF-8 bytes
    Bytes,
}

impl OffsetUnit {
    /// Width of `ch` in this unit.
    pub fn width(self, ch: char) -> usize {
        match self {
            OffsetUnit::Utf16 => ch.len_utf16(),
            OffsetUnit::Chars => 1,
            OffsetUnit::Bytes => ch.len_utf8(),
        }
    }
}

/// Where a unit position lands in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Located {
    /// On a character boundary, at this byte index
    Exact(usize),
    /// Inside the character spanning `before..after`
    Inside { before: usize, after: usize },
    /// Beyond the end of the text
    Past,
}

/// Character boundaries of a text in both units and bytes.
#[derive(Debug, Clone)]
pub struct OffsetMap {
    units: Vec<usize>,
    bytes: Vec<usize>,
}

impl OffsetMap {
    pub fn new(text: &str, unit: OffsetUnit) -> Self {
        let mut units = Vec::with_capacity(text.len() + 1);
        let mut bytes = Vec::with_capacity(text.len() + 1);
        let mut position = 0;
        for (byte, ch) in text.char_indices() {
            units.push(position);
            bytes.push(byte);
            position += unit.width(ch);
        }
        units.push(position);
        bytes.push(text.len());
        Self { units, bytes }
    }

    /// Length of the text in the map's unit.
    pub fn len(&self) -> usize {
        self.units.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the text in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.last().copied().unwrap_or(0)
    }

    pub fn locate(&self, position: usize) -> Located {
        match self.units.binary_search(&position) {
            Ok(i) => Located::Exact(self.bytes[i]),
            // units[0] is always 0, so a miss never lands before the first boundary
            Err(i) if i > 0 && i < self.units.len() => Located::Inside {
                before: self.bytes[i - 1],
                after: self.bytes[i],
            },
            Err(_) => Located::Past,
        }
    }
}
