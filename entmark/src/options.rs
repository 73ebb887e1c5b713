//! Render options

use crate::common::offsets::OffsetUnit;

/// Base url mentions link to; the handle without its leading `@` is appended.
pub const DEFAULT_MENTION_BASE_URL: &str = "https://t.me/";

/// Marker emitted around italic and underline markup so a downstream renderer can tell
/// `*` and `<ins>` apart from adjacent bold markers.
pub const DEFAULT_AMBIGUITY_MARKER: char = '\r';

/// Knobs for a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Unit entity offsets and lengths are counted in
    pub offset_unit: OffsetUnit,
    /// Reject malformed entities instead of adjusting or skipping them
    pub strict: bool,
    pub mention_base_url: String,
    /// `None` disables the marker
    pub ambiguity_marker: Option<char>,
}

impl RenderOptions {
    /// Default options with strict validation turned on.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.offset_unit = unit;
        self
    }

    pub fn with_ambiguity_marker(mut self, marker: Option<char>) -> Self {
        self.ambiguity_marker = marker;
        self
    }

    pub fn with_mention_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.mention_base_url = base_url.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            offset_unit: OffsetUnit::default(),
            strict: false,
            mention_base_url: DEFAULT_MENTION_BASE_URL.to_string(),
            ambiguity_marker: Some(DEFAULT_AMBIGUITY_MARKER),
        }
    }
}
