//! Formatting entities, the flat input of every render.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a formatting entity.
///
/// Serializes as the Bot API `type` string. Names outside the known set become
/// [`EntityKind::Other`] so newer entity types still deserialize; they render as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    TextLink,
    Mention,
    TextMention,
    Url,
    Hashtag,
    BotCommand,
    Cashtag,
    Email,
    PhoneNumber,
    Other(String),
}

impl EntityKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::Bold => "bold",
            EntityKind::Italic => "italic",
            EntityKind::Underline => "underline",
            EntityKind::Strikethrough => "strikethrough",
            EntityKind::Code => "code",
            EntityKind::Pre => "pre",
            EntityKind::TextLink => "text_link",
            EntityKind::Mention => "mention",
            EntityKind::TextMention => "text_mention",
            EntityKind::Url => "url",
            EntityKind::Hashtag => "hashtag",
            EntityKind::BotCommand => "bot_command",
            EntityKind::Cashtag => "cashtag",
            EntityKind::Email => "email",
            EntityKind::PhoneNumber => "phone_number",
            EntityKind::Other(name) => name,
        }
    }
}

impl From<&str> for EntityKind {
    fn from(name: &str) -> Self {
        match name {
            "bold" => EntityKind::Bold,
            "italic" => EntityKind::Italic,
            "underline" => EntityKind::Underline,
            "strikethrough" => EntityKind::Strikethrough,
            "code" => EntityKind::Code,
            "pre" => EntityKind::Pre,
            "text_link" => EntityKind::TextLink,
            "mention" => EntityKind::Mention,
            "text_mention" => EntityKind::TextMention,
            "url" => EntityKind::Url,
            "hashtag" => EntityKind::Hashtag,
            "bot_command" => EntityKind::BotCommand,
            "cashtag" => EntityKind::Cashtag,
            "email" => EntityKind::Email,
            "phone_number" => EntityKind::PhoneNumber,
            other => EntityKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EntityKind {
    fn from(name: String) -> Self {
        match EntityKind::from(name.as_str()) {
            EntityKind::Other(_) => EntityKind::Other(name),
            known => known,
        }
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formatting annotation over `length` units of text starting at `offset`.
///
/// The unit is chosen by [`crate::RenderOptions::offset_unit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
    /// Target of a `text_link`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Language of a `pre` block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Entity {
    pub fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            language: None,
        }
    }

    pub fn text_link(offset: usize, length: usize, url: impl Into<String>) -> Self {
        Self::new(EntityKind::TextLink, offset, length).with_url(url)
    }

    pub fn pre(offset: usize, length: usize, language: Option<&str>) -> Self {
        let entity = Self::new(EntityKind::Pre, offset, length);
        match language {
            Some(language) => entity.with_language(language),
            None => entity,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Exclusive end offset, saturating on overflow.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }
}
