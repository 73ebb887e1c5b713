//! Telegram MarkdownV2 dialect
//!
//! # Entity Mapping Table
//!
//! | Entity kind          | Escaped with | Markup                                   |
//! |----------------------|--------------|------------------------------------------|
//! | bold                 | COMMON       | `**text**`                               |
//! | italic               | COMMON       | `*text*` (ambiguity marker around it)    |
//! | underline            | COMMON       | `<ins>text</ins>` (ambiguity marker)     |
//! | strikethrough        | COMMON       | `~text~`                                 |
//! | code                 | CODE         | ```` ```text``` ````                     |
//! | pre                  | CODE         | ```` ```lang\ntext``` ````               |
//! | text_link            | LINK         | `[text](url)`                            |
//! | mention/text_mention | LINK         | `[@handle](https://t.me/handle)`         |
//! | url, hashtag, ...    | COMMON       | none                                     |
//! | anything else        | nothing      | none                                     |
//!
//! Link targets are escaped with LINK_TARGET, so a `)` in a url cannot close the link early.
//! An empty pre language is the same as no language; one with a backtick or whitespace is
//! dropped, since it would end the fence's first line early.

use crate::common::escape::{escape_chars, CharSet, CODE, COMMON, LINK, LINK_TARGET};
use crate::dialect::{Dialect, Tags};
use crate::error::RenderError;
use crate::ir::entity::{Entity, EntityKind};
use crate::options::RenderOptions;

/// The MarkdownV2 escape sets and tag table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownV2;

impl Dialect for MarkdownV2 {
    fn name(&self) -> &str {
        "markdown-v2"
    }

    fn charset(&self, kind: &EntityKind) -> Option<&'static CharSet> {
        match kind {
            EntityKind::Bold
            | EntityKind::Italic
            | EntityKind::Underline
            | EntityKind::Strikethrough
            | EntityKind::Url
            | EntityKind::Hashtag
            | EntityKind::BotCommand
            | EntityKind::Cashtag
            | EntityKind::Email
            | EntityKind::PhoneNumber => Some(&COMMON),
            EntityKind::Code | EntityKind::Pre => Some(&CODE),
            EntityKind::TextLink | EntityKind::Mention | EntityKind::TextMention => Some(&LINK),
            EntityKind::Other(_) => None,
        }
    }

    fn residual_charset(&self) -> Option<&'static CharSet> {
        Some(&COMMON)
    }

    fn tags(&self, entity: &Entity, covered: &str, options: &RenderOptions) -> Option<Tags> {
        match &entity.kind {
            EntityKind::Bold => Some(Tags::symmetric("**")),
            EntityKind::Italic => Some(Tags::symmetric("*")),
            EntityKind::Underline => Some(Tags::new("<ins>", "</ins>")),
            EntityKind::Strikethrough => Some(Tags::symmetric("~")),
            EntityKind::Code => Some(Tags::symmetric("```")),
            EntityKind::Pre => {
                let language = entity.language.as_deref().filter(|lang| !lang.is_empty());
                let open = match language {
                    Some(lang) if fits_fence(lang) => format!("```{lang}\n"),
                    Some(lang) => {
                        tracing::warn!(
                            offset = entity.offset,
                            language = lang,
                            "pre language cannot sit in a fence, dropping it"
                        );
                        "```\n".to_string()
                    }
                    None => "```\n".to_string(),
                };
                Some(Tags::new(open, "```"))
            }
            EntityKind::TextLink => match entity.url.as_deref() {
                Some(url) => Some(link_tags(url)),
                None => {
                    tracing::warn!(
                        offset = entity.offset,
                        "text_link without url, rendering its label only"
                    );
                    None
                }
            },
            EntityKind::Mention | EntityKind::TextMention => {
                let handle = covered.strip_prefix('@').unwrap_or(covered);
                Some(link_tags(&format!("{}{handle}", options.mention_base_url)))
            }
            _ => None,
        }
    }

    fn is_ambiguous(&self, kind: &EntityKind) -> bool {
        matches!(kind, EntityKind::Italic | EntityKind::Underline)
    }

    fn validate(&self, index: usize, entity: &Entity) -> Result<(), RenderError> {
        match &entity.kind {
            EntityKind::TextLink => {
                let url = entity
                    .url
                    .as_deref()
                    .ok_or(RenderError::MissingUrl { index })?;
                url::Url::parse(url).map_err(|err| RenderError::InvalidUrl {
                    index,
                    url: url.to_string(),
                    reason: err.to_string(),
                })?;
            }
            EntityKind::Pre => {
                if let Some(lang) = entity.language.as_deref() {
                    if !fits_fence(lang) {
                        return Err(RenderError::InvalidLanguage {
                            index,
                            language: lang.to_string(),
                        });
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// A fence language is a single word: no backticks, no whitespace.
fn fits_fence(language: &str) -> bool {
    !language.chars().any(|ch| ch == '`' || ch.is_whitespace())
}

fn link_tags(target: &str) -> Tags {
    Tags::new("[", format!("]({})", escape_chars(target, &LINK_TARGET)))
}
