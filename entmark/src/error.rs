//! Error types for render operations

use crate::ir::entity::EntityKind;
use thiserror::Error;

/// Problems found in the entity list.
///
/// Only strict rendering reports these; the permissive default logs them and adjusts or skips
/// the offending entity. `index` is always the position in the caller's entity slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Entity with a length of zero
    #[error("entity #{index} ({kind}) has zero length")]
    EmptyEntity { index: usize, kind: EntityKind },

    /// Entity reaching past the end of the text
    #[error("entity #{index} ({kind}) spans {offset}..{end} but the text is {len} units long")]
    OutOfBounds {
        index: usize,
        kind: EntityKind,
        offset: usize,
        end: usize,
        len: usize,
    },

    /// Entity boundary that lands inside a character (e.g. between two UTF-16 surrogates)
    #[error("entity #{index} ({kind}) has a boundary at {position} inside a character")]
    SplitsCharacter {
        index: usize,
        kind: EntityKind,
        position: usize,
    },

    /// Two entities that overlap without one containing the other
    #[error("entities #{outer} and #{inner} overlap without nesting")]
    PartialOverlap { outer: usize, inner: usize },

    /// `text_link` without a url
    #[error("text_link entity #{index} has no url")]
    MissingUrl { index: usize },

    /// `text_link` whose url does not parse
    #[error("text_link entity #{index} has an invalid url {url:?}: {reason}")]
    InvalidUrl {
        index: usize,
        url: String,
        reason: String,
    },

    /// `pre` language that would break out of the code fence
    #[error("pre entity #{index} has a language {language:?} with a backtick or whitespace")]
    InvalidLanguage { index: usize, language: String },
}
