//! Entity-annotated text to Telegram MarkdownV2
//!
//!     This crate turns a plain text plus a flat list of formatting entities (bold, italic, code,
//!     links, mentions...), each given as an offset and a length into the text, into the
//!     equivalent MarkdownV2 string.
//!
//!     TLDR: For callers:
//!         - [`entities_to_markdown`] is the one-call entry point. It never fails: malformed
//!           entities are adjusted or dropped and a warning is logged through `tracing`.
//!         - [`render`] takes [`RenderOptions`] (offset unit, strict mode, mention base url,
//!           ambiguity marker) and returns a [`Rendered`] value carrying the produced spans.
//!         - The escaping primitives are exported standalone for fragments built by hand.
//!
//! Architecture
//!
//!     The work is split the same way a format converter splits parsing from serializing: a
//!     dialect agnostic core that understands entities, and a dialect (./formats) that knows the
//!     escape sets and the tag table.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # RenderError
//!     ├── dialect.rs              # Dialect trait definition
//!     ├── options.rs              # RenderOptions
//!     ├── formats
//!     │   └── markdown_v2         # The MarkdownV2 escape sets and tag table
//!     ├── ir                      # Entities, the entity tree and rendered output
//!     └── common
//!         ├── escape.rs           # Character set escaping
//!         ├── offsets.rs          # Offset unit -> byte index mapping
//!         ├── flat_to_nested.rs   # Flat entity list -> entity forest
//!         ├── nested_to_flat.rs   # Entity forest -> markup string
//!         └── residual.rs         # Gaps between rendered spans
//!
//! Core Algorithms
//!
//!     Entities carry no parent pointer: nesting is only implied by ranges, and entities that
//!     share a start offset form a chain ordered by length. flat_to_nested sorts the entities and
//!     rebuilds the forest with a stack of open entities, so every entity hangs under its smallest
//!     enclosing entity. nested_to_flat then renders the forest depth first: each level escapes
//!     only the text its children do not cover, wraps the result with its tags, and records the
//!     output range it produced. The text between top level spans is the residual text, escaped
//!     with the common character set.
//!
//!     The source text is never rewritten in place, so there is no offset bookkeeping and no
//!     searching for previously produced markup in the output.
//!
//! Offsets
//!
//!     The Bot API counts offsets in UTF-16 code units, which is the default. Chars and bytes are
//!     available through [`OffsetUnit`].

pub mod common;
pub mod dialect;
pub mod error;
pub mod formats;
pub mod ir;
pub mod options;

pub use common::escape::{
    escape_chars, escape_code_chars, escape_common_chars, escape_link_chars, CharSet,
};
pub use common::offsets::OffsetUnit;
pub use dialect::{Dialect, Tags};
pub use error::RenderError;
pub use formats::markdown_v2::MarkdownV2;
pub use ir::entity::{Entity, EntityKind};
pub use ir::nodes::{ProducedSpan, Rendered};
pub use options::RenderOptions;

/// Renders `text` and its entities as MarkdownV2 with the default, permissive options.
///
/// Entities that do not fit the text are adjusted or skipped, see [`RenderOptions::strict`].
pub fn entities_to_markdown(text: &str, entities: &[Entity]) -> String {
    match render(text, entities, &RenderOptions::default()) {
        Ok(rendered) => rendered.into_string(),
        Err(err) => {
            // Unreachable with permissive options, keep the text readable anyway.
            tracing::error!(error = %err, "permissive render failed, escaping text only");
            escape_common_chars(text)
        }
    }
}

/// Renders `text` and its entities as MarkdownV2.
pub fn render(
    text: &str,
    entities: &[Entity],
    options: &RenderOptions,
) -> Result<Rendered, RenderError> {
    render_with(&MarkdownV2, text, entities, options)
}

/// Renders `text` and its entities with an arbitrary [`Dialect`].
pub fn render_with<D: Dialect>(
    dialect: &D,
    text: &str,
    entities: &[Entity],
    options: &RenderOptions,
) -> Result<Rendered, RenderError> {
    if options.strict {
        for (index, entity) in entities.iter().enumerate() {
            dialect.validate(index, entity)?;
        }
    }

    let forest = common::flat_to_nested::entities_to_tree(text, entities, options)?;
    let rendered = common::nested_to_flat::tree_to_markup(dialect, text, &forest, options);

    tracing::debug!(
        dialect = dialect.name(),
        entities = entities.len(),
        spans = rendered.spans.len(),
        "rendered entities"
    );
    Ok(rendered)
}
