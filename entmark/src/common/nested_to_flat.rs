//! Converts an entity forest into a flat markup string.
//!
//! # The High-Level Concept
//!
//! Each entity owns the text of its range that none of its children cover. Rendering the tree
//! depth first means a child is always fully rendered (escaped and wrapped) before its parent
//! continues, so the parent only has to escape its own gaps and never sees markup it would
//! escape a second time. The root is a level like any other, without tags, whose gaps are the
//! residual text.
//!
//! # The Algorithm
//!
//! 1. **Level:** split the range into gaps and children ([`segments`]); escape each gap with
//!    the level's character set, render each child in place.
//!
//! 2. **Entity:**
//!    - Ask the dialect for the tags and the character set of the entity kind
//!    - Emit the ambiguity marker (if the dialect asks for it), the open tag, the level, the
//!      close tag and the marker again
//!    - If the rendered content ends in a line break, the close tag and the marker go before
//!      that single line break
//!    - Record the output range as a [`ProducedSpan`]
//!
//! 3. **Completion:** the root level is rendered with the dialect's residual character set.

use crate::common::escape::{escape_into, CharSet};
use crate::common::residual::{segments, Segment};
use crate::dialect::Dialect;
use crate::ir::nodes::{EntityNode, ProducedSpan, Rendered};
use crate::options::RenderOptions;
use std::ops::Range;

/// Renders `roots` over `text`.
pub fn tree_to_markup<D: Dialect>(
    dialect: &D,
    text: &str,
    roots: &[EntityNode<'_>],
    options: &RenderOptions,
) -> Rendered {
    let mut writer = MarkupWriter {
        dialect,
        text,
        options,
        out: String::with_capacity(text.len() + text.len() / 4),
        spans: Vec::new(),
    };
    writer.write_level(0..text.len(), roots, dialect.residual_charset(), 0);

    Rendered {
        text: writer.out,
        spans: writer.spans,
    }
}

struct MarkupWriter<'r, D> {
    dialect: &'r D,
    text: &'r str,
    options: &'r RenderOptions,
    out: String,
    spans: Vec<ProducedSpan>,
}

impl<D: Dialect> MarkupWriter<'_, D> {
    fn write_level(
        &mut self,
        range: Range<usize>,
        children: &[EntityNode<'_>],
        charset: Option<&CharSet>,
        depth: usize,
    ) {
        let text = self.text;
        for segment in segments(range, children) {
            match segment {
                Segment::Gap(gap) => match charset {
                    Some(charset) => escape_into(&mut self.out, &text[gap], charset),
                    None => self.out.push_str(&text[gap]),
                },
                Segment::Node(node) => self.write_node(node, depth),
            }
        }
    }

    fn write_node(&mut self, node: &EntityNode<'_>, depth: usize) {
        let covered = &self.text[node.range.clone()];
        let kind = node.kind();
        let tags = self.dialect.tags(node.entity, covered, self.options);
        let guarded = tags.is_some() && self.dialect.is_ambiguous(kind);

        let start = self.out.len();
        if guarded {
            self.push_boundary();
        }
        if let Some(tags) = &tags {
            self.out.push_str(&tags.open);
        }

        let charset = self.dialect.charset(kind);
        let content_start = self.out.len();
        self.write_level(node.range.clone(), &node.children, charset, depth + 1);

        if let Some(tags) = &tags {
            let trailing_break = self.out.len() > content_start && self.out.ends_with('\n');
            if trailing_break {
                self.out.pop();
            }
            self.out.push_str(&tags.close);
            if guarded {
                self.push_boundary();
            }
            if trailing_break {
                self.out.push('\n');
            }
        }

        self.spans.push(ProducedSpan {
            output: start..self.out.len(),
            source: node.range.clone(),
            kind: kind.clone(),
            depth,
        });
    }

    /// The ambiguity marker never goes through escaping.
    fn push_boundary(&mut self) {
        if let Some(marker) = self.options.ambiguity_marker {
            self.out.push(marker);
        }
    }
}
