//! Entity forest and rendered output.

use crate::common::residual::uncovered_ranges;
use crate::ir::entity::{Entity, EntityKind};
use std::ops::Range;

/// One entity placed in the forest.
///
/// `range` is a byte range into the source text. Children are sorted by start, never overlap
/// each other and lie inside `range`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityNode<'a> {
    pub entity: &'a Entity,
    /// Position of the entity in the caller's slice
    pub index: usize,
    pub range: Range<usize>,
    pub children: Vec<EntityNode<'a>>,
}

impl<'a> EntityNode<'a> {
    pub fn new(entity: &'a Entity, index: usize, range: Range<usize>) -> Self {
        Self {
            entity,
            index,
            range,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &EntityKind {
        &self.entity.kind
    }
}

/// Output produced for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducedSpan {
    /// Byte range in [`Rendered::text`], markup and ambiguity markers included
    pub output: Range<usize>,
    /// Byte range in the source text
    pub source: Range<usize>,
    pub kind: EntityKind,
    /// 0 for top level entities
    pub depth: usize,
}

/// Result of a render: the markup plus the spans each entity produced, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub spans: Vec<ProducedSpan>,
}

impl Rendered {
    pub fn into_string(self) -> String {
        self.text
    }

    /// The markup produced for `span`.
    pub fn span_text(&self, span: &ProducedSpan) -> &str {
        &self.text[span.output.clone()]
    }

    pub fn top_level_spans(&self) -> impl Iterator<Item = &ProducedSpan> {
        self.spans.iter().filter(|span| span.depth == 0)
    }

    /// Output ranges not produced by any entity, i.e. the residual text.
    pub fn residual_ranges(&self) -> Vec<Range<usize>> {
        let mut covered: Vec<Range<usize>> =
            self.top_level_spans().map(|span| span.output.clone()).collect();
        covered.sort_by_key(|range| range.start);
        uncovered_ranges(0..self.text.len(), covered)
    }
}
