//! Gaps between rendered spans.
//!
//! Every level of the tree, the root included, alternates between text that belongs to a child
//! entity and text the level owns itself. Only the latter is escaped by the level; at the root it
//! is the residual text and gets the dialect's residual character set.

use crate::ir::nodes::EntityNode;
use std::ops::Range;

/// A piece of a level: its own text, or a child entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'n, 'a> {
    Gap(Range<usize>),
    Node(&'n EntityNode<'a>),
}

/// Split `range` into gaps and `children`, in order. Empty gaps are omitted.
pub fn segments<'n, 'a>(
    range: Range<usize>,
    children: &'n [EntityNode<'a>],
) -> Vec<Segment<'n, 'a>> {
    let mut parts = Vec::with_capacity(children.len() * 2 + 1);
    let mut cursor = range.start;
    for child in children {
        if child.range.start > cursor {
            parts.push(Segment::Gap(cursor..child.range.start));
        }
        parts.push(Segment::Node(child));
        cursor = cursor.max(child.range.end);
    }
    if range.end > cursor {
        parts.push(Segment::Gap(cursor..range.end));
    }
    parts
}

/// Parts of `range` not covered by `covered`.
///
/// `covered` must be sorted by start and must not overlap.
pub fn uncovered_ranges<I>(range: Range<usize>, covered: I) -> Vec<Range<usize>>
where
    I: IntoIterator<Item = Range<usize>>,
{
    let mut gaps = Vec::new();
    let mut cursor = range.start;
    for span in covered {
        if span.start > cursor {
            gaps.push(cursor..span.start.min(range.end));
        }
        cursor = cursor.max(span.end);
    }
    if range.end > cursor {
        gaps.push(cursor..range.end);
    }
    gaps
}
