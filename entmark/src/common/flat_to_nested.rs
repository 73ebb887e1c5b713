//! Converts a flat entity list into a nested entity forest.
//!
//! # The High-Level Concept
//!
//! Entities arrive as a flat list of ranges with no parent pointers. Nesting is implied: an
//! entity belongs to the smallest entity whose range contains it, and entities that share a
//! start offset form a chain where the longest is the outermost. Once the entities are sorted by
//! start (longest first on ties), the same stack walk used to rebuild a tree from start/end
//! events rebuilds the forest: the stack holds the entities still "open" at the current position.
//!
//! # The Algorithm
//!
//! 1. **Resolution:**
//!    - Map every entity's offset and length to a byte range with the [`OffsetMap`]
//!    - Reject (strict) or adjust/skip (permissive) entities that do not fit the text
//!
//! 2. **Ordering:**
//!    - Sort by start ascending, end descending, then input position
//!
//! 3. **Processing an entity:**
//!    - Close every open entity that ends at or before the new entity's start, attaching each
//!      closed node to the node below it on the stack (or to the roots)
//!    - If the entity ends after the top of the stack it overlaps without nesting: reject
//!      (strict) or skip (permissive)
//!    - Otherwise push it; the top of the stack is now its parent
//!
//! 4. **Completion:**
//!    - Close everything left on the stack; the roots are the top level entities

use crate::common::offsets::{Located, OffsetMap};
use crate::error::RenderError;
use crate::ir::entity::Entity;
use crate::ir::nodes::EntityNode;
use crate::options::RenderOptions;
use std::cmp::Reverse;
use std::ops::Range;

/// An entity with its byte range.
struct Resolved<'a> {
    entity: &'a Entity,
    index: usize,
    range: Range<usize>,
}

/// Builds the entity forest of `text`.
pub fn entities_to_tree<'a>(
    text: &str,
    entities: &'a [Entity],
    options: &RenderOptions,
) -> Result<Vec<EntityNode<'a>>, RenderError> {
    let map = OffsetMap::new(text, options.offset_unit);

    let mut resolved = Vec::with_capacity(entities.len());
    for (index, entity) in entities.iter().enumerate() {
        if let Some(item) = resolve(&map, index, entity, options.strict)? {
            resolved.push(item);
        }
    }
    resolved.sort_by_key(|item| (item.range.start, Reverse(item.range.end), item.index));

    let mut roots = Vec::new();
    let mut stack: Vec<EntityNode<'a>> = Vec::new();

    for item in resolved {
        while stack
            .last()
            .is_some_and(|open| open.range.end <= item.range.start)
        {
            close_top(&mut stack, &mut roots);
        }

        if let Some(open) = stack.last() {
            if item.range.end > open.range.end {
                let err = RenderError::PartialOverlap {
                    outer: open.index,
                    inner: item.index,
                };
                reject_or_warn(options.strict, err, "skipping overlapping entity")?;
                continue;
            }
        }

        stack.push(EntityNode::new(item.entity, item.index, item.range));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    Ok(roots)
}

/// Maps an entity to its byte range. `Ok(None)` means the entity is skipped.
fn resolve<'a>(
    map: &OffsetMap,
    index: usize,
    entity: &'a Entity,
    strict: bool,
) -> Result<Option<Resolved<'a>>, RenderError> {
    let kind = &entity.kind;

    if entity.length == 0 {
        let err = RenderError::EmptyEntity {
            index,
            kind: kind.clone(),
        };
        reject_or_warn(strict, err, "skipping entity")?;
        return Ok(None);
    }

    let end = entity.end();
    let out_of_bounds = || RenderError::OutOfBounds {
        index,
        kind: kind.clone(),
        offset: entity.offset,
        end,
        len: map.len(),
    };
    let splits = |position| RenderError::SplitsCharacter {
        index,
        kind: kind.clone(),
        position,
    };

    let start = match map.locate(entity.offset) {
        Located::Exact(byte) => byte,
        Located::Inside { before, .. } => {
            reject_or_warn(strict, splits(entity.offset), "widening entity")?;
            before
        }
        Located::Past => {
            reject_or_warn(strict, out_of_bounds(), "skipping entity")?;
            return Ok(None);
        }
    };

    let stop = match map.locate(end) {
        Located::Exact(byte) => byte,
        Located::Inside { after, .. } => {
            reject_or_warn(strict, splits(end), "widening entity")?;
            after
        }
        Located::Past => {
            reject_or_warn(strict, out_of_bounds(), "truncating entity")?;
            map.byte_len()
        }
    };

    if start >= stop {
        return Ok(None);
    }

    Ok(Some(Resolved {
        entity,
        index,
        range: start..stop,
    }))
}

/// Pops the top of the stack and attaches it to its parent, or to the roots.
fn close_top<'a>(stack: &mut Vec<EntityNode<'a>>, roots: &mut Vec<EntityNode<'a>>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

fn reject_or_warn(strict: bool, err: RenderError, action: &str) -> Result<(), RenderError> {
    if strict {
        return Err(err);
    }
    tracing::warn!(error = %err, "{action}");
    Ok(())
}
