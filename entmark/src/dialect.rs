//! Dialect trait definition
//!
//! A dialect is the escape-set and tag-table half of rendering. The entity tree and the
//! composition walk are shared; a dialect only answers questions about single entities.

use crate::common::escape::CharSet;
use crate::error::RenderError;
use crate::ir::entity::{Entity, EntityKind};
use crate::options::RenderOptions;

/// Opening and closing markup wrapped around an entity's rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags {
    pub open: String,
    pub close: String,
}

impl Tags {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Same marker on both sides, e.g. `**`
    pub fn symmetric(marker: &str) -> Self {
        Self::new(marker, marker)
    }
}

/// Trait for markup dialects
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Dialect for Plain {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn charset(&self, _kind: &EntityKind) -> Option<&'static CharSet> {
///         None
///     }
///
///     fn residual_charset(&self) -> Option<&'static CharSet> {
///         None
///     }
///
///     fn tags(&self, _entity: &Entity, _covered: &str, _options: &RenderOptions) -> Option<Tags> {
///         None
///     }
/// }
/// ```
pub trait Dialect {
    /// The name of this dialect (e.g., "markdown-v2")
    fn name(&self) -> &str;

    /// Characters to escape in text covered by an entity of `kind`.
    ///
    /// `None` passes the text through verbatim.
    fn charset(&self, kind: &EntityKind) -> Option<&'static CharSet>;

    /// Characters to escape in text outside of every entity.
    fn residual_charset(&self) -> Option<&'static CharSet>;

    /// Markup around an entity, or `None` to emit its content unwrapped.
    ///
    /// `covered` is the raw source text of the entity, children included.
    fn tags(&self, entity: &Entity, covered: &str, options: &RenderOptions) -> Option<Tags>;

    /// Whether the markup of `kind` needs the ambiguity marker around it.
    fn is_ambiguous(&self, _kind: &EntityKind) -> bool {
        false
    }

    /// Dialect specific checks run by strict rendering before anything is rendered.
    fn validate(&self, _index: usize, _entity: &Entity) -> Result<(), RenderError> {
        Ok(())
    }
}
