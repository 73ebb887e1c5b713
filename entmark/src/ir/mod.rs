//! Intermediate representation shared by every dialect.
//!
//! `entity` holds the flat input as callers provide it, `nodes` the nested forest rebuilt from
//! it and the rendered output.

pub mod entity;
pub mod nodes;
