//! Dialect implementations.
//!
//! Each dialect lives in its own module and implements [`crate::Dialect`].

pub mod markdown_v2;
