//! Dialect agnostic logic: escaping, offset mapping and the flat <-> nested conversions.

pub mod escape;
pub mod flat_to_nested;
pub mod nested_to_flat;
pub mod offsets;
pub mod residual;
