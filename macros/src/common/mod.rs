// Common utilities shared between the user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and lowering to query types
// - tags: The interface vocabulary and tag path resolution

mod bool_expr;
mod tags;

pub use bool_expr::*;
pub use tags::*;
