//! Tree-walking evaluator.
//!
//! Walks a parsed program depth-first and produces its effects:
//!
//! - `evaluator`: the `Evaluator` driver and node dispatch
//! - `expr`: expression semantics (assignment, unary, binary, strings)
//! - `stmt`: statement semantics (blocks, print, if, while)
//! - `format`: how numbers are rendered in program output
//!
//! The evaluator never touches scopes; names were resolved to identities
//! during parsing and only the variable registry is needed here.

pub mod evaluator;
pub mod expr;
pub mod format;
pub mod stmt;
