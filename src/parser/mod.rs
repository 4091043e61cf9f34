//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module transforms a stream of tokens into an AST while resolving
//! every variable name to its identity in the symbol table:
//!
//! - Statement parsing dispatched through a lookup table on the first token
//! - Expression parsing with one function per precedence level
//! - Block scopes pushed and popped in step with `{` and `}`
//! - Interpolated strings pre-resolved at parse time
//!
//! The first error aborts parsing; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
