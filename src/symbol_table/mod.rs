//! Lexically scoped symbol table.
//!
//! Name resolution and variable storage are kept apart:
//!
//! - `Scope` maps names to identities for one block and only lives while
//!   the parser is inside that block
//! - `Registry` owns every variable slot, addressed by `VarId`, for the
//!   whole run
//! - `SymbolTable` ties the two together during parsing
//!
//! The evaluator only ever sees the `Registry`.

pub mod registry;
pub mod scope;
pub mod symbol_table;

#[cfg(test)]
mod tests;
