//! Unit tests for the symbol table.

use crate::{errors::errors::ErrorImpl, Position};

use super::{registry::Registry, symbol_table::SymbolTable};

fn pos() -> Position {
    Position::null()
}

#[test]
fn test_declare_and_resolve_global() {
    let mut symbols = SymbolTable::new();
    let x = symbols.declare("x", pos()).unwrap();

    assert_eq!(symbols.resolve("x", pos()).unwrap(), x);
    assert_eq!(symbols.read(x, &pos()).unwrap(), 0.0);
}

#[test]
fn test_identities_are_dense_and_unique() {
    let mut symbols = SymbolTable::new();
    let a = symbols.declare("a", pos()).unwrap();
    symbols.push_scope();
    let b = symbols.declare("a", pos()).unwrap();
    symbols.pop_scope().unwrap();
    let c = symbols.declare("c", pos()).unwrap();

    assert_ne!(a, b);
    assert_eq!([a.index(), b.index(), c.index()], [0, 1, 2]);
}

#[test]
fn test_shadowing_resolves_innermost() {
    let mut symbols = SymbolTable::new();
    let outer = symbols.declare("x", pos()).unwrap();

    symbols.push_scope();
    let inner = symbols.declare("x", pos()).unwrap();
    assert_eq!(symbols.resolve("x", pos()).unwrap(), inner);

    symbols.write(inner, 2.0, &pos()).unwrap();
    symbols.pop_scope().unwrap();

    assert_eq!(symbols.resolve("x", pos()).unwrap(), outer);
    assert_eq!(symbols.read(outer, &pos()).unwrap(), 0.0);
    // storage outlives the scope that declared it
    assert_eq!(symbols.read(inner, &pos()).unwrap(), 2.0);
}

#[test]
fn test_resolve_searches_enclosing_scopes() {
    let mut symbols = SymbolTable::new();
    let x = symbols.declare("x", pos()).unwrap();
    symbols.push_scope();
    symbols.push_scope();

    assert_eq!(symbols.resolve("x", pos()).unwrap(), x);
    assert!(!symbols.has_in_current_scope("x"));
}

#[test]
fn test_redeclaration_in_same_scope_fails() {
    let mut symbols = SymbolTable::new();
    symbols.declare("x", pos()).unwrap();

    assert!(symbols.has_in_current_scope("x"));
    let error = symbols.declare("x", pos()).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_resolve_undeclared_fails() {
    let symbols = SymbolTable::new();
    let error = symbols.resolve("missing", pos()).unwrap_err();

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_popped_names_are_unreachable() {
    let mut symbols = SymbolTable::new();
    symbols.push_scope();
    symbols.declare("tmp", pos()).unwrap();
    symbols.pop_scope().unwrap();

    assert!(symbols.resolve("tmp", pos()).is_err());
    assert_eq!(symbols.registry().len(), 1);
}

#[test]
fn test_pop_global_scope_underflows() {
    let mut symbols = SymbolTable::new();
    let error = symbols.pop_scope().unwrap_err();

    assert_eq!(*error.get_internal_error(), ErrorImpl::ScopeUnderflow);
    assert_eq!(symbols.depth(), 1);
}

#[test]
fn test_finish_requires_balanced_scopes() {
    let mut symbols = SymbolTable::new();
    symbols.push_scope();
    assert!(symbols.finish().is_err());

    let mut symbols = SymbolTable::new();
    let x = symbols.declare("x", pos()).unwrap();
    symbols.write(x, 4.0, &pos()).unwrap();
    let (globals, registry) = symbols.finish().unwrap();

    assert_eq!(globals.get("x"), Some(x));
    assert_eq!(registry.read(x, &pos()).unwrap(), 4.0);
}

#[test]
fn test_registry_rejects_foreign_identity() {
    let mut other = Registry::new();
    other.allocate();
    let foreign = other.allocate();

    let mut registry = Registry::new();
    registry.allocate();

    assert!(registry.read(foreign, &pos()).is_err());
    assert!(registry.write(foreign, 1.0, &pos()).is_err());
}
