use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    registry::{Registry, VarId},
    scope::Scope,
};

/// Scope stack plus variable registry, owned by the parser.
///
/// The bottom scope is the global scope and is never popped.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    registry: Registry,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new()],
            registry: Registry::new(),
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!("pushed scope, depth {}", self.scopes.len());
    }

    pub fn pop_scope(&mut self) -> Result<(), Error> {
        if self.scopes.len() <= 1 {
            return Err(Error::new(ErrorImpl::ScopeUnderflow, Position::null()));
        }

        self.scopes.pop();
        trace!("popped scope, depth {}", self.scopes.len());
        Ok(())
    }

    /// Number of open scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn has_in_current_scope(&self, name: &str) -> bool {
        self.current_scope().contains(name)
    }

    /// Declares `name` in the innermost scope with a fresh identity whose slot
    /// starts at 0.
    pub fn declare(&mut self, name: &str, position: Position) -> Result<VarId, Error> {
        if self.has_in_current_scope(name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string(),
                },
                position,
            ));
        }

        let id = self.registry.allocate();
        let depth = self.scopes.len();
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), id);
        }

        debug!("declared `{}` as {} at scope depth {}", name, id, depth);
        Ok(id)
    }

    /// Finds the innermost declaration of `name`.
    pub fn resolve(&self, name: &str, position: Position) -> Result<VarId, Error> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: name.to_string(),
                    },
                    position,
                )
            })
    }

    pub fn read(&self, id: VarId, position: &Position) -> Result<f64, Error> {
        self.registry.read(id, position)
    }

    pub fn write(&mut self, id: VarId, value: f64, position: &Position) -> Result<(), Error> {
        self.registry.write(id, value, position)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Ends name resolution. Returns the global scope and the registry; the
    /// rest of the scope stack is dropped.
    pub fn finish(mut self) -> Result<(Scope, Registry), Error> {
        if self.scopes.len() != 1 {
            return Err(Error::new(ErrorImpl::ScopeUnderflow, Position::null()));
        }

        let globals = self.scopes.pop().unwrap_or_default();
        Ok((globals, self.registry))
    }

    fn current_scope(&self) -> &Scope {
        // The global scope is never popped, so the stack is never empty.
        &self.scopes[self.scopes.len() - 1]
    }
}
