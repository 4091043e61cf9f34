use std::collections::BTreeMap;

use super::registry::VarId;

/// Names declared directly inside one block.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    variable_lookup: BTreeMap<String, VarId>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            variable_lookup: BTreeMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<VarId> {
        self.variable_lookup.get(name).copied()
    }

    /// Binds `name` to `id`. Returns false if the name was already bound here.
    pub fn insert(&mut self, name: String, id: VarId) -> bool {
        if self.variable_lookup.contains_key(&name) {
            return false;
        }
        self.variable_lookup.insert(name, id);
        true
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
