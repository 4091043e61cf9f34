use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Stable handle to one declared variable.
///
/// Handles are assigned densely in declaration order and never reused, so two
/// variables are the same entity exactly when their handles are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableSlot {
    pub id: VarId,
    pub value: f64,
}

/// Flat storage for every variable ever declared, independent of scope depth.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: Vec<VariableSlot>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { slots: Vec::new() }
    }

    /// Creates a new slot holding 0 and returns its handle.
    pub fn allocate(&mut self) -> VarId {
        let id = VarId(self.slots.len());
        self.slots.push(VariableSlot { id, value: 0.0 });
        id
    }

    pub fn read(&self, id: VarId, position: &Position) -> Result<f64, Error> {
        self.slots
            .get(id.0)
            .map(|slot| slot.value)
            .ok_or_else(|| unknown_identity(id, position))
    }

    pub fn write(&mut self, id: VarId, value: f64, position: &Position) -> Result<(), Error> {
        let slot = self
            .slots
            .get_mut(id.0)
            .ok_or_else(|| unknown_identity(id, position))?;
        slot.value = value;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn unknown_identity(id: VarId, position: &Position) -> Error {
    Error::new(ErrorImpl::UnknownIdentity { id: id.0 }, position.clone())
}
