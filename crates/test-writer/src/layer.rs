use std::collections::BTreeMap;

use strata_core::writer::{FieldHandle, LayerWriter, TargetError, VariableHandle};

/// In-memory layer writer: a field table, implicit variable roles, and a log
/// of issued variable definitions.
#[derive(Debug, Default)]
pub struct MemoryLayer {
    fields: Vec<String>,
    implicit: BTreeMap<String, VariableHandle>,
    next_variable: i32,
    defined: Vec<(FieldHandle, String)>,
    reject_definitions: bool,
}

impl MemoryLayer {
    /// Create a layer with an empty field table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layer whose field table holds `names`, in order.
    pub fn with_fields(names: &[&str]) -> Self {
        let mut layer = Self::new();
        for name in names {
            layer.add_field(name);
        }
        layer
    }

    /// Append a data field to the field table.
    pub fn add_field(&mut self, name: &str) -> FieldHandle {
        let handle = FieldHandle(self.fields.len() as i32);
        self.fields.push(name.to_string());
        handle
    }

    /// Register an implicit variable role, as a geometry-specific writer
    /// would when creating the layer.
    pub fn add_implicit_variable(&mut self, role: &str) -> VariableHandle {
        let handle = VariableHandle(self.next_variable);
        self.next_variable += 1;
        self.implicit.insert(role.to_string(), handle);
        handle
    }

    /// Make every variable definition request fail.
    pub fn rejecting_definitions(mut self) -> Self {
        self.reject_definitions = true;
        self
    }

    /// Variable definitions issued so far, in arrival order.
    pub fn defined(&self) -> &[(FieldHandle, String)] {
        &self.defined
    }
}

impl LayerWriter for MemoryLayer {
    fn lookup_field(&self, name: &str) -> Option<FieldHandle> {
        self.fields
            .iter()
            .position(|field| field == name)
            .map(|index| FieldHandle(index as i32))
    }

    fn resolve_implicit_variable(&self, role: &str) -> Option<VariableHandle> {
        self.implicit.get(role).copied()
    }

    fn define_variable(&mut self, field: FieldHandle, dimension: &str) -> Result<(), TargetError> {
        if self.reject_definitions {
            return Err(TargetError::VariableDefinition {
                message: "injected failure".to_string(),
            });
        }
        self.defined.push((field, dimension.to_string()));
        Ok(())
    }
}
