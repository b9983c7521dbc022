use thiserror::Error;

use crate::model::AttributeValue;

/// Index of a data field in the layer being written, as numbered by the
/// writer's own field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(pub i32);

/// Identifier of a variable in the output container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableHandle(pub i32);

/// Failure reported by the writer while servicing an engine request.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("writing attribute '{name}' failed: {message}")]
    AttributeWrite { name: String, message: String },
    #[error("variable definition failed: {message}")]
    VariableDefinition { message: String },
}

/// A metadata container attributes can be applied to: the dataset root, a
/// layer group, or a single variable.
///
/// The engine never touches the output container directly; the writer owns
/// all I/O and hands the engine one of these per application pass.
pub trait MetadataTarget {
    /// Set an attribute, creating it or overwriting any existing value and
    /// type.
    fn set_attribute(&mut self, name: &str, value: &AttributeValue) -> Result<(), TargetError>;

    /// Delete an attribute if present. Returns whether it existed.
    fn delete_attribute(&mut self, name: &str) -> Result<bool, TargetError>;
}

/// Per-layer writer surface the field binder resolves against.
pub trait LayerWriter {
    /// Find a data field of the layer by exact name.
    fn lookup_field(&self, name: &str) -> Option<FieldHandle>;

    /// Find a variable the writer creates without a backing data field, by
    /// its output name. Which roles exist depends on the layer's geometry.
    fn resolve_implicit_variable(&self, role: &str) -> Option<VariableHandle>;

    /// Define the variable for a data field indexed by `dimension` instead
    /// of the record dimension.
    fn define_variable(&mut self, field: FieldHandle, dimension: &str) -> Result<(), TargetError>;
}
