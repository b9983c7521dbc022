pub mod applier;
pub mod error;
pub mod model;
pub mod resolver;
pub mod validation;
pub mod writer;

pub use applier::{apply_attributes, ApplyError, ApplyReport, SkippedAttribute};
pub use error::{ConfigError, Result};
pub use model::{
    Attribute, AttributeType, AttributeValue, ConfigDocument, CreationOption, FieldSpec,
    GlobalConfig, LayerSpec,
};
pub use resolver::engine::{ConfigResolver, DatasetConfig, EffectiveLayerConfig, ResolveError};
pub use resolver::fields::{
    bind_fields, define_bound_variables, BindingTarget, FieldBinding, FieldMatchError,
    GeometryKind,
};
pub use resolver::merge::{merge_by_key, Keyed};
pub use validation::{validate_document, SchemaError};
pub use writer::{FieldHandle, LayerWriter, MetadataTarget, TargetError, VariableHandle};
