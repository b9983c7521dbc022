use thiserror::Error;

use crate::applier::ApplyError;
use crate::resolver::engine::ResolveError;
use crate::resolver::fields::FieldMatchError;
use crate::validation::SchemaError;
use crate::writer::TargetError;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Umbrella error for callers driving configuration, resolution, binding,
/// and application as one pipeline.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    FieldMatch(#[from] FieldMatchError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error(transparent)]
    Target(#[from] TargetError),
}
