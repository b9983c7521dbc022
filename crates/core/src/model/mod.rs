//! Data model: parsed document elements and the resolved configuration the
//! engine works from.

pub mod attribute;
pub mod config;
pub mod document;
pub mod field;
pub mod layer;
pub mod option;

pub use attribute::{Attribute, AttributeType, AttributeValue, CoercionError};
pub use config::GlobalConfig;
pub use document::{AttributeElement, ConfigDocument, FieldElement, LayerElement};
pub use field::FieldSpec;
pub use layer::LayerSpec;
pub use option::CreationOption;
