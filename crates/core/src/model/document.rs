use serde::{Deserialize, Serialize};

use crate::model::option::CreationOption;

/// Root of a parsed writer configuration document.
///
/// Parsing the on-disk format is the caller's job; this is the shape the
/// engine expects once element nesting has been checked. List order matches
/// document order and is significant for merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub dataset_creation_options: Vec<CreationOption>,
    #[serde(default)]
    pub layer_creation_options: Vec<CreationOption>,
    #[serde(default)]
    pub attributes: Vec<AttributeElement>,
    #[serde(default)]
    pub fields: Vec<FieldElement>,
    #[serde(default)]
    pub layers: Vec<LayerElement>,
}

/// Attribute element as parsed, the declared type still an unchecked token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeElement {
    pub name: String,
    pub value: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Field element as parsed. `name` refers to a data field of the layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldElement {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub netcdf_name: Option<String>,
    #[serde(default)]
    pub main_dim: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeElement>,
}

/// Layer element as parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerElement {
    pub name: String,
    #[serde(default)]
    pub netcdf_name: Option<String>,
    #[serde(default)]
    pub layer_creation_options: Vec<CreationOption>,
    #[serde(default)]
    pub attributes: Vec<AttributeElement>,
    #[serde(default)]
    pub fields: Vec<FieldElement>,
}
