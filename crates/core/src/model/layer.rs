use serde::{Deserialize, Serialize};

use crate::model::attribute::Attribute;
use crate::model::field::FieldSpec;
use crate::model::option::CreationOption;

/// Customization block for one layer, keyed by the layer's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    /// Group the layer is written into instead of the root, when set.
    #[serde(default)]
    pub netcdf_group_name: Option<String>,
    #[serde(default)]
    pub creation_options: Vec<CreationOption>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl LayerSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            netcdf_group_name: None,
            creation_options: Vec::new(),
            attributes: Vec::new(),
            fields: Vec::new(),
        }
    }
}
