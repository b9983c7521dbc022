use serde::{Deserialize, Serialize};

use crate::model::attribute::Attribute;

/// Customization for one written variable.
///
/// Identity is `ogr_name` when present, otherwise `netcdf_name`. Documents
/// that set neither are rejected during validation, so a constructed spec
/// always has a non-empty identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Name of the data field this spec targets, as carried by features.
    #[serde(default)]
    pub ogr_name: Option<String>,
    /// Output variable name. With `ogr_name` present it renames the written
    /// variable; alone it names an implicit variable role instead.
    #[serde(default)]
    pub netcdf_name: Option<String>,
    /// Indexing dimension override for the variable definition.
    #[serde(default)]
    pub main_dim: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl FieldSpec {
    /// Spec for a data field, matched against the layer's field table.
    pub fn for_field(ogr_name: impl Into<String>) -> Self {
        Self {
            ogr_name: Some(ogr_name.into()),
            netcdf_name: None,
            main_dim: None,
            attributes: Vec::new(),
        }
    }

    /// Spec addressing an implicit variable role by output name.
    pub fn for_variable(netcdf_name: impl Into<String>) -> Self {
        Self {
            ogr_name: None,
            netcdf_name: Some(netcdf_name.into()),
            main_dim: None,
            attributes: Vec::new(),
        }
    }

    /// Identity key used for merge and supersession lookups.
    pub fn identity(&self) -> &str {
        self.ogr_name
            .as_deref()
            .or(self.netcdf_name.as_deref())
            .unwrap_or_default()
    }
}
