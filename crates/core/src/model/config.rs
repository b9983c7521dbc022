use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::attribute::{Attribute, AttributeType};
use crate::model::document::{AttributeElement, ConfigDocument, FieldElement, LayerElement};
use crate::model::field::FieldSpec;
use crate::model::layer::LayerSpec;
use crate::model::option::CreationOption;
use crate::validation::{validate_document, SchemaError};

/// Dataset-wide configuration, built once when the writer opens a dataset
/// for output and immutable afterwards.
///
/// Layer specs are keyed by layer name; everything else keeps document
/// order. Every attribute carries a resolved type and every field spec a
/// non-empty identity, both guaranteed by validation at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub dataset_creation_options: Vec<CreationOption>,
    pub layer_creation_options: Vec<CreationOption>,
    pub attributes: Vec<Attribute>,
    pub fields: Vec<FieldSpec>,
    pub layers: BTreeMap<String, LayerSpec>,
}

impl GlobalConfig {
    /// Validate a parsed document and build the resolved configuration.
    ///
    /// Fails before anything is written when the document breaks a schema
    /// invariant: duplicate layer names, field specs without an identity, or
    /// attribute types outside the recognized set.
    pub fn from_document(document: ConfigDocument) -> Result<Self, SchemaError> {
        validate_document(&document)?;

        let layers: BTreeMap<String, LayerSpec> = document
            .layers
            .into_iter()
            .map(|element| {
                let layer = resolve_layer_element(element);
                (layer.name.clone(), layer)
            })
            .collect();

        let config = Self {
            dataset_creation_options: document.dataset_creation_options,
            layer_creation_options: document.layer_creation_options,
            attributes: resolve_attribute_elements(document.attributes),
            fields: resolve_field_elements(document.fields),
            layers,
        };

        debug!(
            dataset_options = config.dataset_creation_options.len(),
            layer_options = config.layer_creation_options.len(),
            attributes = config.attributes.len(),
            fields = config.fields.len(),
            layers = config.layers.len(),
            "writer configuration accepted"
        );

        Ok(config)
    }

    /// Look up a dataset creation option by name.
    pub fn dataset_creation_option(&self, name: &str) -> Option<&CreationOption> {
        self.dataset_creation_options
            .iter()
            .find(|option| option.name == name)
    }

    /// Look up a dataset-wide attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }

    /// Look up a dataset-scope field spec by identity key.
    pub fn field(&self, identity: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.identity() == identity)
    }

    pub fn layer(&self, name: &str) -> Option<&LayerSpec> {
        self.layers.get(name)
    }
}

fn resolve_attribute_elements(elements: Vec<AttributeElement>) -> Vec<Attribute> {
    elements.into_iter().map(resolve_attribute_element).collect()
}

fn resolve_attribute_element(element: AttributeElement) -> Attribute {
    // validation guarantees the token is recognized when present
    let kind = element
        .kind
        .as_deref()
        .and_then(AttributeType::parse)
        .unwrap_or_default();

    Attribute {
        name: element.name,
        value: element.value,
        kind,
    }
}

fn resolve_field_elements(elements: Vec<FieldElement>) -> Vec<FieldSpec> {
    elements.into_iter().map(resolve_field_element).collect()
}

fn resolve_field_element(element: FieldElement) -> FieldSpec {
    FieldSpec {
        ogr_name: non_empty(element.name),
        netcdf_name: non_empty(element.netcdf_name),
        main_dim: non_empty(element.main_dim),
        attributes: resolve_attribute_elements(element.attributes),
    }
}

fn resolve_layer_element(element: LayerElement) -> LayerSpec {
    LayerSpec {
        name: element.name,
        netcdf_group_name: non_empty(element.netcdf_name),
        creation_options: element.layer_creation_options,
        attributes: resolve_attribute_elements(element.attributes),
        fields: resolve_field_elements(element.fields),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
