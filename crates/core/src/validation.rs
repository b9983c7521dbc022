use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::attribute::AttributeType;
use crate::model::document::{AttributeElement, ConfigDocument, FieldElement};

/// Fatal schema violation. Raised during configuration construction, before
/// any output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate layer name '{name}' in configuration")]
    DuplicateLayer { name: String },
    #[error("field spec in {scope} has neither a field name nor a netcdf name")]
    MissingFieldIdentity { scope: String },
    #[error("attribute '{name}' in {scope} declares unknown type '{kind}' (expected string, integer or double)")]
    UnknownAttributeType {
        name: String,
        kind: String,
        scope: String,
    },
}

/// Check every schema invariant the resolver relies on. Fails on the first
/// violation found, in document order.
pub fn validate_document(document: &ConfigDocument) -> Result<(), SchemaError> {
    validate_attributes(&document.attributes, "configuration")?;
    validate_fields(&document.fields, "configuration")?;

    let mut seen = BTreeSet::new();
    for layer in &document.layers {
        if !seen.insert(layer.name.as_str()) {
            return Err(SchemaError::DuplicateLayer {
                name: layer.name.clone(),
            });
        }

        let scope = format!("layer '{}'", layer.name);
        validate_attributes(&layer.attributes, &scope)?;
        validate_fields(&layer.fields, &scope)?;
    }

    Ok(())
}

fn validate_fields(fields: &[FieldElement], scope: &str) -> Result<(), SchemaError> {
    for field in fields {
        let has_field_name = field.name.as_deref().is_some_and(|name| !name.is_empty());
        let has_output_name = field
            .netcdf_name
            .as_deref()
            .is_some_and(|name| !name.is_empty());

        if !has_field_name && !has_output_name {
            return Err(SchemaError::MissingFieldIdentity {
                scope: scope.to_string(),
            });
        }

        validate_attributes(&field.attributes, scope)?;
    }

    Ok(())
}

fn validate_attributes(attributes: &[AttributeElement], scope: &str) -> Result<(), SchemaError> {
    for attribute in attributes {
        if let Some(kind) = attribute.kind.as_deref() {
            if AttributeType::parse(kind).is_none() {
                return Err(SchemaError::UnknownAttributeType {
                    name: attribute.name.clone(),
                    kind: kind.to_string(),
                    scope: scope.to_string(),
                });
            }
        }
    }

    Ok(())
}
