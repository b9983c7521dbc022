use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use strata_core::model::AttributeValue;
use strata_core::writer::{FieldHandle, LayerWriter, MetadataTarget, TargetError, VariableHandle};

#[allow(dead_code)]
pub fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

#[allow(dead_code)]
pub fn read_fixture(file_name: &str) -> String {
    let path = fixture_path(file_name);
    fs::read_to_string(path).expect("fixture should be readable")
}

/// In-memory metadata target recording what the engine applies.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub attributes: BTreeMap<String, AttributeValue>,
    pub set_order: Vec<String>,
}

impl RecordingTarget {
    #[allow(dead_code)]
    pub fn with_attribute(mut self, name: &str, value: AttributeValue) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    #[allow(dead_code)]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name) {
            Some(AttributeValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl MetadataTarget for RecordingTarget {
    fn set_attribute(&mut self, name: &str, value: &AttributeValue) -> Result<(), TargetError> {
        self.attributes.insert(name.to_string(), value.clone());
        self.set_order.push(name.to_string());
        Ok(())
    }

    fn delete_attribute(&mut self, name: &str) -> Result<bool, TargetError> {
        Ok(self.attributes.remove(name).is_some())
    }
}

/// In-memory layer writer with a fixed field table and implicit variable
/// roles.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FakeLayer {
    fields: Vec<String>,
    implicit: Vec<String>,
    pub defined: Vec<(FieldHandle, String)>,
}

impl FakeLayer {
    #[allow(dead_code)]
    pub fn new(fields: &[&str], implicit: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|name| name.to_string()).collect(),
            implicit: implicit.iter().map(|role| role.to_string()).collect(),
            defined: Vec::new(),
        }
    }
}

impl LayerWriter for FakeLayer {
    fn lookup_field(&self, name: &str) -> Option<FieldHandle> {
        self.fields
            .iter()
            .position(|field| field == name)
            .map(|index| FieldHandle(index as i32))
    }

    fn resolve_implicit_variable(&self, role: &str) -> Option<VariableHandle> {
        self.implicit
            .iter()
            .position(|implicit| implicit == role)
            .map(|index| VariableHandle(index as i32))
    }

    fn define_variable(&mut self, field: FieldHandle, dimension: &str) -> Result<(), TargetError> {
        self.defined.push((field, dimension.to_string()));
        Ok(())
    }
}
