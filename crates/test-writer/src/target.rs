use std::collections::BTreeMap;

use strata_core::model::AttributeValue;
use strata_core::writer::{MetadataTarget, TargetError};

/// In-memory metadata target for write scenarios.
///
/// Records every set and delete in arrival order so tests can assert on the
/// final attribute map as well as on the request sequence.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    attributes: BTreeMap<String, AttributeValue>,
    set_log: Vec<String>,
    delete_log: Vec<String>,
    fail_on: Option<String>,
}

impl MemoryTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an attribute, as if written by an earlier pass.
    pub fn with_attribute(mut self, name: &str, value: AttributeValue) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Make any request touching `name` fail, to exercise fatal paths.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(name.to_string());
        self
    }

    /// Current value of an attribute.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Current value of an attribute, when it is text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.attributes.get(name) {
            Some(AttributeValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Snapshot of the full attribute map.
    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// Names passed to set requests, in arrival order.
    pub fn set_order(&self) -> &[String] {
        &self.set_log
    }

    /// Names passed to delete requests, in arrival order.
    pub fn deletions(&self) -> &[String] {
        &self.delete_log
    }

    fn check_injected(&self, name: &str) -> Result<(), TargetError> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(TargetError::AttributeWrite {
                name: name.to_string(),
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl MetadataTarget for MemoryTarget {
    fn set_attribute(&mut self, name: &str, value: &AttributeValue) -> Result<(), TargetError> {
        self.check_injected(name)?;
        self.attributes.insert(name.to_string(), value.clone());
        self.set_log.push(name.to_string());
        Ok(())
    }

    fn delete_attribute(&mut self, name: &str) -> Result<bool, TargetError> {
        self.check_injected(name)?;
        self.delete_log.push(name.to_string());
        Ok(self.attributes.remove(name).is_some())
    }
}
