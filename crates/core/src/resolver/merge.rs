// Identity-keyed list merging shared by creation options, attributes, and
// field specs.

use crate::model::{Attribute, CreationOption, FieldSpec};

/// A record addressed by a stable identity key within its list.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for CreationOption {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Attribute {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for FieldSpec {
    fn key(&self) -> &str {
        self.identity()
    }
}

/// Merge `overrides` into `base` by identity key, leaving both inputs
/// untouched.
///
/// An override whose key already exists replaces that record in place, so
/// the base list keeps its order. Unknown keys append in override order.
/// Replacement is wholesale: no part of the base record survives.
pub fn merge_by_key<T: Keyed + Clone>(base: &[T], overrides: &[T]) -> Vec<T> {
    let mut merged = base.to_vec();

    for record in overrides {
        match merged
            .iter_mut()
            .find(|existing| existing.key() == record.key())
        {
            Some(slot) => *slot = record.clone(),
            None => merged.push(record.clone()),
        }
    }

    merged
}
