use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Attribute, AttributeType};
use crate::writer::{MetadataTarget, TargetError};

/// Outcome of one application pass over an attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Attributes set or overwritten.
    pub set: usize,
    /// Delete requests that removed an existing attribute.
    pub deleted: usize,
    /// Records skipped because their value does not parse as the declared
    /// type.
    pub skipped: Vec<SkippedAttribute>,
}

impl ApplyReport {
    pub fn clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Diagnostic record for one recoverable skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAttribute {
    pub name: String,
    pub value: String,
    pub kind: AttributeType,
}

/// The target rejected a request. Fatal for the pass; records before the
/// failing one have already been applied.
#[derive(Debug, Error)]
#[error("applying attribute '{name}' failed")]
pub struct ApplyError {
    pub name: String,
    #[source]
    pub source: TargetError,
}

/// Apply an attribute list to `target` in list order.
///
/// Empty values request deletion, and deleting an absent attribute is a
/// no-op. Other values are coerced to their declared type and set,
/// overwriting any prior value and type. A value that fails coercion is
/// skipped with a warning so one bad record does not abort the pass.
pub fn apply_attributes(
    attributes: &[Attribute],
    target: &mut dyn MetadataTarget,
) -> Result<ApplyReport, ApplyError> {
    let mut report = ApplyReport::default();

    for attribute in attributes {
        if attribute.is_delete_request() {
            let existed = target
                .delete_attribute(&attribute.name)
                .map_err(|source| ApplyError {
                    name: attribute.name.clone(),
                    source,
                })?;
            if existed {
                report.deleted += 1;
            }
            continue;
        }

        let value = match attribute.coerced_value() {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    attribute = %attribute.name,
                    value = %attribute.value,
                    declared = %attribute.kind,
                    "skipping attribute: {error}"
                );
                report.skipped.push(SkippedAttribute {
                    name: attribute.name.clone(),
                    value: attribute.value.clone(),
                    kind: attribute.kind,
                });
                continue;
            }
        };

        target
            .set_attribute(&attribute.name, &value)
            .map_err(|source| ApplyError {
                name: attribute.name.clone(),
                source,
            })?;
        report.set += 1;
    }

    debug!(
        set = report.set,
        deleted = report.deleted,
        skipped = report.skipped.len(),
        "attribute pass finished"
    );

    Ok(report)
}
