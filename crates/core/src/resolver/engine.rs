// Resolver engine - dataset passthrough and per-layer effective
// configuration, derived once per layer and cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::applier::{apply_attributes, ApplyError, ApplyReport};
use crate::model::{Attribute, CreationOption, FieldSpec, GlobalConfig};
use crate::resolver::merge::merge_by_key;
use crate::writer::MetadataTarget;

/// Dataset-scope view. There is no higher-precedence scope, so the lists
/// are exposed as stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetConfig<'a> {
    pub creation_options: &'a [CreationOption],
    pub attributes: &'a [Attribute],
}

/// Effective configuration of one layer: the dataset-wide lists merged with
/// the layer's own spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveLayerConfig {
    pub creation_options: Vec<CreationOption>,
    pub attributes: Vec<Attribute>,
    pub fields: Vec<FieldSpec>,
    /// Output group for the layer, when its spec redirects it from the root.
    pub netcdf_group_name: Option<String>,
}

impl EffectiveLayerConfig {
    pub fn creation_option(&self, name: &str) -> Option<&CreationOption> {
        self.creation_options
            .iter()
            .find(|option| option.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }

    pub fn field(&self, identity: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.identity() == identity)
    }
}

/// Layer resolution requested out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Dataset attributes must be applied before any layer resolves, so
    /// configuration problems surface before feature data is written.
    #[error("layer '{layer}' resolved before dataset attributes were applied")]
    DatasetPending { layer: String },
}

/// Owns the immutable configuration and derives per-layer views on demand.
#[derive(Debug)]
pub struct ConfigResolver {
    config: GlobalConfig,
    dataset_applied: bool,
    layers: BTreeMap<String, EffectiveLayerConfig>,
}

impl ConfigResolver {
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            config,
            dataset_applied: false,
            layers: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Dataset-scope lists for the writer to consume when creating the
    /// output container.
    pub fn dataset(&self) -> DatasetConfig<'_> {
        DatasetConfig {
            creation_options: &self.config.dataset_creation_options,
            attributes: &self.config.attributes,
        }
    }

    /// Apply the dataset-wide attributes to the root target and unlock
    /// layer resolution.
    pub fn apply_dataset(
        &mut self,
        target: &mut dyn MetadataTarget,
    ) -> Result<ApplyReport, ApplyError> {
        let report = apply_attributes(&self.config.attributes, target)?;
        self.dataset_applied = true;
        Ok(report)
    }

    /// Effective configuration for the named layer, derived on first
    /// request and cached for the resolver's lifetime.
    ///
    /// A layer without an explicit spec inherits the dataset-wide layer
    /// settings unchanged. Asking before [`apply_dataset`] has succeeded is
    /// an ordering error.
    ///
    /// [`apply_dataset`]: ConfigResolver::apply_dataset
    pub fn resolve_layer(&mut self, name: &str) -> Result<&EffectiveLayerConfig, ResolveError> {
        if !self.dataset_applied {
            return Err(ResolveError::DatasetPending {
                layer: name.to_string(),
            });
        }

        let effective = self
            .layers
            .entry(name.to_string())
            .or_insert_with(|| derive_layer(&self.config, name));

        Ok(&*effective)
    }

    /// Number of distinct layers resolved so far.
    pub fn resolved_layers(&self) -> usize {
        self.layers.len()
    }
}

fn derive_layer(config: &GlobalConfig, name: &str) -> EffectiveLayerConfig {
    let effective = match config.layers.get(name) {
        Some(layer) => EffectiveLayerConfig {
            creation_options: merge_by_key(&config.layer_creation_options, &layer.creation_options),
            attributes: merge_by_key(&config.attributes, &layer.attributes),
            fields: merge_by_key(&config.fields, &layer.fields),
            netcdf_group_name: layer.netcdf_group_name.clone(),
        },
        None => EffectiveLayerConfig {
            creation_options: config.layer_creation_options.clone(),
            attributes: config.attributes.clone(),
            fields: config.fields.clone(),
            netcdf_group_name: None,
        },
    };

    debug!(
        layer = %name,
        options = effective.creation_options.len(),
        attributes = effective.attributes.len(),
        fields = effective.fields.len(),
        "derived effective layer configuration"
    );

    effective
}
