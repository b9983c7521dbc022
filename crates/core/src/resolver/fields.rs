// Field binding - matches field specs to the data fields and implicit
// variables of one layer before any feature is written.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::FieldSpec;
use crate::writer::{FieldHandle, LayerWriter, TargetError, VariableHandle};

/// Geometry class of the layer, as far as field indexing is concerned.
/// Point layers index every field by the record dimension, so they never
/// honor a `main_dim` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Point,
    NonPoint,
}

/// What a field spec resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingTarget {
    /// An explicit data field of the layer.
    DataField(FieldHandle),
    /// A variable the writer creates without a backing data field.
    ImplicitVariable(VariableHandle),
}

/// A field spec bound to exactly one write target.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
    pub spec: FieldSpec,
    pub target: BindingTarget,
    /// Output name for data-field bindings that rename, `None` to keep the
    /// field's own name.
    pub variable_name: Option<String>,
    /// Indexing dimension override, already filtered by geometry kind.
    pub main_dim: Option<String>,
}

/// A field spec that matched nothing in the layer. Fatal for the layer
/// being bound; other layers are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldMatchError {
    #[error("field spec targets data field '{name}' but the layer has no such field")]
    UnknownField { name: String },
    #[error("field spec targets implicit variable '{role}' but the layer does not provide it")]
    UnknownImplicitRole { role: String },
}

/// Bind every field spec of a layer to its write target.
///
/// A spec carrying `ogr_name` must match a data field of that exact name. A
/// spec carrying only `netcdf_name` must match an implicit variable role and
/// never an explicit data field. The first spec that matches nothing aborts
/// the whole layer.
pub fn bind_fields<W>(
    specs: &[FieldSpec],
    writer: &W,
    geometry: GeometryKind,
) -> Result<Vec<FieldBinding>, FieldMatchError>
where
    W: LayerWriter + ?Sized,
{
    let mut bindings = Vec::with_capacity(specs.len());
    for spec in specs {
        bindings.push(bind_field(spec, writer, geometry)?);
    }
    Ok(bindings)
}

fn bind_field<W>(
    spec: &FieldSpec,
    writer: &W,
    geometry: GeometryKind,
) -> Result<FieldBinding, FieldMatchError>
where
    W: LayerWriter + ?Sized,
{
    let (target, variable_name) = match spec.ogr_name.as_deref() {
        Some(name) => {
            let handle =
                writer
                    .lookup_field(name)
                    .ok_or_else(|| FieldMatchError::UnknownField {
                        name: name.to_string(),
                    })?;
            (BindingTarget::DataField(handle), spec.netcdf_name.clone())
        }
        None => {
            // identity invariant: netcdf_name is present when ogr_name is not
            let role = spec.netcdf_name.as_deref().unwrap_or_default();
            let handle = writer.resolve_implicit_variable(role).ok_or_else(|| {
                FieldMatchError::UnknownImplicitRole {
                    role: role.to_string(),
                }
            })?;
            (BindingTarget::ImplicitVariable(handle), None)
        }
    };

    let main_dim = match (&spec.main_dim, geometry) {
        (Some(dimension), GeometryKind::Point) => {
            warn!(
                field = %spec.identity(),
                dimension = %dimension,
                "main_dim ignored: point layers index fields by the record dimension"
            );
            None
        }
        (dimension, _) => dimension.clone(),
    };

    debug!(field = %spec.identity(), ?target, "bound field spec");

    Ok(FieldBinding {
        spec: spec.clone(),
        target,
        variable_name,
        main_dim,
    })
}

/// Issue a variable definition for every data-field binding that overrides
/// the indexing dimension. Implicit variables are already defined by the
/// writer and are never redefined here.
pub fn define_bound_variables<W>(
    bindings: &[FieldBinding],
    writer: &mut W,
) -> Result<(), TargetError>
where
    W: LayerWriter + ?Sized,
{
    for binding in bindings {
        if let (BindingTarget::DataField(handle), Some(dimension)) =
            (binding.target, binding.main_dim.as_deref())
        {
            writer.define_variable(handle, dimension)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubLayer {
        fields: Vec<&'static str>,
        implicit: Vec<&'static str>,
        defined: Vec<(FieldHandle, String)>,
    }

    impl StubLayer {
        fn new(fields: &[&'static str], implicit: &[&'static str]) -> Self {
            Self {
                fields: fields.to_vec(),
                implicit: implicit.to_vec(),
                defined: Vec::new(),
            }
        }
    }

    impl LayerWriter for StubLayer {
        fn lookup_field(&self, name: &str) -> Option<FieldHandle> {
            self.fields
                .iter()
                .position(|field| *field == name)
                .map(|index| FieldHandle(index as i32))
        }

        fn resolve_implicit_variable(&self, role: &str) -> Option<VariableHandle> {
            self.implicit
                .iter()
                .position(|implicit| *implicit == role)
                .map(|index| VariableHandle(index as i32))
        }

        fn define_variable(
            &mut self,
            field: FieldHandle,
            dimension: &str,
        ) -> Result<(), TargetError> {
            self.defined.push((field, dimension.to_string()));
            Ok(())
        }
    }

    #[test]
    fn binds_a_named_field_with_rename() {
        let layer = StubLayer::new(&["speed", "heading"], &[]);
        let mut spec = FieldSpec::for_field("heading");
        spec.netcdf_name = Some("bearing".to_string());

        let bindings =
            bind_fields(&[spec], &layer, GeometryKind::NonPoint).expect("must bind");

        assert_eq!(bindings[0].target, BindingTarget::DataField(FieldHandle(1)));
        assert_eq!(bindings[0].variable_name.as_deref(), Some("bearing"));
    }

    #[test]
    fn netcdf_only_spec_binds_the_implicit_variable_not_a_field() {
        // the layer also has a data field called "lon"; a netcdf-only
        // entry must never match it
        let layer = StubLayer::new(&["lon"], &["lon"]);

        let bindings = bind_fields(
            &[FieldSpec::for_variable("lon")],
            &layer,
            GeometryKind::NonPoint,
        )
        .expect("must bind");

        assert_eq!(
            bindings[0].target,
            BindingTarget::ImplicitVariable(VariableHandle(0))
        );
        assert_eq!(bindings[0].variable_name, None);
    }

    #[test]
    fn unknown_field_name_aborts_the_layer() {
        let layer = StubLayer::new(&["speed"], &[]);
        let specs = vec![FieldSpec::for_field("speed"), FieldSpec::for_field("ghost")];

        let error =
            bind_fields(&specs, &layer, GeometryKind::NonPoint).expect_err("must abort");

        assert_eq!(
            error,
            FieldMatchError::UnknownField {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn unknown_implicit_role_aborts_the_layer() {
        let layer = StubLayer::new(&["speed"], &[]);

        let error = bind_fields(
            &[FieldSpec::for_variable("depth")],
            &layer,
            GeometryKind::NonPoint,
        )
        .expect_err("must abort");

        assert_eq!(
            error,
            FieldMatchError::UnknownImplicitRole {
                role: "depth".to_string()
            }
        );
    }

    #[test]
    fn main_dim_is_dropped_on_point_layers() {
        let layer = StubLayer::new(&["speed"], &[]);
        let mut spec = FieldSpec::for_field("speed");
        spec.main_dim = Some("profile".to_string());

        let bindings =
            bind_fields(&[spec.clone()], &layer, GeometryKind::Point).expect("must bind");
        assert_eq!(bindings[0].main_dim, None);

        let bindings = bind_fields(&[spec], &layer, GeometryKind::NonPoint).expect("must bind");
        assert_eq!(bindings[0].main_dim.as_deref(), Some("profile"));
    }

    #[test]
    fn define_bound_variables_touches_only_overridden_data_fields() {
        let mut layer = StubLayer::new(&["speed", "depth"], &["lon"]);

        let mut with_override = FieldSpec::for_field("depth");
        with_override.main_dim = Some("profile".to_string());

        let specs = vec![
            FieldSpec::for_field("speed"),
            with_override,
            FieldSpec::for_variable("lon"),
        ];
        let bindings =
            bind_fields(&specs, &layer, GeometryKind::NonPoint).expect("must bind");

        define_bound_variables(&bindings, &mut layer).expect("definitions accepted");

        assert_eq!(layer.defined, vec![(FieldHandle(1), "profile".to_string())]);
    }
}
