use crate::form::control::Control;
use crate::form::descriptor::{FormSchema, ValueMap};
use crate::form::error::SchemaError;
use crate::form::initial::derive_initial_values;
use crate::form::registry::render_field;
use crate::form::validation::{has_visible_errors, ValidationState};

/// Banner text shown while any touched field has an error.
pub const ERROR_BANNER: &str = "Please correct the errors below";

/// Outcome of rendering one descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedField {
    Control(Control),
    /// The descriptor broke its renderer's contract; shown in place.
    Failed { name: String, error: SchemaError },
}

impl RenderedField {
    pub fn control(&self) -> Option<&Control> {
        match self {
            Self::Control(control) => Some(control),
            Self::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
}

/// Everything one render pass of a form produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree {
    /// Set while any field is both errored and touched.
    pub error_banner: Option<&'static str>,
    /// One entry per descriptor, in schema order.
    pub fields: Vec<RenderedField>,
    pub submit: SubmitControl,
}

impl RenderTree {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &SchemaError)> {
        self.fields.iter().filter_map(|field| match field {
            RenderedField::Failed { name, error } => Some((name.as_str(), error)),
            RenderedField::Control(_) => None,
        })
    }
}

/// Compose one render pass.
///
/// Pure: called by the host container every time its state changes. A
/// field whose descriptor is broken is reported in place and does not
/// stop its siblings from rendering.
pub fn compose(
    schema: &FormSchema,
    values: &ValueMap,
    validation: &ValidationState,
    submit_label: &str,
) -> RenderTree {
    let fields = schema
        .iter()
        .map(|field| match render_field(field, values, validation) {
            Ok(control) => RenderedField::Control(control),
            Err(error) => {
                tracing::warn!(field = %field.name, %error, "field not rendered");
                RenderedField::Failed {
                    name: field.name.clone(),
                    error,
                }
            }
        })
        .collect();

    RenderTree {
        error_banner: has_visible_errors(validation).then_some(ERROR_BANNER),
        fields,
        submit: SubmitControl {
            label: submit_label.to_string(),
        },
    }
}

/// Every contract problem in a schema: repeated names first, then fields
/// that would fail to render.
pub fn check_schema(schema: &FormSchema) -> Vec<SchemaError> {
    let duplicates = schema
        .duplicate_names()
        .into_iter()
        .map(|name| SchemaError::DuplicateName {
            field: name.to_string(),
        });
    let values = derive_initial_values(schema);
    let validation = ValidationState::default();
    let broken = schema
        .iter()
        .filter_map(|field| render_field(field, &values, &validation).err());
    duplicates.chain(broken).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::descriptor::{FieldDescriptor, FieldType};

    #[test]
    fn broken_field_does_not_stop_siblings() {
        let schema = FormSchema::new(vec![
            FieldDescriptor::new("first", FieldType::Text),
            FieldDescriptor::new("broken", FieldType::Select),
            FieldDescriptor::new("last", FieldType::Checkbox),
        ]);
        let values = derive_initial_values(&schema);
        let tree = compose(&schema, &values, &ValidationState::default(), "Send");

        assert_eq!(tree.fields.len(), 3);
        assert!(tree.fields[0].control().is_some());
        assert!(tree.fields[2].control().is_some());
        let failures: Vec<_> = tree.failures().map(|(name, _)| name).collect();
        assert_eq!(failures, vec!["broken"]);
        assert_eq!(tree.submit.label, "Send");
    }

    #[test]
    fn banner_follows_touched_errors() {
        let schema = FormSchema::new(vec![FieldDescriptor::new("email", FieldType::Text)]);
        let values = derive_initial_values(&schema);
        let mut validation = ValidationState::default();
        validation.errors.insert("email".into(), "Required".into());

        assert_eq!(compose(&schema, &values, &validation, "Go").error_banner, None);
        validation.touch("email");
        assert_eq!(
            compose(&schema, &values, &validation, "Go").error_banner,
            Some(ERROR_BANNER)
        );
    }

    #[test]
    fn check_schema_lists_duplicates_then_broken_fields() {
        let schema = FormSchema::new(vec![
            FieldDescriptor::new("a", FieldType::Text),
            FieldDescriptor::new("pick", FieldType::Select),
            FieldDescriptor::new("a", FieldType::Text),
        ]);
        assert_eq!(
            check_schema(&schema),
            vec![
                SchemaError::DuplicateName { field: "a".into() },
                SchemaError::MissingOptions {
                    field: "pick".into()
                },
            ]
        );
    }
}
