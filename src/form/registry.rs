//! Field renderer registry: maps a descriptor to its control.
//!
//! Dispatch is an exhaustive match over [`FieldKind`]. `component` fields
//! bypass rendering entirely, `select`/`textarea`/`checkbox` have their own
//! renderers, and every other type (including plain `text` and any string
//! the registry does not know) falls back to the generic input.

use crate::form::control::{
    CheckboxControl, Control, SelectControl, SelectOption, TextAreaControl, TextInputControl,
    PLACEHOLDER_LABEL, PLACEHOLDER_VALUE,
};
use crate::form::descriptor::{FieldDescriptor, FieldKind, FieldValue, ValueMap};
use crate::form::error::SchemaError;
use crate::form::validation::{should_show_error, ValidationState};

/// Render one field against the current values and validation state.
pub fn render_field(
    field: &FieldDescriptor,
    values: &ValueMap,
    validation: &ValidationState,
) -> Result<Control, SchemaError> {
    let value = values.get(&field.name);
    match field.kind()? {
        FieldKind::Component(control) => Ok(control.clone()),
        FieldKind::Select(data) => render_select(field, data, value, validation),
        FieldKind::TextArea => Ok(render_text_area(field, value, validation)),
        FieldKind::Checkbox => Ok(render_checkbox(field, value)),
        FieldKind::Generic(input_type) => Ok(render_generic(field, input_type, value, validation)),
    }
}

/// Option list of a select: the placeholder, then `data` in order.
pub fn select_options(data: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: PLACEHOLDER_VALUE.to_string(),
        label: PLACEHOLDER_LABEL.to_string(),
    })
    .chain(data.iter().map(|item| SelectOption {
        value: item.clone(),
        label: item.clone(),
    }))
    .collect()
}

fn render_generic(
    field: &FieldDescriptor,
    input_type: &str,
    value: Option<&FieldValue>,
    validation: &ValidationState,
) -> Control {
    Control::Input(TextInputControl {
        name: field.name.clone(),
        label: field.label.clone(),
        input_type: input_type.to_string(),
        value: value.map(FieldValue::as_text).unwrap_or_default(),
        multiline: field.multiline || field.rows.is_some(),
        rows: field.rows,
        min: field.min,
        max: field.max,
        error: should_show_error(&field.name, validation).map(str::to_string),
    })
}

fn render_select(
    field: &FieldDescriptor,
    data: &[String],
    value: Option<&FieldValue>,
    validation: &ValidationState,
) -> Result<Control, SchemaError> {
    if data.iter().any(|item| item == PLACEHOLDER_VALUE) {
        return Err(SchemaError::PlaceholderCollision {
            field: field.name.clone(),
        });
    }

    let options = select_options(data);
    let current = value.map(FieldValue::as_text);
    let selected = current
        .and_then(|current| options.iter().position(|option| option.value == current))
        .unwrap_or(0);

    Ok(Control::Select(SelectControl {
        name: field.name.clone(),
        label: field.label.clone(),
        options,
        selected,
        has_error: should_show_error(&field.name, validation).is_some(),
    }))
}

// Validation state is intentionally not consulted here.
fn render_checkbox(field: &FieldDescriptor, value: Option<&FieldValue>) -> Control {
    Control::Checkbox(CheckboxControl {
        name: field.name.clone(),
        label: field.label.clone(),
        checked: value.is_some_and(FieldValue::is_truthy),
    })
}

fn render_text_area(
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
    validation: &ValidationState,
) -> Control {
    Control::TextArea(TextAreaControl {
        name: field.name.clone(),
        label: field.label.clone(),
        value: value.map(FieldValue::as_text).unwrap_or_default(),
        has_error: should_show_error(&field.name, validation).is_some(),
        full_width: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::control::NoteControl;
    use crate::form::descriptor::FieldType;

    fn errored_and_touched(name: &str) -> ValidationState {
        let mut state = ValidationState::default();
        state.errors.insert(name.into(), "Invalid".into());
        state.touch(name);
        state
    }

    #[test]
    fn unknown_type_uses_generic_input() {
        let field = FieldDescriptor::new("when", FieldType::parse("datetime-local"));
        let control = render_field(&field, &ValueMap::new(), &ValidationState::default()).unwrap();
        match control {
            Control::Input(input) => assert_eq!(input.input_type, "datetime-local"),
            other => panic!("expected input, got {other:?}"),
        }
    }

    #[test]
    fn component_is_returned_unchanged() {
        let note = Control::Note(NoteControl::new("Terms apply"));
        let field =
            FieldDescriptor::new("terms", FieldType::Component).with_component(note.clone());
        let control =
            render_field(&field, &ValueMap::new(), &errored_and_touched("terms")).unwrap();
        assert_eq!(control, note);
    }

    #[test]
    fn component_without_control_fails() {
        let field = FieldDescriptor::new("terms", FieldType::Component);
        let err = render_field(&field, &ValueMap::new(), &ValidationState::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingComponent {
                field: "terms".into()
            }
        );
    }

    #[test]
    fn select_prepends_placeholder() {
        let field = FieldDescriptor::new("grade", FieldType::Select).with_options(["A", "B"]);
        let control = render_field(&field, &ValueMap::new(), &ValidationState::default()).unwrap();
        let Control::Select(select) = control else {
            panic!("expected select");
        };
        let values: Vec<&str> = select.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec![PLACEHOLDER_VALUE, "A", "B"]);
        assert_eq!(select.options[0].label, PLACEHOLDER_LABEL);
        assert_eq!(select.selected, 0);
    }

    #[test]
    fn select_marks_current_value_and_error() {
        let field = FieldDescriptor::new("grade", FieldType::Select).with_options(["A", "B"]);
        let mut values = ValueMap::new();
        values.insert("grade".into(), FieldValue::from("B"));
        let control = render_field(&field, &values, &errored_and_touched("grade")).unwrap();
        let Control::Select(select) = control else {
            panic!("expected select");
        };
        assert_eq!(select.selected, 2);
        assert!(select.has_error);
    }

    #[test]
    fn select_rejects_placeholder_in_data() {
        let field = FieldDescriptor::new("grade", FieldType::Select).with_options(["", "A"]);
        assert!(matches!(
            render_field(&field, &ValueMap::new(), &ValidationState::default()),
            Err(SchemaError::PlaceholderCollision { .. })
        ));
    }

    #[test]
    fn checkbox_ignores_validation() {
        let field = FieldDescriptor::new("subscribe", FieldType::Checkbox);
        let mut values = ValueMap::new();
        values.insert("subscribe".into(), FieldValue::Bool(true));
        let control = render_field(&field, &values, &errored_and_touched("subscribe")).unwrap();
        assert!(!control.shows_error());
        assert!(matches!(control, Control::Checkbox(CheckboxControl { checked: true, .. })));
    }

    #[test]
    fn generic_input_carries_constraints_and_error() {
        let field = FieldDescriptor::new("age", FieldType::Text)
            .with_value(0i64)
            .with_bounds(0.0, 120.0);
        let mut values = ValueMap::new();
        values.insert("age".into(), FieldValue::Number(130.0));
        let control = render_field(&field, &values, &errored_and_touched("age")).unwrap();
        let Control::Input(input) = control else {
            panic!("expected input");
        };
        assert_eq!(input.value, "130");
        assert_eq!((input.min, input.max), (Some(0.0), Some(120.0)));
        assert_eq!(input.error.as_deref(), Some("Invalid"));
        assert!(!input.multiline);
    }

    #[test]
    fn rows_make_generic_input_multiline() {
        let field = FieldDescriptor::new("notes", FieldType::Text).with_rows(3);
        let control = render_field(&field, &ValueMap::new(), &ValidationState::default()).unwrap();
        assert!(matches!(
            control,
            Control::Input(TextInputControl {
                multiline: true,
                rows: Some(3),
                ..
            })
        ));
    }

    #[test]
    fn text_area_is_full_width() {
        let field = FieldDescriptor::new("bio", FieldType::TextArea);
        let control = render_field(&field, &ValueMap::new(), &errored_and_touched("bio")).unwrap();
        assert!(matches!(
            control,
            Control::TextArea(TextAreaControl {
                full_width: true,
                has_error: true,
                ..
            })
        ));
    }
}
