use std::sync::Arc;

use crate::form::{FieldDescriptor, FieldType, FormSchema, ValidationState, ValueMap};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Unmounted,
    Mounted(MountedForm),
}

impl UiState for FormState {}

impl FormState {
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    pub fn mounted(&self) -> Option<&MountedForm> {
        match self {
            Self::Mounted(form) => Some(form),
            Self::Unmounted => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountedForm {
    pub schema: Arc<FormSchema>,
    pub values: ValueMap,
    pub validation: ValidationState,
    /// Index into the schema; `schema.len()` is the submit button.
    pub focus: usize,
    pub submit_count: u32,
}

impl MountedForm {
    pub fn new(schema: Arc<FormSchema>, values: ValueMap) -> Self {
        let focus = (0..schema.len())
            .find(|&index| is_focusable(&schema.fields()[index]))
            .unwrap_or(schema.len());
        Self {
            schema,
            values,
            validation: ValidationState::default(),
            focus,
            submit_count: 0,
        }
    }

    /// Number of focus slots: every field plus the submit button.
    pub fn slot_count(&self) -> usize {
        self.schema.len() + 1
    }

    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        self.schema.fields().get(self.focus)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus == self.schema.len()
    }

    /// Whether the slot at `index` can take focus.
    pub fn is_focusable(&self, index: usize) -> bool {
        match self.schema.fields().get(index) {
            Some(field) => is_focusable(field),
            None => index == self.schema.len(),
        }
    }
}

// Components are caller-rendered and never receive input.
fn is_focusable(field: &FieldDescriptor) -> bool {
    field.kind != FieldType::Component
}
