use std::sync::Arc;

use crate::form::{FieldErrors, FieldValue, FormSchema, ValueMap};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Start a form with values derived from its schema.
    Mount {
        schema: Arc<FormSchema>,
        values: ValueMap,
    },
    Unmount,
    /// Replace a field's value.
    Edit { name: String, value: FieldValue },
    /// Append a character to a text or number field.
    Insert { name: String, ch: char },
    /// Remove the last character of a text or number field.
    DeleteBack { name: String },
    /// Flip a checkbox.
    Toggle { name: String },
    /// Step through a select's options, placeholder included, wrapping.
    CycleOption { name: String, forward: bool },
    /// The user left the field.
    Blur { name: String },
    /// Move focus forward, blurring the field being left.
    FocusNext,
    /// Move focus backward, blurring the field being left.
    FocusPrev,
    /// Touches every field.
    SubmitAttempted,
    /// Result of a validation pass.
    Validated { errors: FieldErrors },
}

impl Intent for FormIntent {}
