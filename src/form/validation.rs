//! Binding between validation results and what the form displays.

use std::collections::{BTreeMap, BTreeSet};

use crate::form::descriptor::ValueMap;

/// Field name → error message, as returned by a [`Validator`].
pub type FieldErrors = BTreeMap<String, String>;

/// Errors from the last validation pass plus the fields the user has
/// interacted with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationState {
    pub errors: FieldErrors,
    pub touched: BTreeSet<String>,
}

impl ValidationState {
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Mark a field as touched. Returns `true` if it was not touched before.
    pub fn touch(&mut self, name: &str) -> bool {
        self.touched.insert(name.to_string())
    }
}

/// Message to display for `name`, if any.
///
/// Errors stay hidden until the field is touched, so an untouched field
/// never shows a message even when it is invalid.
pub fn should_show_error<'a>(name: &str, state: &'a ValidationState) -> Option<&'a str> {
    let message = state.errors.get(name)?;
    if message.is_empty() || !state.is_touched(name) {
        return None;
    }
    Some(message)
}

/// Whether any field is both errored and touched.
pub fn has_visible_errors(state: &ValidationState) -> bool {
    state
        .errors
        .keys()
        .any(|name| should_show_error(name, state).is_some())
}

/// Validation engine consulted after every change and on submit.
pub trait Validator {
    fn validate(&self, values: &ValueMap) -> FieldErrors;
}

impl<F> Validator for F
where
    F: Fn(&ValueMap) -> FieldErrors,
{
    fn validate(&self, values: &ValueMap) -> FieldErrors {
        self(values)
    }
}
