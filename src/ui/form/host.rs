use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::form::{
    bound_errors, compose, derive_initial_values, FieldDescriptor, FieldErrors, FieldValue,
    FormSchema, RenderTree, ValidationState, Validator, ValueMap,
};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::reducer::FormReducer;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;

const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// Whether a submit attempt with validation errors still reaches the
/// submit handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    #[default]
    BlockOnErrors,
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler ran with the current value map.
    Submitted,
    /// Validation failed under [`SubmitPolicy::BlockOnErrors`].
    Blocked { errors: FieldErrors },
    NotMounted,
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusTarget<'a> {
    Field(&'a FieldDescriptor),
    Submit,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Form-state container for one form.
///
/// Every intent is reduced and then followed by a synchronous validation
/// pass, so a render after `dispatch` always reflects the latest errors.
pub struct FormHost {
    state: FormState,
    validator: Box<dyn Validator>,
    on_submit: Box<dyn FnMut(&ValueMap)>,
    submit_label: String,
    policy: SubmitPolicy,
}

impl FormHost {
    /// Mount a form. Initial values are derived here, once.
    pub fn mount(
        schema: impl Into<Arc<FormSchema>>,
        validator: impl Validator + 'static,
        on_submit: impl FnMut(&ValueMap) + 'static,
    ) -> Self {
        let schema = schema.into();
        for name in schema.duplicate_names() {
            tracing::warn!(field = name, "duplicate field name; first value wins");
        }
        let values = derive_initial_values(&schema);
        tracing::info!(fields = schema.len(), "form mounted");

        let mut host = Self {
            state: FormState::default(),
            validator: Box::new(validator),
            on_submit: Box::new(on_submit),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            policy: SubmitPolicy::default(),
        };
        host.dispatch(FormIntent::Mount { schema, values });
        host
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reduce an intent, then re-validate. Validation merges the
    /// validator's messages with the descriptors' own numeric bounds; the
    /// validator's message wins when both report a field.
    pub fn dispatch(&mut self, intent: FormIntent) {
        let revalidate = !matches!(intent, FormIntent::Validated { .. } | FormIntent::Unmount);
        dispatch_mvi!(self, state, FormReducer, intent);
        if revalidate {
            self.revalidate();
        }
    }

    /// Touch every field, validate, and call the submit handler if the
    /// policy allows it.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.state.is_mounted() {
            return SubmitOutcome::NotMounted;
        }
        self.dispatch(FormIntent::SubmitAttempted);

        let Some(form) = self.state.mounted() else {
            return SubmitOutcome::NotMounted;
        };
        let errors: FieldErrors = form
            .validation
            .errors
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(name, message)| (name.clone(), message.clone()))
            .collect();
        if self.policy == SubmitPolicy::BlockOnErrors && !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "submit blocked by validation errors");
            return SubmitOutcome::Blocked { errors };
        }

        tracing::info!(attempt = form.submit_count, "form submitted");
        (self.on_submit)(&form.values);
        SubmitOutcome::Submitted
    }

    pub fn unmount(&mut self) {
        self.dispatch(FormIntent::Unmount);
    }

    /// Compose the current render pass. Empty when unmounted.
    pub fn render(&self) -> RenderTree {
        match self.state.mounted() {
            Some(form) => compose(
                &form.schema,
                &form.values,
                &form.validation,
                &self.submit_label,
            ),
            None => compose(
                &FormSchema::default(),
                &ValueMap::new(),
                &ValidationState::default(),
                &self.submit_label,
            ),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> Option<&ValueMap> {
        self.state.mounted().map(|form| &form.values)
    }

    pub fn validation(&self) -> Option<&ValidationState> {
        self.state.mounted().map(|form| &form.validation)
    }

    pub fn focus(&self) -> Option<FocusTarget<'_>> {
        let form = self.state.mounted()?;
        Some(match form.focused_field() {
            Some(field) => FocusTarget::Field(field),
            None => FocusTarget::Submit,
        })
    }

    /// Index of the focused slot; the submit button is the last slot.
    pub fn focus_index(&self) -> Option<usize> {
        self.state.mounted().map(|form| form.focus)
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.dispatch(FormIntent::Edit {
            name: name.to_string(),
            value: value.into(),
        });
    }

    pub fn toggle(&mut self, name: &str) {
        self.dispatch(FormIntent::Toggle {
            name: name.to_string(),
        });
    }

    pub fn blur(&mut self, name: &str) {
        self.dispatch(FormIntent::Blur {
            name: name.to_string(),
        });
    }

    /// Type `text` into a field one character at a time.
    pub fn type_text(&mut self, name: &str, text: &str) {
        for ch in text.chars() {
            self.dispatch(FormIntent::Insert {
                name: name.to_string(),
                ch,
            });
        }
    }

    fn revalidate(&mut self) {
        let Some(form) = self.state.mounted() else {
            return;
        };
        // Empty messages mean "no error", as in the display rules.
        let mut errors = self.validator.validate(&form.values);
        errors.retain(|_, message| !message.is_empty());
        for (name, message) in bound_errors(&form.schema, &form.values) {
            errors.entry(name).or_insert(message);
        }
        if errors != form.validation.errors {
            dispatch_mvi!(self, state, FormReducer, FormIntent::Validated { errors });
        }
    }
}

impl std::fmt::Debug for FormHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHost")
            .field("state", &self.state)
            .field("submit_label", &self.submit_label)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
