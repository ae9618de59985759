use crate::form::{select_options, FieldKind, FieldValue};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FormState, MountedForm};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, FormIntent::Mount { schema, values }) => {
                FormState::Mounted(MountedForm::new(schema, values))
            }
            (_, FormIntent::Unmount) => FormState::Unmounted,
            (FormState::Mounted(mut form), intent) => {
                apply(&mut form, intent);
                FormState::Mounted(form)
            }
            (FormState::Unmounted, intent) => {
                tracing::debug!(?intent, "intent ignored: no form mounted");
                FormState::Unmounted
            }
        }
    }
}

fn apply(form: &mut MountedForm, intent: FormIntent) {
    match intent {
        FormIntent::Mount { .. } | FormIntent::Unmount => {}
        FormIntent::Edit { name, value } => {
            if let Some(slot) = form.values.get_mut(&name) {
                *slot = value;
            } else {
                tracing::debug!(field = %name, "edit ignored: unknown field");
            }
        }
        FormIntent::Insert { name, ch } => edit_text(form, &name, |text| text.push(ch)),
        FormIntent::DeleteBack { name } => edit_text(form, &name, |text| {
            text.pop();
        }),
        FormIntent::Toggle { name } => match form.values.get_mut(&name) {
            Some(FieldValue::Bool(flag)) => *flag = !*flag,
            Some(other) => *other = FieldValue::Bool(!other.is_truthy()),
            None => tracing::debug!(field = %name, "toggle ignored: unknown field"),
        },
        FormIntent::CycleOption { name, forward } => cycle_option(form, &name, forward),
        FormIntent::Blur { name } => {
            if form.values.contains_key(&name) {
                form.validation.touch(&name);
            }
        }
        FormIntent::FocusNext => move_focus(form, true),
        FormIntent::FocusPrev => move_focus(form, false),
        FormIntent::SubmitAttempted => {
            let names: Vec<String> = form.values.keys().cloned().collect();
            for name in names {
                form.validation.touch(&name);
            }
            form.submit_count += 1;
        }
        FormIntent::Validated { errors } => form.validation.errors = errors,
    }
}

fn edit_text(form: &mut MountedForm, name: &str, edit: impl FnOnce(&mut String)) {
    let numeric = form.schema.get(name).is_some_and(|field| field.is_numeric());
    match form.values.get_mut(name) {
        Some(FieldValue::Bool(_)) => {
            tracing::debug!(field = %name, "text edit ignored: boolean field");
        }
        Some(value) => {
            let mut text = value.as_text();
            edit(&mut text);
            *value = FieldValue::from_edit(numeric, text);
        }
        None => tracing::debug!(field = %name, "text edit ignored: unknown field"),
    }
}

fn cycle_option(form: &mut MountedForm, name: &str, forward: bool) {
    let Some(Ok(FieldKind::Select(data))) = form.schema.get(name).map(|field| field.kind()) else {
        tracing::debug!(field = %name, "cycle ignored: not a select");
        return;
    };
    let options = select_options(data);
    let Some(value) = form.values.get_mut(name) else {
        return;
    };

    let current = value.as_text();
    let index = options
        .iter()
        .position(|option| option.value == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % options.len()
    } else if index == 0 {
        options.len() - 1
    } else {
        index - 1
    };
    *value = FieldValue::Text(options[next].value.clone());
}

fn move_focus(form: &mut MountedForm, forward: bool) {
    if let Some(name) = form.focused_field().map(|field| field.name.clone()) {
        form.validation.touch(&name);
    }

    let slots = form.slot_count();
    let mut next = form.focus;
    for _ in 0..slots {
        next = if forward {
            (next + 1) % slots
        } else if next == 0 {
            slots - 1
        } else {
            next - 1
        };
        if form.is_focusable(next) {
            break;
        }
    }
    form.focus = next;
}
