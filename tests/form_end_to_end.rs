mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::signup_schema;
use schemaform::form::{
    FieldDescriptor, FieldErrors, FieldRules, FieldType, FieldValue, FormRules, FormSchema,
    ValueMap,
};
use schemaform::ui::form::{FormHost, FormIntent, SubmitOutcome};

type Submissions = Rc<RefCell<Vec<ValueMap>>>;

fn recording_host(schema: FormSchema, rules: FormRules) -> (FormHost, Submissions) {
    let submissions: Submissions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submissions);
    let host = FormHost::mount(schema, rules, move |values: &ValueMap| {
        sink.borrow_mut().push(values.clone());
    });
    (host, submissions)
}

fn value_map(entries: &[(&str, FieldValue)]) -> ValueMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn initial_values_come_from_the_schema() {
    let (host, _) = recording_host(signup_schema(), FormRules::new());
    assert_eq!(
        host.values().unwrap(),
        &value_map(&[
            ("email", FieldValue::from("")),
            ("age", FieldValue::Number(0.0)),
        ])
    );
}

#[test]
fn valid_submit_calls_handler_once_with_values() {
    let rules = FormRules::new()
        .with(
            "email",
            FieldRules {
                email: true,
                ..FieldRules::required()
            },
        )
        .with(
            "age",
            FieldRules {
                min: Some(0.0),
                max: Some(120.0),
                ..FieldRules::default()
            },
        );
    let (mut host, submissions) = recording_host(signup_schema(), rules);

    host.type_text("email", "x@y.com");
    host.dispatch(FormIntent::DeleteBack { name: "age".into() });
    host.type_text("age", "30");

    assert_eq!(host.submit(), SubmitOutcome::Submitted);
    let submissions = submissions.borrow();
    assert_eq!(submissions.len(), 1);
    assert_eq!(
        submissions[0],
        value_map(&[
            ("email", FieldValue::from("x@y.com")),
            ("age", FieldValue::Number(30.0)),
        ])
    );
    assert_eq!(
        serde_json::to_value(&submissions[0]).unwrap(),
        serde_json::json!({ "email": "x@y.com", "age": 30 })
    );
}

#[test]
fn invalid_submit_is_blocked_and_reveals_errors() {
    let rules = FormRules::new().with("email", FieldRules::required());
    let (mut host, submissions) = recording_host(signup_schema(), rules);

    let tree = host.render();
    assert!(tree.error_banner.is_none());

    match host.submit() {
        SubmitOutcome::Blocked { errors } => assert_eq!(errors["email"], "Required"),
        other => panic!("expected blocked submit, got {other:?}"),
    }
    assert!(submissions.borrow().is_empty());

    let tree = host.render();
    assert!(tree.error_banner.is_some());
    let email = tree.fields[0].control().unwrap();
    assert!(email.shows_error());
}

#[test]
fn fixing_errors_lets_the_next_submit_through() {
    let rules = FormRules::new().with("email", FieldRules::required());
    let (mut host, submissions) = recording_host(signup_schema(), rules);

    assert!(matches!(host.submit(), SubmitOutcome::Blocked { .. }));
    host.type_text("email", "a@b.co");
    assert!(host.render().error_banner.is_none());
    assert_eq!(host.submit(), SubmitOutcome::Submitted);
    assert_eq!(submissions.borrow().len(), 1);
}

#[test]
fn descriptor_bounds_block_out_of_range_numbers() {
    let (mut host, submissions) = recording_host(signup_schema(), FormRules::new());

    host.dispatch(FormIntent::DeleteBack { name: "age".into() });
    host.type_text("age", "130");

    match host.submit() {
        SubmitOutcome::Blocked { errors } => assert_eq!(errors["age"], "Must be at most 120"),
        other => panic!("expected blocked submit, got {other:?}"),
    }
    assert!(submissions.borrow().is_empty());
    assert!(host.render().fields[1].control().unwrap().shows_error());

    host.dispatch(FormIntent::DeleteBack { name: "age".into() });
    assert_eq!(host.submit(), SubmitOutcome::Submitted);
    assert_eq!(submissions.borrow()[0]["age"], FieldValue::Number(13.0));
}

#[test]
fn checkbox_toggles_back_and_forth() {
    let schema = FormSchema::new(vec![
        FieldDescriptor::new("subscribe", FieldType::Checkbox).with_value(false)
    ]);
    let (mut host, _) = recording_host(schema, FormRules::new());

    host.toggle("subscribe");
    assert_eq!(host.values().unwrap()["subscribe"], FieldValue::Bool(true));
    host.toggle("subscribe");
    assert_eq!(host.values().unwrap()["subscribe"], FieldValue::Bool(false));
}

#[test]
fn errors_stay_hidden_until_blur() {
    let validator = |values: &ValueMap| -> FieldErrors {
        let mut errors = FieldErrors::new();
        if values.get("email").map(FieldValue::as_text).unwrap_or_default().is_empty() {
            errors.insert("email".into(), "Email is required".into());
        }
        errors
    };
    let mut host = FormHost::mount(signup_schema(), validator, |_: &ValueMap| {});

    let input_error = |host: &FormHost| match host.render().fields[0].control() {
        Some(schemaform::form::Control::Input(input)) => input.error.clone(),
        other => panic!("expected input, got {other:?}"),
    };

    assert_eq!(input_error(&host), None);
    host.blur("email");
    assert_eq!(input_error(&host).as_deref(), Some("Email is required"));
    host.type_text("email", "x");
    assert_eq!(input_error(&host), None);
}

#[test]
fn focus_moves_touch_fields_and_never_untouch() {
    let (mut host, _) = recording_host(signup_schema(), FormRules::new());
    host.dispatch(FormIntent::FocusNext);
    host.dispatch(FormIntent::FocusNext);
    host.dispatch(FormIntent::FocusNext);

    let validation = host.validation().unwrap();
    assert!(validation.is_touched("email"));
    assert!(validation.is_touched("age"));
    assert_eq!(host.focus_index(), Some(0));
}
