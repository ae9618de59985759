mod common;

use common::signup_schema;
use ratatui::backend::TestBackend;
use ratatui::text::Line;
use ratatui::Terminal;
use schemaform::form::{
    compose, derive_initial_values, FieldDescriptor, FieldType, FormSchema, ValidationState,
    ERROR_BANNER,
};
use schemaform::ui::theme::Theme;
use schemaform::ui::view::{draw_form, form_lines};

fn plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn draws_title_fields_and_submit() {
    let schema = signup_schema();
    let values = derive_initial_values(&schema);
    let tree = compose(&schema, &values, &ValidationState::default(), "Register");

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|frame| draw_form(frame, "Sign up", &tree, Some(0), &Theme::default()))
        .unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Sign up"));
    assert!(text.contains("email"));
    assert!(text.contains("age"));
    assert!(text.contains("[0..120]"));
    assert!(text.contains("Register"));
    assert!(!text.contains(ERROR_BANNER));
}

#[test]
fn touched_errors_show_banner_and_message() {
    let schema = signup_schema();
    let values = derive_initial_values(&schema);
    let mut validation = ValidationState::default();
    validation.errors.insert("email".into(), "Required".into());
    validation.touch("email");

    let tree = compose(&schema, &values, &validation, "Submit");
    let (lines, _) = form_lines(&tree, None, &Theme::default());
    let lines: Vec<String> = lines.iter().map(plain).collect();

    assert_eq!(lines[0].trim(), ERROR_BANNER);
    assert!(lines.iter().any(|line| line.trim() == "* Required"));
}

#[test]
fn select_checkbox_and_failures_render_inline() {
    let schema = FormSchema::new(vec![
        FieldDescriptor::new("plan", FieldType::Select).with_options(["Free", "Pro"]),
        FieldDescriptor::new("subscribe", FieldType::Checkbox)
            .with_label("Send me updates")
            .with_value(true),
        FieldDescriptor::new("broken", FieldType::Component),
    ]);
    let values = derive_initial_values(&schema);
    let tree = compose(&schema, &values, &ValidationState::default(), "Submit");
    let (lines, _) = form_lines(&tree, None, &Theme::default());
    let lines: Vec<String> = lines.iter().map(plain).collect();

    assert!(lines.iter().any(|line| line.contains("‹ Please select ›")));
    assert!(lines.iter().any(|line| line.contains("[x] Send me updates")));
    assert!(lines.iter().any(|line| line.contains("! broken:")));
}

#[test]
fn focus_line_points_at_submit_slot() {
    let schema = signup_schema();
    let values = derive_initial_values(&schema);
    let tree = compose(&schema, &values, &ValidationState::default(), "Go");
    let (lines, focus_line) = form_lines(&tree, Some(schema.len()), &Theme::default());

    assert_eq!(focus_line, lines.len() - 1);
    assert!(plain(&lines[focus_line]).contains(" Go "));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let schema = signup_schema();
    let values = derive_initial_values(&schema);
    let tree = compose(&schema, &values, &ValidationState::default(), "Submit");

    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    terminal
        .draw(|frame| draw_form(frame, "Sign up", &tree, Some(1), &Theme::default()))
        .unwrap();
}
