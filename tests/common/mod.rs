//! Shared test fixtures.

#![allow(dead_code)]

use std::path::PathBuf;

use schemaform::form::{FieldDescriptor, FieldType, FormSchema};
use tempfile::TempDir;

/// Write `content` to a temporary `form.toml`.
pub fn temp_form(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("form.toml");
    std::fs::write(&path, content).expect("Failed to write form file");
    (temp_dir, path)
}

/// The email/age form used across the end-to-end tests.
pub fn signup_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldDescriptor::new("email", FieldType::Text).with_value(""),
        FieldDescriptor::new("age", FieldType::Text)
            .with_value(0i64)
            .with_bounds(0.0, 120.0),
    ])
}

pub const SIGNUP_TOML: &str = r#"
title = "Sign up"
submit_label = "Register"

[[fields]]
name = "email"
type = "email"
label = "Email"
value = ""

[[fields]]
name = "age"
type = "number"
label = "Age"
value = 0
min = 0
max = 120

[[fields]]
name = "plan"
type = "select"
label = "Plan"
data = ["Free", "Pro"]

[[fields]]
name = "subscribe"
type = "checkbox"
label = "Send me updates"
value = false

[rules.email]
required = true
email = true

[rules.age]
min = 0
max = 120
"#;
