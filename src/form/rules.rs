//! Built-in constraint validator.
//!
//! Each field gets a flat set of optional checks; the first failing check
//! produces the field's message. Anything richer belongs in a custom
//! [`Validator`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::descriptor::{FieldKind, FieldValue, FormSchema, ValueMap};
use crate::form::validation::{FieldErrors, Validator};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    /// Non-empty text, or a checked checkbox.
    pub required: bool,
    /// Numeric lower bound (inclusive).
    pub min: Option<f64>,
    /// Numeric upper bound (inclusive).
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
    /// Replaces every generated message for this field.
    pub message: Option<String>,
}

impl FieldRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// First failing check for `value`, if any.
    pub fn check(&self, value: Option<&FieldValue>) -> Option<String> {
        self.violation(value)
            .map(|generated| self.message.clone().unwrap_or(generated))
    }

    fn violation(&self, value: Option<&FieldValue>) -> Option<String> {
        let present = value.is_some_and(|value| match value {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Bool(flag) => *flag,
            FieldValue::Number(_) => true,
        });
        if !present {
            return self.required.then(|| "Required".to_string());
        }
        let value = value?;

        if self.min.is_some() || self.max.is_some() {
            let Some(n) = value.as_number() else {
                return Some("Must be a number".to_string());
            };
            if let Some(min) = self.min.filter(|min| n < *min) {
                return Some(format!("Must be at least {}", FieldValue::Number(min).as_text()));
            }
            if let Some(max) = self.max.filter(|max| n > *max) {
                return Some(format!("Must be at most {}", FieldValue::Number(max).as_text()));
            }
        }

        let text = value.as_text();
        let length = text.chars().count();
        if let Some(min_length) = self.min_length.filter(|min| length < *min) {
            return Some(format!("Must be at least {min_length} characters"));
        }
        if let Some(max_length) = self.max_length.filter(|max| length > *max) {
            return Some(format!("Must be at most {max_length} characters"));
        }

        if self.email && !looks_like_email(&text) {
            return Some("Invalid email address".to_string());
        }
        None
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
fn looks_like_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Rules keyed by field name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRules {
    fields: BTreeMap<String, FieldRules>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Bound violations of numeric generic fields against the descriptor's own
/// `min`/`max`. Repeated names are checked once, first descriptor wins.
pub fn bound_errors(schema: &FormSchema, values: &ValueMap) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut seen = std::collections::BTreeSet::new();
    for field in schema {
        if !seen.insert(field.name.as_str()) {
            continue;
        }
        let bounded = field.min.is_some() || field.max.is_some();
        let generic = matches!(field.kind(), Ok(FieldKind::Generic(_)));
        if !bounded || !generic || !field.is_numeric() {
            continue;
        }
        let rules = FieldRules {
            min: field.min,
            max: field.max,
            ..FieldRules::default()
        };
        if let Some(message) = rules.check(values.get(&field.name)) {
            errors.insert(field.name.clone(), message);
        }
    }
    errors
}

impl Validator for FormRules {
    fn validate(&self, values: &ValueMap) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|(name, rules)| {
                rules
                    .check(values.get(name))
                    .map(|message| (name.clone(), message))
            })
            .collect()
    }
}
