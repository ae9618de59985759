use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::form::control::Control;
use crate::form::error::SchemaError;

/// Current value of every field, keyed by field name.
pub type ValueMap = BTreeMap<String, FieldValue>;

/// Declared type of a field.
///
/// The set is closed: anything that is not one of the known kinds is kept
/// verbatim in [`FieldType::Other`] and rendered by the generic input
/// renderer, using the string as the input type (`email`, `number`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    Text,
    Select,
    TextArea,
    Checkbox,
    Component,
    Other(String),
}

impl FieldType {
    /// Stable name used in form files.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::TextArea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Component => "component",
            Self::Other(other) => other,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "select" => Self::Select,
            "textarea" => Self::TextArea,
            "checkbox" => Self::Checkbox,
            "component" => Self::Component,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<FieldType> for String {
    fn from(kind: FieldType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field value.
///
/// Form files write these untagged: `""`, `0`, `false`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Value a field starts with when its descriptor has none.
    pub fn empty_for(kind: &FieldType) -> Self {
        match kind {
            FieldType::Checkbox => Self::Bool(false),
            _ => Self::Text(String::new()),
        }
    }

    /// Text shown inside an input control.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(n) => format_number(*n),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Number(n) => *n != 0.0,
            Self::Text(text) => !text.is_empty(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Rebuild a value from edited input text.
    ///
    /// Numeric fields keep a number only while the text round-trips
    /// exactly, so intermediate states like `"3."` or `"-"` stay text.
    pub fn from_edit(numeric: bool, text: String) -> Self {
        if numeric {
            if let Ok(n) = text.parse::<f64>() {
                if format_number(n) == text {
                    return Self::Number(n);
                }
            }
        }
        Self::Text(text)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

fn is_integral(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() < 1e15
}

fn format_number(n: f64) -> String {
    if is_integral(n) {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Declarative description of one form field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Form-state key and validation key.
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    /// Selectable options, required for `select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    /// Pre-built control, required for `component`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<Control>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u16>,
    #[serde(default)]
    pub multiline: bool,
}

/// A descriptor's type resolved together with the data its renderer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind<'a> {
    /// Generic input, carrying the input type to display.
    Generic(&'a str),
    Select(&'a [String]),
    TextArea,
    Checkbox,
    Component(&'a Control),
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_component(mut self, control: Control) -> Self {
        self.component = Some(control);
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_rows(mut self, rows: u16) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Resolve the declared type, checking the data that type requires.
    pub fn kind(&self) -> Result<FieldKind<'_>, SchemaError> {
        match &self.kind {
            FieldType::Component => self
                .component
                .as_ref()
                .map(FieldKind::Component)
                .ok_or_else(|| SchemaError::MissingComponent {
                    field: self.name.clone(),
                }),
            FieldType::Select => {
                self.data
                    .as_deref()
                    .map(FieldKind::Select)
                    .ok_or_else(|| SchemaError::MissingOptions {
                        field: self.name.clone(),
                    })
            }
            FieldType::TextArea => Ok(FieldKind::TextArea),
            FieldType::Checkbox => Ok(FieldKind::Checkbox),
            FieldType::Text | FieldType::Other(_) => Ok(FieldKind::Generic(self.kind.as_str())),
        }
    }

    /// Name shown to the user: the label, or the field name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Whether edits to this field should produce numbers.
    pub fn is_numeric(&self) -> bool {
        self.kind.as_str() == "number" || matches!(self.value, Some(FieldValue::Number(_)))
    }
}

/// Ordered list of field descriptors. Order is render order only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First descriptor with the given name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Names that occur more than once, in order of their second occurrence.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut duplicates = Vec::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) && !duplicates.contains(&field.name.as_str()) {
                duplicates.push(field.name.as_str());
            }
        }
        duplicates
    }
}

impl FromIterator<FieldDescriptor> for FormSchema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FormSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
