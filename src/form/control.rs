//! Renderable controls produced by the field registry.
//!
//! Controls are host-agnostic: they say what to show and which state flags
//! apply, and leave colours and layout to the view.

use serde::{Deserialize, Serialize};

/// Value of the synthetic first option of every select.
///
/// Selecting it means "nothing chosen". It must not appear in `data`.
pub const PLACEHOLDER_VALUE: &str = "";
pub const PLACEHOLDER_LABEL: &str = "Please select";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    Input(TextInputControl),
    Select(SelectControl),
    Checkbox(CheckboxControl),
    TextArea(TextAreaControl),
    /// Static text block, the usual shape of a caller-supplied component.
    Note(NoteControl),
}

impl Control {
    /// Field name the control is bound to, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Input(input) => Some(&input.name),
            Self::Select(select) => Some(&select.name),
            Self::Checkbox(checkbox) => Some(&checkbox.name),
            Self::TextArea(area) => Some(&area.name),
            Self::Note(_) => None,
        }
    }

    /// Whether the control is drawn in its error state.
    pub fn shows_error(&self) -> bool {
        match self {
            Self::Input(input) => input.error.is_some(),
            Self::Select(select) => select.has_error,
            Self::TextArea(area) => area.has_error,
            Self::Checkbox(_) | Self::Note(_) => false,
        }
    }
}

/// Single or multi-line input from the generic renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInputControl {
    pub name: String,
    pub label: Option<String>,
    /// Declared input type (`text`, `email`, `number`, ...).
    pub input_type: String,
    pub value: String,
    pub multiline: bool,
    pub rows: Option<u16>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Inline message, present only for errored and touched fields.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectControl {
    pub name: String,
    pub label: Option<String>,
    /// Placeholder first, then the descriptor's `data` in order.
    pub options: Vec<SelectOption>,
    /// Index into `options`.
    pub selected: usize,
    pub has_error: bool,
}

impl SelectControl {
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxControl {
    pub name: String,
    pub label: Option<String>,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAreaControl {
    pub name: String,
    pub label: Option<String>,
    pub value: String,
    pub has_error: bool,
    pub full_width: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteControl {
    pub text: String,
}

impl NoteControl {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
