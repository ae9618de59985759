use serde::{Deserialize, Serialize};

use crate::form::{FormRules, FormSchema};
use crate::ui::form::SubmitPolicy;

/// A form described in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFile {
    /// Title shown on the form's border.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
    #[serde(default)]
    pub submit_policy: SubmitPolicy,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// `[[fields]]` tables, in render order.
    pub fields: FormSchema,
    /// `[rules.<field>]` tables for the built-in validator.
    #[serde(default)]
    pub rules: FormRules,
}

/// Optional colour overrides, as names (`"red"`) or hex (`"#da7756"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub border: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub ok: Option<String>,
    pub error: Option<String>,
    pub highlight: Option<String>,
}

fn default_title() -> String {
    "Form".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}
