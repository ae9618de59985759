use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

use crate::config::types::{FormFile, ThemeConfig};
use crate::ui::theme::Theme;

/// Errors that can occur when loading a form file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read form file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse form file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Form file validation failed: {message}")]
    ValidationError { message: String },
}

impl FormFile {
    /// Default location of the form file.
    ///
    /// Uses `~/.config/schemaform/form.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("schemaform").join("form.toml")
    }

    /// Read, parse and validate a form file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let form = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), fields = form.fields.len(), "form file loaded");
        Ok(form)
    }

    /// Parse and validate TOML content. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let form: FormFile = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        form.validate()?;
        Ok(form)
    }

    /// Checks:
    /// - At least one field is declared
    /// - Every field has a name
    /// - Rules only target declared fields
    /// - Theme colours parse
    ///
    /// Duplicate names and per-field contract problems are not fatal here;
    /// they surface through `check_schema` and at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "A form needs at least one field".to_string(),
            });
        }

        if let Some(index) = self.fields.iter().position(|field| field.name.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Field #{} has an empty name", index + 1),
            });
        }

        if let Some(name) = self
            .rules
            .field_names()
            .find(|name| self.fields.get(name).is_none())
        {
            return Err(ConfigError::ValidationError {
                message: format!("Rules given for unknown field '{}'", name),
            });
        }

        self.theme.resolve()?;
        Ok(())
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.theme.resolve()
    }
}

impl ThemeConfig {
    /// Default theme with the configured colours applied.
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();
        let overrides = [
            ("accent", &self.accent, &mut theme.accent),
            ("border", &self.border, &mut theme.border),
            ("text", &self.text, &mut theme.text),
            ("muted", &self.muted, &mut theme.muted),
            ("ok", &self.ok, &mut theme.ok),
            ("error", &self.error, &mut theme.error),
            ("highlight", &self.highlight, &mut theme.highlight),
        ];
        for (key, value, slot) in overrides {
            if let Some(value) = value {
                *slot = Color::from_str(value).map_err(|_| ConfigError::ValidationError {
                    message: format!("Invalid colour '{}' for theme.{}", value, key),
                })?;
            }
        }
        Ok(theme)
    }
}
