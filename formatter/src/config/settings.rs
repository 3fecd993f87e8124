// Formatter settings, loaded from a JSON file or taken from defaults
use crate::error::FormatError;
use crate::format::AmountFormatter;
use serde::{Deserialize, Serialize};
use shared::models::FormatterConfig;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterSettings {
    pub formatter: FormatterConfig,
}

impl FormatterSettings {
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), locale = %settings.formatter.locale, "Loaded formatter settings");
        Ok(settings)
    }

    /// Command-line values win over whatever the settings file said.
    pub fn with_overrides(mut self, locale: Option<String>, currency_label: Option<String>) -> Self {
        if let Some(locale) = locale {
            self.formatter.locale = locale;
        }
        if let Some(label) = currency_label {
            self.formatter.currency_label = label;
        }
        self
    }

    pub fn build_formatter(&self) -> Result<AmountFormatter, FormatError> {
        AmountFormatter::new(self.formatter.clone())
    }
}
