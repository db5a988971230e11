//! Per-widget response table.
//!
//! `ResponseCatalog` starts from the built-in templates and layers config
//! overrides on top. It stores one entry per `Intent`, so lookups cannot
//! miss and no entry can be blank.

use std::collections::HashMap;

use pagebot_types::config::WidgetConfig;
use pagebot_types::error::ConfigError;
use pagebot_types::intent::Intent;

use super::templates;
use crate::intent::classify;

#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    entries: HashMap<Intent, String>,
}

impl ResponseCatalog {
    /// Catalog holding only the built-in templates.
    pub fn builtin() -> Self {
        let entries = Intent::ALL
            .into_iter()
            .map(|intent| (intent, templates::generate(intent).to_string()))
            .collect();
        Self { entries }
    }

    /// Built-in templates with the `[responses]` overrides from `config`.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::builtin();
        for (intent, text) in config.response_overrides()? {
            catalog.set(intent, text)?;
        }
        Ok(catalog)
    }

    /// Replace the template for one intent.
    pub fn set(&mut self, intent: Intent, text: impl Into<String>) -> Result<(), ConfigError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ConfigError::EmptyTemplate(intent));
        }
        self.entries.insert(intent, text);
        Ok(())
    }

    pub fn generate(&self, intent: Intent) -> &str {
        // Every intent is inserted by `builtin()` and `set` never removes.
        self.entries
            .get(&intent)
            .map_or_else(|| templates::generate(intent), String::as_str)
    }

    /// Classify `utterance` and look up the matching response.
    pub fn reply_to(&self, utterance: &str) -> (Intent, &str) {
        let intent = classify(utterance);
        (intent, self.generate(intent))
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
