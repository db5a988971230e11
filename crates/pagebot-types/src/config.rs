//! Widget configuration types.
//!
//! `WidgetConfig` represents the optional `pagebot.toml` that tunes the
//! greeting, the simulated latency and the canned responses. All fields have
//! defaults matching the stock widget, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::ConfigError;
use crate::intent::Intent;

/// Greeting seeded as the first bot message of every conversation.
pub const DEFAULT_GREETING: &str = "Hello! I'm an AI assistant that can help you learn about my creator's work and expertise. Ask me about their projects, skills, or experience!";

/// Top-level configuration for one chat widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Text of the seeded bot greeting.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// How long the typing indicator stays on.
    #[serde(default = "default_typing_delay")]
    pub typing_delay: DelayRange,

    /// How long until the bot reply is appended.
    #[serde(default = "default_delivery_delay")]
    pub delivery_delay: DelayRange,

    #[serde(default)]
    pub timing_mode: TimingMode,

    /// Buffer size of the conversation event bus.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Per-intent response overrides, keyed by intent name (`projects`, `fallback`, ...).
    #[serde(default)]
    pub responses: BTreeMap<String, String>,
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_typing_delay() -> DelayRange {
    DelayRange::new(1000, 3000)
}

fn default_delivery_delay() -> DelayRange {
    DelayRange::new(1500, 2500)
}

fn default_event_capacity() -> usize {
    64
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            typing_delay: default_typing_delay(),
            delivery_delay: default_delivery_delay(),
            timing_mode: TimingMode::default(),
            event_capacity: default_event_capacity(),
            responses: BTreeMap::new(),
        }
    }
}

impl WidgetConfig {
    /// Check every invariant the engine relies on.
    ///
    /// Both delay ranges must be non-degenerate, every response override must
    /// name a known intent and carry non-blank text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.typing_delay.validate("typing_delay")?;
        self.delivery_delay.validate("delivery_delay")?;
        self.response_overrides().map(|_| ())
    }

    /// Response overrides parsed into intents.
    pub fn response_overrides(&self) -> Result<Vec<(Intent, &str)>, ConfigError> {
        self.responses
            .iter()
            .map(|(key, text)| {
                let intent: Intent = key.parse().map_err(ConfigError::Parse)?;
                if text.trim().is_empty() {
                    return Err(ConfigError::EmptyTemplate(intent));
                }
                Ok((intent, text.as_str()))
            })
            .collect()
    }
}

/// Half-open millisecond interval `[min_ms, max_ms)` a delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Reject empty or inverted ranges.
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min_ms >= self.max_ms {
            return Err(ConfigError::InvalidDelayRange {
                name,
                min_ms: self.min_ms,
                max_ms: self.max_ms,
            });
        }
        Ok(())
    }

    pub fn contains(&self, delay: Duration) -> bool {
        let ms = delay.as_millis();
        ms >= u128::from(self.min_ms) && ms < u128::from(self.max_ms)
    }
}

/// How the typing timer and the delivery timer relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingMode {
    /// Both timers start when the user submits. The typing indicator may
    /// switch off before the reply lands.
    #[default]
    Overlapping,
    /// The delivery timer starts once the typing timer ends; the indicator
    /// stays on until the reply lands.
    Sequential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_config_default_values() {
        let config = WidgetConfig::default();
        assert_eq!(config.typing_delay, DelayRange::new(1000, 3000));
        assert_eq!(config.delivery_delay, DelayRange::new(1500, 2500));
        assert_eq!(config.timing_mode, TimingMode::Overlapping);
        assert_eq!(config.greeting, DEFAULT_GREETING);
        assert!(config.responses.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_widget_config_deserialize_with_defaults() {
        let config: WidgetConfig = toml::from_str("").unwrap();
        assert_eq!(config.typing_delay.min_ms, 1000);
        assert_eq!(config.event_capacity, 64);
    }

    #[test]
    fn test_widget_config_deserialize_with_values() {
        let toml_str = r#"
greeting = "Hi there"
timing_mode = "sequential"

[typing_delay]
min_ms = 10
max_ms = 20

[responses]
fallback = "Try asking about projects."
"#;
        let config: WidgetConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.greeting, "Hi there");
        assert_eq!(config.timing_mode, TimingMode::Sequential);
        assert_eq!(config.typing_delay, DelayRange::new(10, 20));
        assert_eq!(config.delivery_delay, DelayRange::new(1500, 2500));

        let overrides = config.response_overrides().unwrap();
        assert_eq!(overrides, vec![(Intent::Fallback, "Try asking about projects.")]);
    }

    #[test]
    fn test_validate_rejects_degenerate_range() {
        let config = WidgetConfig {
            delivery_delay: DelayRange::new(2000, 2000),
            ..WidgetConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDelayRange {
                name: "delivery_delay",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_intent() {
        let mut config = WidgetConfig::default();
        config
            .responses
            .insert("weather".to_string(), "Sunny".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_blank_template() {
        let mut config = WidgetConfig::default();
        config.responses.insert("about".to_string(), "  \n".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyTemplate(Intent::About))
        ));
    }

    #[test]
    fn test_delay_range_contains_is_half_open() {
        let range = DelayRange::new(1000, 3000);
        assert!(range.contains(Duration::from_millis(1000)));
        assert!(range.contains(Duration::from_millis(2999)));
        assert!(!range.contains(Duration::from_millis(3000)));
        assert!(!range.contains(Duration::from_millis(999)));
    }
}
