use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::preference::DARK_MODE_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid page config: {field} must be {expected}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },
}

/// Tunables for the page enhancements.
///
/// `transition_delay_ms` must equal the stylesheet's body transition
/// duration, otherwise the fade ends before or after navigation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub transition_delay_ms: u32,
    pub typing_interval_ms: u32,
    pub back_to_top_threshold: f64,
    pub mobile_breakpoint: f64,
    pub reveal_threshold: f64,
    pub dark_mode_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: 500,
            typing_interval_ms: 100,
            back_to_top_threshold: 300.0,
            mobile_breakpoint: 768.0,
            reveal_threshold: 0.1,
            dark_mode_key: DARK_MODE_KEY.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse optional JSON, falling back to defaults when absent or invalid.
    pub fn from_attribute(value: Option<&str>) -> Self {
        let Some(json) = value.filter(|v| !v.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "reveal_threshold",
                expected: "between 0 and 1",
            });
        }
        if self.dark_mode_key.is_empty() {
            return Err(ConfigError::OutOfRange {
                field: "dark_mode_key",
                expected: "non-empty",
            });
        }
        Ok(())
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.transition_delay_ms))
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.typing_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stylesheet_contract() {
        let config = PageConfig::default();
        assert_eq!(config.transition_delay(), Duration::from_millis(500));
        assert_eq!(config.typing_interval(), Duration::from_millis(100));
        assert_eq!(config.back_to_top_threshold, 300.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.dark_mode_key, "darkMode");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{"transition_delay_ms": 300}"#).unwrap();
        assert_eq!(config.transition_delay_ms, 300);
        assert_eq!(config.typing_interval_ms, 100);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::from_json(r#"{"delay": 300}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = PageConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(err.to_string().contains("reveal_threshold"));
    }

    #[test]
    fn bad_attribute_falls_back_to_defaults() {
        assert_eq!(PageConfig::from_attribute(Some("{not json")), PageConfig::default());
        assert_eq!(PageConfig::from_attribute(Some("  ")), PageConfig::default());
        assert_eq!(PageConfig::from_attribute(None), PageConfig::default());
    }
}
