use serde::Deserialize;
use std::time::Duration;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogLevel;

/// Page tunables. Every field has a default so a partial JSON document
/// (or none at all) is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Asset preselected on load when it exists in the catalog.
    pub default_asset: String,
    pub chat_reply_delay_ms: u32,
    pub scroll_offset_px: f64,
    /// Fraction of an element that must be on screen before it is revealed.
    pub reveal_threshold: f64,
    /// Minimum bar height as a fraction of the series maximum.
    pub bar_floor: f64,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_asset: "sp500".to_string(),
            chat_reply_delay_ms: 250,
            scroll_offset_px: 80.0,
            reveal_threshold: 0.15,
            bar_floor: 0.15,
            log_level: LogLevel::for_build(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(config.sanitized())
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.chat_reply_delay_ms))
    }

    fn sanitized(mut self) -> Self {
        self.reveal_threshold = clamp_unit(self.reveal_threshold, 0.15);
        self.bar_floor = clamp_unit(self.bar_floor, 0.15);
        if !self.scroll_offset_px.is_finite() {
            self.scroll_offset_px = 80.0;
        }
        self
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.chat_reply_delay(), Duration::from_millis(250));
    }

    #[test]
    fn partial_document_overrides_only_given_fields() {
        let config = SiteConfig::from_json(r#"{"default_asset":"bitcoin","log_level":"error"}"#).unwrap();
        assert_eq!(config.default_asset, "bitcoin");
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.scroll_offset_px, 80.0);
    }

    #[test]
    fn fractions_are_clamped() {
        let config = SiteConfig::from_json(r#"{"reveal_threshold":3.0,"bar_floor":-1.0}"#).unwrap();
        assert_eq!(config.reveal_threshold, 1.0);
        assert_eq!(config.bar_floor, 0.0);
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
