//! Refresh configuration: settings owned by the control surface.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Shortest accepted refresh interval, in seconds.
pub const MIN_INTERVAL_SECS: u32 = 2;
/// Longest accepted refresh interval, in seconds.
pub const MAX_INTERVAL_SECS: u32 = 10;
/// Interval used when none is given.
pub const DEFAULT_INTERVAL_SECS: u32 = 5;

/// Settings the scheduler reads once per cycle.
///
/// The interval is validated on construction, so any value of this type
/// holds an interval in `[MIN_INTERVAL_SECS, MAX_INTERVAL_SECS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRefreshConfig")]
pub struct RefreshConfig {
    led_on: bool,
    auto_refresh_enabled: bool,
    refresh_interval_secs: u32,
}

impl RefreshConfig {
    /// Create a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> RefreshConfigBuilder {
        RefreshConfigBuilder::default()
    }

    /// Validate and build a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RefreshIntervalOutOfRange`] when the
    /// interval is outside `[2, 10]`.
    pub fn new(
        led_on: bool,
        auto_refresh_enabled: bool,
        refresh_interval_secs: u32,
    ) -> Result<Self, ConfigurationError> {
        validate_interval(refresh_interval_secs)?;
        Ok(Self {
            led_on,
            auto_refresh_enabled,
            refresh_interval_secs,
        })
    }

    /// Cosmetic LED state, passed through to the presentation layer.
    #[must_use]
    pub fn led_on(&self) -> bool {
        self.led_on
    }

    #[must_use]
    pub fn auto_refresh_enabled(&self) -> bool {
        self.auto_refresh_enabled
    }

    #[must_use]
    pub fn refresh_interval_secs(&self) -> u32 {
        self.refresh_interval_secs
    }

    /// The suspension between two successive cycles.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval_secs))
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            led_on: true,
            auto_refresh_enabled: true,
            refresh_interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

fn validate_interval(secs: u32) -> Result<(), ConfigurationError> {
    if (MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS).contains(&secs) {
        Ok(())
    } else {
        Err(ConfigurationError::RefreshIntervalOutOfRange {
            actual: secs,
            min: MIN_INTERVAL_SECS,
            max: MAX_INTERVAL_SECS,
        })
    }
}

/// Unvalidated wire form, checked through [`TryFrom`].
#[derive(Deserialize)]
struct RawRefreshConfig {
    led_on: bool,
    auto_refresh_enabled: bool,
    refresh_interval_secs: u32,
}

impl TryFrom<RawRefreshConfig> for RefreshConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawRefreshConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.led_on,
            raw.auto_refresh_enabled,
            raw.refresh_interval_secs,
        )
    }
}

/// Step-by-step builder for [`RefreshConfig`].
#[derive(Debug)]
pub struct RefreshConfigBuilder {
    led_on: bool,
    auto_refresh_enabled: bool,
    refresh_interval_secs: u32,
}

impl Default for RefreshConfigBuilder {
    fn default() -> Self {
        let defaults = RefreshConfig::default();
        Self {
            led_on: defaults.led_on,
            auto_refresh_enabled: defaults.auto_refresh_enabled,
            refresh_interval_secs: defaults.refresh_interval_secs,
        }
    }
}

impl RefreshConfigBuilder {
    #[must_use]
    pub fn led_on(mut self, led_on: bool) -> Self {
        self.led_on = led_on;
        self
    }

    #[must_use]
    pub fn auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh_enabled = enabled;
        self
    }

    #[must_use]
    pub fn refresh_interval_secs(mut self, secs: u32) -> Self {
        self.refresh_interval_secs = secs;
        self
    }

    /// Consume the builder, validate, and return a [`RefreshConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the interval is out of range.
    pub fn build(self) -> Result<RefreshConfig, ConfigurationError> {
        RefreshConfig::new(
            self.led_on,
            self.auto_refresh_enabled,
            self.refresh_interval_secs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_led_on_auto_refresh_every_five_seconds() {
        let config = RefreshConfig::default();
        assert!(config.led_on());
        assert!(config.auto_refresh_enabled());
        assert_eq!(config.refresh_interval_secs(), 5);
        assert_eq!(config.refresh_interval(), Duration::from_secs(5));
    }

    #[test]
    fn should_reject_interval_below_two_seconds() {
        let result = RefreshConfig::builder().refresh_interval_secs(1).build();
        assert_eq!(
            result,
            Err(ConfigurationError::RefreshIntervalOutOfRange {
                actual: 1,
                min: 2,
                max: 10
            })
        );
    }

    #[test]
    fn should_reject_interval_above_ten_seconds() {
        let result = RefreshConfig::new(true, true, 11);
        assert!(matches!(
            result,
            Err(ConfigurationError::RefreshIntervalOutOfRange { actual: 11, .. })
        ));
    }

    #[test]
    fn should_accept_interval_bounds() {
        assert!(RefreshConfig::new(false, true, 2).is_ok());
        assert!(RefreshConfig::new(false, true, 10).is_ok());
    }

    #[test]
    fn should_build_with_overrides() {
        let config = RefreshConfig::builder()
            .led_on(false)
            .auto_refresh(false)
            .refresh_interval_secs(7)
            .build()
            .unwrap();
        assert!(!config.led_on());
        assert!(!config.auto_refresh_enabled());
        assert_eq!(config.refresh_interval_secs(), 7);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let config = RefreshConfig::new(false, true, 3).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RefreshConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn should_reject_invalid_interval_when_deserializing() {
        let json = r#"{"led_on":true,"auto_refresh_enabled":true,"refresh_interval_secs":0}"#;
        let result: Result<RefreshConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
