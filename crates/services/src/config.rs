use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const CHART_DELAY_ENV: &str = "LESSONS_CHART_DELAY_MS";
pub const CATALOG_ENV: &str = "LESSONS_CATALOG";
pub const IDENTITY_ENV: &str = "LESSONS_IDENTITY";

/// Delay before a chart is drawn, so the detail view is laid out first.
pub const DEFAULT_CHART_DELAY: Duration = Duration::from_millis(50);

/// Runtime knobs for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub chart_delay: Duration,
    /// `None` uses the bundled lessons.
    pub catalog_path: Option<PathBuf>,
    pub identity_enabled: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            chart_delay: DEFAULT_CHART_DELAY,
            catalog_path: None,
            identity_enabled: true,
        }
    }
}

impl ViewerConfig {
    /// Defaults overlaid with `LESSONS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHART_DELAY_ENV) {
            config.chart_delay = parse_delay_ms(&raw).ok_or(ConfigError::InvalidValue {
                var: CHART_DELAY_ENV,
                raw,
            })?;
        }
        if let Some(raw) = lookup(CATALOG_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.catalog_path = Some(PathBuf::from(trimmed));
            }
        }
        if let Some(raw) = lookup(IDENTITY_ENV) {
            config.identity_enabled = parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                var: IDENTITY_ENV,
                raw,
            })?;
        }

        Ok(config)
    }
}

fn parse_delay_ms(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
