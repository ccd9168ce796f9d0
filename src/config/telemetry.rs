//! Telemetry configuration and tracing setup

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (same syntax as `RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Validate the telemetry configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ValidationError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// Install the global tracing subscriber.
    ///
    /// Call once at host startup; subsequent calls return an error from
    /// the subscriber library and are ignored here so tests can share a
    /// process.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_new(&self.log_level)
            .unwrap_or_else(|_| EnvFilter::new(default_log_level()));

        if self.json_logs {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn accepts_module_level_filters() {
        let config = TelemetryConfig {
            log_level: "info,solution_review=debug".to_string(),
            json_logs: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unparseable_filter() {
        let config = TelemetryConfig {
            log_level: "not==a==filter".to_string(),
            json_logs: false,
        };
        assert!(config.validate().is_err());
    }
}
