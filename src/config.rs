//! Simulator configuration.
//!
//! Defaults for disk size, head position, request count, playback delay and
//! chart width, loaded from a TOML file. Command-line flags override them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::{Cylinder, SeekRequest};
use crate::render::ChartOptions;

/// Simulator defaults, overridable from `u-seek.toml` and then the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Highest cylinder on the simulated disk
    #[serde(default = "default_max_cylinder")]
    pub max_cylinder: Cylinder,
    /// Starting head position
    #[serde(default = "default_initial_head")]
    pub initial_head: Cylinder,
    /// Number of requests drawn by `generate` / `--random`
    #[serde(default = "default_request_count")]
    pub request_count: usize,
    /// Pause between playback frames in milliseconds
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Width of the cylinder axis in the ASCII chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_cylinder: default_max_cylinder(),
            initial_head: default_initial_head(),
            request_count: default_request_count(),
            step_delay_ms: default_step_delay_ms(),
            chart_width: default_chart_width(),
            log_level: default_log_level(),
        }
    }
}

fn default_max_cylinder() -> Cylinder {
    SeekRequest::DEFAULT_MAX_CYLINDER
}

fn default_initial_head() -> Cylinder {
    53
}

fn default_request_count() -> usize {
    8
}

fn default_step_delay_ms() -> u64 {
    480
}

fn default_chart_width() -> usize {
    ChartOptions::default().width
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SimulatorConfig {
    /// Default configuration file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "u-seek.toml";

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `u-seek.toml` in the working
    /// directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else if required {
            Err(Error::Config(format!(
                "config file not found: {}",
                config_path.display()
            )))
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.chart_width,
            ..ChartOptions::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.initial_head > self.max_cylinder {
            return Err(Error::Config(format!(
                "initial_head {} exceeds max_cylinder {}",
                self.initial_head, self.max_cylinder
            )));
        }
        if self.chart_width < 2 {
            return Err(Error::Config("chart_width must be at least 2".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.max_cylinder, 199);
        assert_eq!(config.initial_head, 53);
        assert_eq!(config.request_count, 8);
        assert_eq!(config.step_delay(), Duration::from_millis(480));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = SimulatorConfig::from_toml_str("max_cylinder = 999\n").unwrap();
        assert_eq!(config.max_cylinder, 999);
        assert_eq!(config.initial_head, 53);
        assert_eq!(config.chart_options().width, 61);
    }

    #[test]
    fn test_rejects_head_beyond_disk() {
        let err = SimulatorConfig::from_toml_str("max_cylinder = 10\ninitial_head = 11\n")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(SimulatorConfig::from_toml_str("max_cylinder = \"big\"").is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = SimulatorConfig {
            step_delay_ms: 10,
            ..SimulatorConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(SimulatorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = SimulatorConfig::load(Some(Path::new("/nonexistent/u-seek.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
