//! Sampler configuration for drawing delays outside a running simulation.

use config::Source;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use super::DelayGenerator;
use crate::time::Time;

const SECTION: &str = "sampler";
const ENV_PREFIX: &str = "TS2_SAMPLER";

/// Delay sampler parameters.
///
/// | Field             | Unit      | Description                                   | Example              |
/// |-------------------|-----------|-----------------------------------------------|----------------------|
/// | delay             | s         | Integer or `[[lower, upper, percent], ...]`   | `[[0, 60, 80], ...]` |
/// | count             | samples   | Number of delays to draw                      | 1000                 |
/// | seed              | -         | RNG seed; omitted = thread RNG                | 42                   |
/// | departure         | HH:MM:SS  | Scheduled time the delays are applied to      | "06:30:00"           |
/// | output_filepath   | -         | CSV file receiving one row per sample         | "delays.csv"         |
/// | summary_filepath  | -         | JSON file receiving config and statistics     | "summary.json"       |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    #[serde(default = "SamplerConfig::default_delay")]
    pub delay: DelayGenerator,
    #[serde(default = "SamplerConfig::default_count")]
    pub count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub departure: Time,
    #[serde(default = "SamplerConfig::default_output_filepath")]
    pub output_filepath: String,
    #[serde(default = "SamplerConfig::default_summary_filepath")]
    pub summary_filepath: String,
}

impl SamplerConfig {
    /// Load sampler config from the file path in `CONFIG_FILE` env var.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG_FILE")
            .map_err(|_| ConfigError::Message("CONFIG_FILE environment variable not set".into()))?;
        Self::from_file(&path)
    }

    /// Load sampler config from a TOML or JSON file. Supports:
    /// - Files with a `[sampler]` section
    /// - Flat files with the fields at root
    ///
    /// Environment variables prefixed `TS2_SAMPLER_` (e.g. `TS2_SAMPLER_COUNT`)
    /// override file values in either form.
    pub fn from_file(config_file: &str) -> Result<Self, ConfigError> {
        Self::from_file_with_env(
            config_file,
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    /// Same as [`SamplerConfig::from_file`] with an explicit environment source.
    ///
    /// Overrides are written under `sampler.` when the file has that section,
    /// and at root otherwise. A `sampler` section that fails to decode is an
    /// error; the root is only read when the section is absent.
    pub fn from_file_with_env(config_file: &str, env: Environment) -> Result<Self, ConfigError> {
        let file = Config::builder()
            .add_source(File::with_name(config_file))
            .build()?;
        let sectioned = !matches!(file.get_table(SECTION), Err(ConfigError::NotFound(_)));
        let overrides = Config::builder().add_source(env).build()?.collect()?;

        let mut builder = Config::builder().add_source(File::with_name(config_file));
        for (key, value) in overrides {
            let key = if sectioned {
                format!("{SECTION}.{key}")
            } else {
                key
            };
            builder = builder.set_override(key, value)?;
        }
        let config = builder.build()?;

        if sectioned {
            config.get(SECTION)
        } else {
            config.try_deserialize()
        }
    }

    fn default_delay() -> DelayGenerator {
        DelayGenerator::constant(0)
    }
    fn default_count() -> usize {
        1000
    }
    fn default_output_filepath() -> String {
        "delays.csv".to_string()
    }
    fn default_summary_filepath() -> String {
        "summary.json".to_string()
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            delay: Self::default_delay(),
            count: Self::default_count(),
            seed: None,
            departure: Time::Unset,
            output_filepath: Self::default_output_filepath(),
            summary_filepath: Self::default_summary_filepath(),
        }
    }
}
