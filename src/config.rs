//! Configuration management for the weather ETL
//!
//! Holds the input and output roots of an ETL run and the files that must be
//! present before it starts.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// ETL path configuration
#[derive(Debug, Deserialize, Clone)]
pub struct EtlConfig {
    /// Directory holding the raw weather data (must already exist)
    /// Environment: WEATHER_ETL_INPUT_ROOT
    pub input_root: String,

    /// Directory the ETL writes into
    /// Environment: WEATHER_ETL_OUTPUT_ROOT
    pub output_root: String,

    /// Create the output root when it is missing
    #[serde(default = "default_create_output")]
    pub create_output: bool,

    /// Files expected under the input root, relative unless absolute
    #[serde(default)]
    pub required_files: Vec<String>,
}

fn default_create_output() -> bool {
    true
}

impl EtlConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        // Packaged layout first, then the working directory
        let config_paths = ["weather-etl/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("WEATHER_ETL"))
                .build()
            {
                Ok(settings) => {
                    let config: EtlConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(match last_error {
            Some(e) => ConfigError::Load(e),
            None => ConfigError::Invalid(format!("no configuration found in {config_paths:?}")),
        })
    }

    /// Load configuration from one explicit file, without environment overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()?;
        let config: EtlConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.input_root.trim().is_empty() {
            return Err(ConfigError::Invalid("input_root cannot be empty".into()));
        }

        if self.output_root.trim().is_empty() {
            return Err(ConfigError::Invalid("output_root cannot be empty".into()));
        }

        if self.input_root_path() == self.output_root_path() {
            return Err(ConfigError::Invalid(
                "input_root and output_root must differ".into(),
            ));
        }

        Ok(())
    }

    pub fn input_root_path(&self) -> PathBuf {
        PathBuf::from(&self.input_root)
    }

    pub fn output_root_path(&self) -> PathBuf {
        PathBuf::from(&self.output_root)
    }

    /// Resolve `required_files` against the input root
    pub fn required_file_paths(&self) -> Vec<PathBuf> {
        let root = self.input_root_path();
        self.required_files
            .iter()
            .map(|file| {
                let path = Path::new(file);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    root.join(path)
                }
            })
            .collect()
    }
}
