//! Generator configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{FixtureError, FixtureResult};

/// Prefix of environment variables that override the config file
pub const ENV_PREFIX: &str = "ICAL_FIXTURES";

fn default_include_descriptions() -> bool {
    true
}

/// Configuration at ~/.config/ical-fixtures/config.toml
///
/// Every key can be overridden with an `ICAL_FIXTURES_`-prefixed
/// environment variable, e.g. `ICAL_FIXTURES_INCLUDE_DESCRIPTIONS=false`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Write a DESCRIPTION on every sample event
    #[serde(default = "default_include_descriptions")]
    pub include_descriptions: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            include_descriptions: default_include_descriptions(),
        }
    }
}

impl FixtureConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ical-fixtures").join("config.toml"))
    }

    /// Load from the default config file (if any) and the environment.
    pub fn load() -> FixtureResult<Self> {
        Self::load_from(Self::config_path().as_deref())
    }

    /// Load from `path` (optional, may not exist) and the environment.
    pub fn load_from(path: Option<&Path>) -> FixtureResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| FixtureError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FixtureError::Config(e.to_string()))
    }
}
