//! Configuration management for the gateway runtime.
//!
//! Hierarchical loading from multiple sources with priority:
//! 1. Default values (hardcoded)
//! 2. Main config file (`config/gateway`, optional)
//! 3. `GATEWAY_CONFIG_PATH` file override
//! 4. Environment variables (highest priority)

mod gateway;
mod monitoring;

pub use gateway::*;
pub use monitoring::*;

#[cfg(test)]
mod config_test;

//---
use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::constants::CONFIG_PATH_ENV;
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::constants::ENV_PREFIX;
use crate::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Scheduler and plugin-chain parameters
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Metrics and monitoring settings
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

impl Settings {
    /// Load configuration with proper priority ordering.
    ///
    /// # Arguments
    /// * `config_path` - Optional explicit path to a config file; when set
    ///   the file must exist.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Config::builder();

        // 1. Base config file
        match config_path {
            Some(path) => {
                config = config.add_source(File::with_name(path).required(true));
            }
            None => {
                config = config
                    .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
        }

        // 2. File override from the environment
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            config = config.add_source(File::with_name(&path).required(true));
        }

        // 3. Environment variables (highest priority)
        config = config.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let settings: Settings = config.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.gateway.validate()?;
        self.monitoring.validate()
    }
}
