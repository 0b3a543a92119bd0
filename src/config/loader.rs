//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading region
//! configurations from a directory of YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RegionConfig;

/// Loads and provides access to region configurations.
///
/// The `ConfigLoader` reads one YAML file per region from a directory and
/// indexes the validated configurations by region code.
///
/// # Directory Structure
///
/// ```text
/// config/regions/
/// ├── tx.yaml
/// ├── ca.yaml
/// └── nj.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use throughput_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/regions").unwrap();
/// let tx = loader.region("TX").unwrap();
/// println!("TX overtime multiplier: {}", tx.ot_multiplier);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    configs: HashMap<String, RegionConfig>,
}

impl ConfigLoader {
    /// Loads all region configurations from the specified directory.
    ///
    /// Every `*.yaml` file in the directory is parsed as one
    /// [`RegionConfig`] and validated. Returns an error if the directory is
    /// missing, contains no YAML files, any file fails to parse or
    /// validate, or two files declare the same region.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut configs = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                configs.push(Self::load_yaml(&path)?);
            }
        }

        if configs.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no region files found)", dir_str),
            });
        }

        Self::from_configs(configs)
    }

    /// Builds a loader from already-constructed configurations.
    ///
    /// Each configuration is validated, and duplicate region codes are
    /// rejected. Useful for tests and benchmarks that do not touch the
    /// filesystem.
    pub fn from_configs(configs: Vec<RegionConfig>) -> EngineResult<Self> {
        let mut indexed = HashMap::with_capacity(configs.len());

        for config in configs {
            config.validate()?;
            let region = config.region.clone();
            if indexed.insert(region.clone(), config).is_some() {
                return Err(EngineError::InvalidConfig {
                    region,
                    message: "duplicate region configuration".to_string(),
                });
            }
        }

        Ok(Self { configs: indexed })
    }

    /// Loads and parses a single region YAML file.
    fn load_yaml(path: &Path) -> EngineResult<RegionConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets the configuration for a region.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use throughput_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/regions")?;
    /// let config = loader.region("TX")?;
    /// println!("TX markup: {}", config.markup);
    /// # Ok::<(), throughput_engine::error::EngineError>(())
    /// ```
    pub fn region(&self, code: &str) -> EngineResult<&RegionConfig> {
        self.configs
            .get(code)
            .ok_or_else(|| EngineError::RegionNotFound {
                region: code.to_string(),
            })
    }

    /// Gets the configuration for a region, or `None` when the region has
    /// no configuration.
    ///
    /// The aggregator uses this form so that an entry with a missing
    /// configuration can be skipped instead of failing the whole batch.
    pub fn get(&self, code: &str) -> Option<&RegionConfig> {
        self.configs.get(code)
    }

    /// Returns all configured region codes, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
