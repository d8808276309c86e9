use std::path::Path;

use crate::error::ConfigError;
use crate::solver::DEFAULT_MAX_NODES;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solver: SolverConfig,
}

/// Settings for the minimal-solution search run at session start.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Run the solver when a session starts.
    pub enabled: bool,
    /// Upper bound on expanded search nodes before the solver gives up.
    pub max_nodes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            solver: SolverConfig::default(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            enabled: true,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solver.max_nodes == 0 {
            return Err(ConfigError::Validation(
                "solver.max_nodes must be > 0".into(),
            ));
        }
        Ok(())
    }
}
