//! Configuration loading from file and environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{RouteError, RouteResult};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ROUTES_CONFIG";

/// Default cap on walk states expanded by a single query.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 10_000_000;

/// Work limits applied to every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLimits {
    /// Maximum number of walk states a query may expand before failing.
    #[serde(default = "default_max_expansions")]
    pub max_expansions: u64,
}

fn default_max_expansions() -> u64 {
    DEFAULT_MAX_EXPANSIONS
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Query limits.
    #[serde(default)]
    pub limits: QueryLimits,
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> RouteResult<RoutesConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RouteError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> RouteResult<RoutesConfig> {
    toml::from_str(content).map_err(|e| RouteError::Config(format!("Failed to parse config: {e}")))
}

/// Resolve the config file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. ROUTES_CONFIG environment variable
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}

/// Load the resolved config, or defaults when no path is configured.
pub fn load_or_default(explicit: Option<&Path>) -> RouteResult<RoutesConfig> {
    match resolve_config_path(explicit) {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            load_config(&path)
        }
        None => Ok(RoutesConfig::default()),
    }
}
