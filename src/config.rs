//! Project configuration file reader
//!
//! Reads optional defaults from `.next-update.json` in the project directory:
//!
//! ```json
//! { "modules": ["lodash"], "all": false, "command": "grunt test",
//!   "color": true, "latest": false, "registry": "https://registry.npmjs.org" }
//! ```
//!
//! Resolution order for every setting: CLI flag, then environment
//! (`NEXT_UPDATE_REGISTRY`), then this file, then the built-in default.

use crate::cli::CliArgs;
use crate::domain::{ModuleFilter, RunOptions};
use crate::error::ConfigError;
use crate::registry::NPM_REGISTRY_URL;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file name looked up in the project directory
pub const CONFIG_FILENAME: &str = ".next-update.json";

/// Environment variable overriding the registry URL
pub const REGISTRY_ENV: &str = "NEXT_UPDATE_REGISTRY";

/// Settings read from the project configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub modules: Option<ModuleFilter>,
    pub all: Option<bool>,
    pub command: Option<String>,
    pub color: Option<bool>,
    pub latest: Option<bool>,
    pub registry: Option<String>,
}

impl ProjectConfig {
    /// Read the config file from a project directory; absent file means defaults
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::invalid_config_file(&path, e.to_string()))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::invalid_config_file(&path, e.to_string()))?;
        debug!(path = %path.display(), "loaded project config");
        Self::from_value(&value, &path)
    }

    /// Validate the shape of a parsed config document
    pub fn from_value(value: &Value, path: &Path) -> Result<Self, ConfigError> {
        let Some(object) = value.as_object() else {
            return Err(ConfigError::invalid_config_file(path, "expected a JSON object"));
        };

        let modules = object
            .get("modules")
            .map(ModuleFilter::from_value)
            .transpose()?;

        let command = match object.get("command") {
            None => None,
            Some(Value::String(command)) => Some(command.clone()),
            Some(other) => {
                return Err(ConfigError::invalid_input(format!(
                    "expected string command, not {}",
                    other
                )))
            }
        };

        Ok(Self {
            modules,
            all: read_bool(object, "all", path)?,
            command,
            color: read_bool(object, "color", path)?,
            latest: read_bool(object, "latest", path)?,
            registry: read_string(object, "registry", path)?,
        })
    }
}

fn read_bool(object: &Map<String, Value>, key: &str, path: &Path) -> Result<Option<bool>, ConfigError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ConfigError::invalid_config_file(
            path,
            format!("'{}' must be true or false, got {}", key, other),
        )),
    }
}

fn read_string(
    object: &Map<String, Value>,
    key: &str,
    path: &Path,
) -> Result<Option<String>, ConfigError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::invalid_config_file(
            path,
            format!("'{}' must be a string, got {}", key, other),
        )),
    }
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project directory
    pub project_dir: PathBuf,
    /// Run options for the orchestrator
    pub options: RunOptions,
    /// Registry base URL
    pub registry: String,
}

impl Settings {
    /// Merge CLI arguments, environment and project config
    pub fn resolve(
        args: &CliArgs,
        config: ProjectConfig,
        registry_env: Option<String>,
    ) -> Self {
        let modules = ModuleFilter::from_names(args.module.clone()).or(config.modules);
        let command = args.test.clone().or(config.command);
        let all = args.all || config.all.unwrap_or(false);
        let latest = args.latest || config.latest.unwrap_or(false);
        let color = !args.no_color && config.color.unwrap_or(true);
        let registry = args
            .registry
            .clone()
            .or(registry_env)
            .or(config.registry)
            .unwrap_or_else(|| NPM_REGISTRY_URL.to_string());

        Self {
            project_dir: args.path.clone(),
            options: RunOptions {
                modules,
                all,
                command,
                color,
                latest,
            },
            registry,
        }
    }

    /// Read the project config and environment, then merge with `args`
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let config = ProjectConfig::from_dir(&args.path)?;
        let registry_env = std::env::var(REGISTRY_ENV).ok().filter(|v| !v.is_empty());
        Ok(Self::resolve(args, config, registry_env))
    }
}
