//! Options for a single run

use super::dependency::parse_name_version;
use crate::error::ConfigError;
use serde_json::Value;

/// Restricts a run to some of the manifest's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleFilter {
    /// A single module name, optionally with `@version`
    One(String),
    /// Several module names
    Many(Vec<String>),
}

impl ModuleFilter {
    /// Builds a filter from a JSON value, which must be a string or an array
    /// of strings
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(name) => Ok(ModuleFilter::One(name.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ConfigError::invalid_input(format!(
                            "expected module names as strings, got {}",
                            item
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ModuleFilter::Many),
            other => Err(ConfigError::invalid_input(format!(
                "expected module names {}",
                other
            ))),
        }
    }

    /// Builds a filter from repeated CLI values; `None` when nothing was given
    pub fn from_names(names: Vec<String>) -> Option<Self> {
        match names.len() {
            0 => None,
            1 => names.into_iter().next().map(ModuleFilter::One),
            _ => Some(ModuleFilter::Many(names)),
        }
    }

    /// The raw entries as given
    pub fn entries(&self) -> &[String] {
        match self {
            ModuleFilter::One(name) => std::slice::from_ref(name),
            ModuleFilter::Many(names) => names,
        }
    }

    /// True if `name` is listed, ignoring any `@version` suffix on the entries
    pub fn matches(&self, name: &str) -> bool {
        self.entries()
            .iter()
            .any(|entry| parse_name_version(entry).0 == name)
    }
}

/// Read-only configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Only check these modules
    pub modules: Option<ModuleFilter>,
    /// Install one candidate of every dependency, test once, then revert
    pub all: bool,
    /// Custom test command instead of `npm test`
    pub command: Option<String>,
    /// Color the report lines
    pub color: bool,
    /// Only try the newest candidate of each dependency
    pub latest: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            modules: None,
            all: false,
            command: None,
            color: true,
            latest: false,
        }
    }
}
