//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing package.json
//! - RegistryError: Issues with npm registry communication
//! - ConfigError: Invalid options or configuration file
//! - InstallError: `npm install` of a specific version failed
//! - TestFailure: The test command exited unsuccessfully

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Install or revert failure
    #[error(transparent)]
    Install(#[from] InstallError),

    /// Writing the report failed
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry} registry")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option has the wrong shape or value
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The project configuration file could not be used
    #[error("invalid configuration file {path}: {message}")]
    InvalidConfigFile { path: PathBuf, message: String },
}

/// A package could not be installed at the requested version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not install {name}@{version}: {message}")]
pub struct InstallError {
    pub name: String,
    pub version: String,
    pub message: String,
}

/// The test command did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{command}` failed: {message}")]
pub struct TestFailure {
    pub command: String,
    pub message: String,
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ConfigError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a new InvalidConfigFile error
    pub fn invalid_config_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InvalidConfigFile {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl InstallError {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            message: message.into(),
        }
    }
}

impl TestFailure {
    pub fn new(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            message: message.into(),
        }
    }
}
