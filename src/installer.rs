//! Package installation for trying and restoring dependency versions
//!
//! This module provides:
//! - The `Installer` seam used by the orchestrator
//! - `NpmInstaller`, which runs `npm install name@version`
//! - Reverting a list of dependencies to their declared versions

use crate::domain::DependencySpec;
use crate::error::InstallError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, info};

/// Installs an exact version of a package into the project
pub trait Installer {
    /// Install `name@version`, replacing whatever version is installed now
    fn install(&self, name: &str, version: &str) -> Result<(), InstallError>;
}

/// Installer backed by the `npm` executable
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    /// Project directory containing package.json
    working_dir: PathBuf,
    /// npm executable name
    program: String,
}

impl NpmInstaller {
    /// Create an installer that runs npm in `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            program: npm_program().to_string(),
        }
    }

    /// Use a different npm-compatible executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to npm for one install.
    ///
    /// `--no-save` leaves package.json and the lockfile untouched, so the
    /// declared ranges survive trial and revert installs.
    fn install_args(name: &str, version: &str) -> Vec<String> {
        vec![
            "install".to_string(),
            "--no-save".to_string(),
            format!("{}@{}", name, version),
        ]
    }

    /// Run a command and capture output
    fn run_command(&self, args: &[String], working_dir: &Path) -> std::io::Result<Output> {
        Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .output()
    }
}

impl Installer for NpmInstaller {
    fn install(&self, name: &str, version: &str) -> Result<(), InstallError> {
        let args = Self::install_args(name, version);
        debug!(program = %self.program, ?args, "running install");

        let output = self
            .run_command(&args, &self.working_dir)
            .map_err(|e| InstallError::new(name, version, format!("failed to execute command: {}", e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            Err(InstallError::new(name, version, message))
        }
    }
}

/// npm is a `.cmd` shim on Windows and cannot be spawned by its bare name
fn npm_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Reinstall every dependency at its declared version, in list order.
///
/// Stops at the first failure.
pub fn revert_modules(
    installer: &dyn Installer,
    dependencies: &[&DependencySpec],
) -> Result<(), InstallError> {
    for dep in dependencies {
        info!(name = %dep.name, declared = %dep.declared, version = %dep.version, "reverting");
        installer.install(&dep.name, &dep.version)?;
    }
    Ok(())
}
