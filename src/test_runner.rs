//! Test command execution
//!
//! Runs either the project's `npm test` script or an arbitrary shell command
//! supplied by the user. A non-zero exit is a `TestFailure`.

use crate::error::{ConfigError, TestFailure};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Number of trailing output lines kept in a failure message
const FAILURE_TAIL_LINES: usize = 20;

/// Runs the module's tests against whatever is currently installed
pub trait TestRunner {
    /// Human-readable command, used in reports and errors
    fn command(&self) -> String;

    /// Run the tests once
    fn run(&self) -> Result<(), TestFailure>;
}

/// Default runner: `npm test` in the project directory
#[derive(Debug, Clone)]
pub struct NpmTest {
    working_dir: PathBuf,
}

impl NpmTest {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl TestRunner for NpmTest {
    fn command(&self) -> String {
        "npm test".to_string()
    }

    fn run(&self) -> Result<(), TestFailure> {
        let program = if cfg!(windows) { "npm.cmd" } else { "npm" };
        let mut command = Command::new(program);
        command.arg("test").current_dir(&self.working_dir);
        execute(command, &self.command())
    }
}

/// Runner for a user-supplied shell command string
#[derive(Debug, Clone)]
pub struct CommandTest {
    command: String,
    working_dir: PathBuf,
}

impl CommandTest {
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_dir: working_dir.into(),
        }
    }
}

impl TestRunner for CommandTest {
    fn command(&self) -> String {
        self.command.clone()
    }

    fn run(&self) -> Result<(), TestFailure> {
        let mut command = shell_command(&self.command);
        command.current_dir(&self.working_dir);
        execute(command, &self.command)
    }
}

/// Pick the test runner for an optional custom command.
///
/// `None` selects `npm test`. A blank command is rejected.
pub fn select_test_runner(
    command: Option<&str>,
    working_dir: &Path,
) -> Result<Box<dyn TestRunner>, ConfigError> {
    match command {
        None => Ok(Box::new(NpmTest::new(working_dir))),
        Some(cmd) if cmd.trim().is_empty() => Err(ConfigError::invalid_input(
            "expected a non-empty test command string",
        )),
        Some(cmd) => Ok(Box::new(CommandTest::new(cmd, working_dir))),
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

fn execute(mut command: Command, label: &str) -> Result<(), TestFailure> {
    debug!(command = label, "running tests");
    let output = command
        .output()
        .map_err(|e| TestFailure::new(label, format!("failed to execute command: {}", e)))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(TestFailure::new(label, failure_message(&output)))
    }
}

/// Exit status plus the tail of the command's output
fn failure_message(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let combined = format!("{}{}", stdout, stderr);
    let lines: Vec<&str> = combined.trim_end().lines().collect();
    let tail = lines[lines.len().saturating_sub(FAILURE_TAIL_LINES)..].join("\n");

    if tail.is_empty() {
        output.status.to_string()
    } else {
        format!("{}\n{}", output.status, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_default_runner() {
        let runner = select_test_runner(None, Path::new(".")).unwrap();
        assert_eq!(runner.command(), "npm test");
    }

    #[test]
    fn test_select_custom_runner() {
        let runner = select_test_runner(Some("grunt test"), Path::new(".")).unwrap();
        assert_eq!(runner.command(), "grunt test");
    }

    #[test]
    fn test_select_empty_command_is_invalid_input() {
        let err = select_test_runner(Some(""), Path::new(".")).err().unwrap();
        assert!(matches!(err, ConfigError::InvalidInput { .. }));

        let err = select_test_runner(Some("   "), Path::new(".")).err().unwrap();
        assert!(matches!(err, ConfigError::InvalidInput { .. }));
    }

    #[test]
    fn test_command_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        let runner = CommandTest::new("exit 0", temp_dir.path());
        assert!(runner.run().is_ok());
    }

    #[test]
    fn test_command_failure_carries_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let runner = CommandTest::new("echo assertion failed && exit 3", temp_dir.path());

        let err = runner.run().unwrap_err();
        assert_eq!(err.command, "echo assertion failed && exit 3");
        assert!(err.message.contains("assertion failed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_runs_in_working_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("marker"), "").unwrap();
        let runner = CommandTest::new("test -f marker", temp_dir.path());
        assert!(runner.run().is_ok());
    }
}
