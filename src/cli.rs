//! CLI argument parsing module for next-update

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Tests if a module's dependencies can be updated to newer versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "next-update",
    about = "Tests if a module's dependencies can be updated to newer versions"
)]
pub struct CliArgs {
    /// Project directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Print version information
    #[arg(short = 'V', long = "version")]
    pub print_version: bool,

    // Selection
    /// Only check this module (can be specified multiple times, accepts name@version)
    #[arg(short, long, action = ArgAction::Append)]
    pub module: Vec<String>,

    /// Only try the newest available version of each dependency
    #[arg(long)]
    pub latest: bool,

    // Run mode
    /// Install the next version of every dependency, test once, then revert
    #[arg(short, long)]
    pub all: bool,

    /// Custom test command to run instead of `npm test`
    #[arg(short, long, value_name = "COMMAND")]
    pub test: Option<String>,

    /// npm registry URL
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    // Output options
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["next-update"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.print_version);
        assert!(args.module.is_empty());
        assert!(!args.latest);
        assert!(!args.all);
        assert!(args.test.is_none());
        assert!(args.registry.is_none());
        assert!(!args.no_color);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["next-update", "/some/path"]);
        assert_eq!(args.path, PathBuf::from("/some/path"));
    }

    #[test]
    fn test_module_multiple() {
        let args = CliArgs::parse_from(["next-update", "-m", "lodash", "--module", "q@1.0.1"]);
        assert_eq!(args.module, vec!["lodash", "q@1.0.1"]);
    }

    #[test]
    fn test_all_flags() {
        let args = CliArgs::parse_from(["next-update", "-a"]);
        assert!(args.all);
        let args = CliArgs::parse_from(["next-update", "--all"]);
        assert!(args.all);
    }

    #[test]
    fn test_custom_command() {
        let args = CliArgs::parse_from(["next-update", "-t", "grunt test"]);
        assert_eq!(args.test.as_deref(), Some("grunt test"));
        let args = CliArgs::parse_from(["next-update", "--test", "make check"]);
        assert_eq!(args.test.as_deref(), Some("make check"));
    }

    #[test]
    fn test_version_flag() {
        let args = CliArgs::parse_from(["next-update", "-V"]);
        assert!(args.print_version);
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "next-update",
            "/path/to/project",
            "--module",
            "lodash",
            "--latest",
            "--no-color",
            "--json",
            "--registry",
            "http://localhost:4873",
            "-q",
        ]);
        assert_eq!(args.path, PathBuf::from("/path/to/project"));
        assert_eq!(args.module, vec!["lodash"]);
        assert!(args.latest);
        assert!(args.no_color);
        assert!(args.json);
        assert!(args.quiet);
        assert_eq!(args.registry.as_deref(), Some("http://localhost:4873"));
    }
}
