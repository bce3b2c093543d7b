//! next-update - test newer versions of npm dependencies before upgrading

use clap::Parser;
use next_update::app::{check_project, Collaborators};
use next_update::cli::CliArgs;
use next_update::config::Settings;
use next_update::installer::NpmInstaller;
use next_update::output::{create_formatter, OutputConfig};
use next_update::progress::Progress;
use next_update::registry::{HttpClient, NpmRegistry};
use next_update::report::ConsoleReporter;
use next_update::test_runner::select_test_runner;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.print_version {
        println!("next-update {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked from `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "next_update=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(&args)?;
    let color = settings.options.color;

    if args.verbose {
        eprintln!("next-update v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Project: {}", settings.project_dir.display());
        eprintln!("Registry: {}", settings.registry);
    }

    let source = NpmRegistry::with_base_url(HttpClient::new()?, &settings.registry);
    let installer = NpmInstaller::new(settings.project_dir.clone());
    let runner = select_test_runner(settings.options.command.as_deref(), &settings.project_dir)?;
    let reporter = if args.json {
        ConsoleReporter::stderr_only(color)
    } else {
        ConsoleReporter::new(color)
    };
    let collaborators = Collaborators {
        source: &source,
        installer: &installer,
        runner: runner.as_ref(),
        reporter: &reporter,
    };

    let mut progress = Progress::new(!args.quiet && !args.json);
    let results = if args.json {
        check_project(&settings, &collaborators, &mut progress, &mut io::sink()).await?
    } else {
        let mut stdout = io::stdout();
        check_project(&settings, &collaborators, &mut progress, &mut stdout).await?
    };

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.quiet, color));
    let mut stdout = io::stdout().lock();
    formatter.format(&results, &mut stdout)?;
    stdout.flush()?;

    if results.iter().all(|r| r.works) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
