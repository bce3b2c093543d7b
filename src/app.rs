//! End-to-end workflow for one project
//!
//! select dependencies → fetch candidates → list them → install/test/revert

use crate::config::Settings;
use crate::domain::TestResult;
use crate::error::AppError;
use crate::installer::Installer;
use crate::manifest::{manifest_path, select_dependencies};
use crate::orchestrator::Orchestrator;
use crate::progress::Progress;
use crate::registry::{collect_candidates, VersionSource};
use crate::report::{report_available, Reporter};
use crate::test_runner::TestRunner;
use std::io::Write;
use tracing::info;

/// External collaborators used by a run
pub struct Collaborators<'a> {
    pub source: &'a dyn VersionSource,
    pub installer: &'a dyn Installer,
    pub runner: &'a dyn TestRunner,
    pub reporter: &'a dyn Reporter,
}

/// Check every selected dependency of the project described by `settings`.
///
/// The available-versions listing is written to `listing`.
pub async fn check_project(
    settings: &Settings,
    collaborators: &Collaborators<'_>,
    progress: &mut Progress,
    listing: &mut dyn Write,
) -> Result<Vec<TestResult>, AppError> {
    let options = &settings.options;
    let manifest = manifest_path(&settings.project_dir);
    info!(path = %manifest.display(), "reading dependencies");
    let declared = select_dependencies(&manifest, options.modules.as_ref())?;

    progress.start(declared.len() as u64, "Fetching versions");
    let available = collect_candidates(collaborators.source, &declared, options.latest, |dep| {
        progress.tick(&dep.name)
    })
    .await;
    progress.finish_and_clear();

    report_available(&available, options.color, listing)?;

    let orchestrator = Orchestrator::new(
        collaborators.installer,
        collaborators.runner,
        collaborators.reporter,
    );
    orchestrator.test_modules_versions(options, &declared, &available)
}
