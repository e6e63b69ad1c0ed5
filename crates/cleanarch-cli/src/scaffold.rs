//! The one thing the binary does: create a project skeleton.
//!
//! Responsibility: settle the project name, wire the core materializer to
//! the local filesystem, and report the result. No layout logic lives here.

use std::io;

use tracing::{info, instrument};

use cleanarch_adapters::{LocalFilesystem, builtin_overrides};
use cleanarch_core::{
    application::{MaterializeSummary, Materializer},
    domain::{CLEAN_ARCHITECTURE, FsEntry, ProjectName, ScaffoldPlan},
};

use crate::{
    cli::{Cli, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute a scaffold run.
///
/// 1. Take the name from the argument, or prompt for it
/// 2. Build the materializer (validates the layout)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Materialize and print the completion notice
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = resolve_name(cli.name, &config)?;

    let materializer = Materializer::new(
        Box::new(LocalFilesystem::new()),
        &CLEAN_ARCHITECTURE,
        builtin_overrides(),
    )?;

    if cli.dry_run {
        let plan = materializer.plan(&name, &cli.output);
        return report_plan(&plan, &output);
    }

    info!(project = %name, parent = %cli.output.display(), "Scaffold started");
    let summary = materializer.materialize(&name, &cli.output)?;

    report_summary(&summary, &output)
}

fn resolve_name(arg: Option<String>, config: &AppConfig) -> CliResult<ProjectName> {
    match arg {
        Some(name) => ProjectName::new(name).map_err(|e| CliError::Core(e.into())),
        None => {
            let stdin = io::stdin();
            // The prompt goes to stderr so stdout stays clean for reports.
            prompt::ask_project_name(
                &mut stdin.lock(),
                &mut io::stderr(),
                &config.defaults.project_name,
            )
        }
    }
}

fn report_summary(summary: &MaterializeSummary, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(summary);
    }

    if summary.overwrote_existing {
        output.warning(&format!(
            "'{}' already existed; generated files were overwritten",
            summary.root.display()
        ))?;
    }
    output.success(&format!(
        "Clean architecture structure created for project '{}'",
        summary.project
    ))?;
    output.print(&format!(
        "  {} directories, {} files in {}",
        summary.directories,
        summary.files,
        summary.root.display()
    ))?;
    Ok(())
}

fn report_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(plan);
    }

    output.header(&format!("Dry run: would create {}", plan.root().display()))?;
    for entry in plan.entries() {
        output.print(&describe(plan, entry))?;
    }
    Ok(())
}

fn describe(plan: &ScaffoldPlan, entry: &FsEntry) -> String {
    match entry {
        FsEntry::Directory(dir) => format!("  dir   {}", plan.resolve(&dir.path).display()),
        FsEntry::File(file) if file.is_override => format!(
            "  file  {} ({} bytes)",
            plan.resolve(&file.path).display(),
            file.size()
        ),
        FsEntry::File(file) => format!("  file  {}", plan.resolve(&file.path).display()),
    }
}
