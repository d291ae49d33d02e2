//! `testgen detect`: print the detection result.

use serde::Serialize;
use tracing::instrument;

use testgen_core::domain::{DetectedProject, DetectionResult};

use crate::{
    cli::{DetectArgs, DetectFormat, OutputFormat},
    commands::ProjectContext,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct DetectReport<'a> {
    #[serde(flatten)]
    detection: &'a DetectionResult,
    project: &'a DetectedProject,
}

#[instrument(skip_all, fields(root = %args.root.root.display()))]
pub fn execute(args: DetectArgs, output: OutputManager) -> CliResult<()> {
    let ctx = ProjectContext::open(&args.root.root)?;
    let detection = ctx.framework_detector().detect(ctx.root());
    let project = ctx.project_detector().detect(ctx.root());

    if args.format == DetectFormat::Json || output.format() == OutputFormat::Json {
        output.json(&DetectReport {
            detection: &detection,
            project: &project,
        })?;
        return Ok(());
    }

    print_human(&detection, &project, &output)
}

fn print_human(
    detection: &DetectionResult,
    project: &DetectedProject,
    output: &OutputManager,
) -> CliResult<()> {
    output.header("Detection")?;
    output.field("Project type", project.project_type.as_str())?;
    output.field("Testing framework", detection.framework.as_str())?;
    if let Some(version) = &detection.version {
        output.field("Version", version)?;
    }
    if let Some(file) = &detection.config_file {
        output.field("Config file", file)?;
    }
    output.field(
        "Test directory",
        detection
            .test_directory
            .as_deref()
            .unwrap_or("(alongside source files)"),
    )?;
    if let Some(dir) = &project.source_directory {
        output.field("Source directory", dir)?;
    }
    output.field("TypeScript", yes_no(project.has_typescript))?;

    if let Some(caps) = detection.capabilities {
        output.field("React Testing Library", yes_no(caps.react_testing_library))?;
        output.field("Testing Library", yes_no(caps.testing_library))?;
    }

    if detection.is_inconclusive() {
        output.print("")?;
        output.warning("No testing framework detected")?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
