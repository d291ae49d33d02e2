//! `testgen init`: detect the project and create its test directory.

use std::io::IsTerminal as _;

use serde::Serialize;
use tracing::{debug, info, instrument};

use testgen_core::domain::registry::{DOTNET_DEFAULT_TEST_DIRECTORY, JS_DEFAULT_TEST_DIRECTORY};
use testgen_core::domain::{DetectedProject, DetectionResult, Ide, ProjectType, ResolvedConfig};

use crate::{
    cli::{GlobalArgs, InitArgs, OutputFormat},
    commands::ProjectContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct InitReport<'a> {
    project_type: ProjectType,
    detection: &'a DetectionResult,
    config_source: String,
    test_directory: &'a str,
    created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    ide: Option<Ide>,
}

/// 1. Detect project and framework
/// 2. Pick the test directory: config, then detection, then the ecosystem default
/// 3. Create it unless it exists or `--dry-run`
/// 4. Report the IDE marker, if any
#[instrument(skip_all, fields(root = %args.root.root.display(), dry_run = args.dry_run))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let ctx = ProjectContext::open(&args.root.root)?;
    let human = output.format() == OutputFormat::Human;

    if human {
        output.header("Initializing testgen...")?;
        output.print("")?;
    }

    let project = ctx.project_detector().detect(ctx.root());
    let detection = ctx.framework_detector().detect(ctx.root());
    let resolver = ctx.config_resolver();
    let config = resolver.get_config();

    if output.format() != OutputFormat::Json {
        print_summary(&project, &detection, &output)?;
    }

    let test_dir = choose_test_directory(config, &detection, &project);
    let path = ctx.root().join(test_dir);
    let mut created = false;

    if ctx.filesystem().is_dir(&path) {
        debug!(path = %path.display(), "Test directory present");
        if output.format() != OutputFormat::Json {
            output.success(&format!("Test directory already exists: {test_dir}"))?;
        }
    } else if args.dry_run {
        if output.format() != OutputFormat::Json {
            output.info(&format!("Dry run: would create {}", path.display()))?;
        }
    } else {
        let ask = !args.yes && !global.quiet && human && std::io::stdin().is_terminal();
        if ask && !confirm(&format!("Create test directory '{test_dir}'?"))? {
            return Err(CliError::Cancelled);
        }
        ctx.filesystem().create_dir_all(&path)?;
        created = true;
        info!(path = %path.display(), "Test directory created");
        if output.format() != OutputFormat::Json {
            output.success(&format!("Created {test_dir}"))?;
        }
    }

    let ide = Some(ctx.ide_detector().detect(ctx.root())).filter(|ide| *ide != Ide::Unknown);

    if output.format() == OutputFormat::Json {
        output.json(&InitReport {
            project_type: project.project_type,
            detection: &detection,
            config_source: resolver.source().to_string(),
            test_directory: test_dir,
            created,
            ide,
        })?;
        return Ok(());
    }

    if let Some(ide) = ide {
        output.print("")?;
        output.info(&format!("IDE detected: {ide}"))?;
        output.print("  Prompts work with any AI IDE, no extra setup needed.")?;
    }

    if human {
        output.print("")?;
        output.success("Setup complete!")?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  1. Print a prompt for this project:  testgen prompt")?;
        output.print("  2. Or pick one explicitly:           testgen prompt jest-react")?;
        output.print("  3. Pin the detected settings:        testgen config generate")?;
    }
    Ok(())
}

fn print_summary(
    project: &DetectedProject,
    detection: &DetectionResult,
    output: &OutputManager,
) -> CliResult<()> {
    output.print("Detected configuration:")?;
    output.field("Project type", project.project_type.as_str())?;
    output.field("Testing framework", detection.framework.as_str())?;
    if let Some(file) = &detection.config_file {
        output.field("Config file", file)?;
    }
    if let Some(dir) = &detection.test_directory {
        output.field("Test directory", dir)?;
    }
    output.print("")?;
    Ok(())
}

fn choose_test_directory<'a>(
    config: &'a ResolvedConfig,
    detection: &'a DetectionResult,
    project: &DetectedProject,
) -> &'a str {
    config
        .test_directory
        .as_deref()
        .or(detection.test_directory.as_deref())
        .unwrap_or(if project.project_type == ProjectType::DotNet {
            DOTNET_DEFAULT_TEST_DIRECTORY
        } else {
            JS_DEFAULT_TEST_DIRECTORY
        })
}

#[cfg(feature = "interactive")]
fn confirm(question: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(question)
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(question: &str) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("{question} [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use testgen_core::domain::{FrameworkConfig, TestingFramework};

    fn project(project_type: ProjectType) -> DetectedProject {
        DetectedProject {
            project_type,
            source_directory: None,
            test_directory: None,
            has_typescript: false,
            has_react: false,
            has_vue: false,
            has_angular: false,
        }
    }

    fn config(test_directory: Option<&str>) -> ResolvedConfig {
        ResolvedConfig {
            project_type: ProjectType::React,
            testing_framework: TestingFramework::Jest,
            test_directory: test_directory.map(Into::into),
            source_directory: None,
            framework_config: FrameworkConfig::default(),
        }
    }

    #[test]
    fn config_directory_wins() {
        let mut detection = DetectionResult::new(TestingFramework::Jest, ProjectType::React);
        detection.test_directory = Some("tests".into());
        let cfg = config(Some("spec"));
        assert_eq!(
            choose_test_directory(&cfg, &detection, &project(ProjectType::React)),
            "spec"
        );
    }

    #[test]
    fn ecosystem_default_when_nothing_found() {
        let detection = DetectionResult::new(TestingFramework::Unknown, ProjectType::Unknown);
        let cfg = config(None);
        assert_eq!(
            choose_test_directory(&cfg, &detection, &project(ProjectType::Vue)),
            "__tests__"
        );
        assert_eq!(
            choose_test_directory(&cfg, &detection, &project(ProjectType::DotNet)),
            "Tests"
        );
    }
}
