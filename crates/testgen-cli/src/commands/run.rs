//! `testgen run`: tell the user how to run their tests.
//!
//! Nothing is executed; the command points at the `package.json` script
//! or the framework's own runner.

use serde::Serialize;
use tracing::instrument;

use testgen_core::domain::TestingFramework;

use crate::{
    cli::{OutputFormat, RunArgs},
    commands::ProjectContext,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct RunReport<'a> {
    framework: TestingFramework,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<&'a str>,
    command: String,
}

#[instrument(skip_all, fields(root = %args.root.root.display()))]
pub fn execute(args: RunArgs, output: OutputManager) -> CliResult<()> {
    let ctx = ProjectContext::open(&args.root.root)?;
    let script = ctx.test_scripts().locate(ctx.root());
    let resolver = ctx.config_resolver();
    let framework = resolver.get_config().testing_framework;

    let command = match &script {
        Some(script) => npm_command(&script.name),
        None => runner_hint(framework).to_string(),
    };

    if output.format() == OutputFormat::Json {
        output.json(&RunReport {
            framework,
            script: script.as_ref().map(|s| s.name.as_str()),
            command,
        })?;
        return Ok(());
    }

    match &script {
        Some(found) => {
            output.success(&format!("Found test script: {} ({})", found.name, found.command))?;
            output.print("")?;
            output.print(&format!("Run tests using: {command}"))?;
        }
        None => {
            output.info("No test script found in package.json")?;
            if framework.is_known() {
                output.print(&format!("Run tests using: {command}"))?;
            }
        }
    }

    output.print("")?;
    output.print("Framework-specific commands:")?;
    for (name, hint) in [
        ("Jest", runner_hint(TestingFramework::Jest)),
        ("Vitest", runner_hint(TestingFramework::Vitest)),
        (".NET", runner_hint(TestingFramework::XUnit)),
    ] {
        output.print(&format!("  - {name}: {hint}"))?;
    }

    if script.is_none() && !framework.is_dotnet() {
        output.print("")?;
        output.print("Or add a test script to your package.json:")?;
        output.print(&format!(
            "  \"scripts\": {{ \"test\": \"{}\" }}",
            script_for(framework)
        ))?;
    }
    Ok(())
}

/// `npm test` for the bare `test` script, `npm run <name>` otherwise.
fn npm_command(script: &str) -> String {
    if script == "test" {
        "npm test".to_string()
    } else {
        format!("npm run {script}")
    }
}

fn runner_hint(framework: TestingFramework) -> &'static str {
    match framework {
        TestingFramework::Jest => "npx jest",
        TestingFramework::Vitest => "npx vitest",
        TestingFramework::Mocha => "npx mocha",
        TestingFramework::Jasmine => "npx jasmine",
        TestingFramework::XUnit | TestingFramework::NUnit | TestingFramework::MsTest => {
            "dotnet test"
        }
        TestingFramework::Unknown => "npm test",
    }
}

/// What a new `test` script should invoke.
fn script_for(framework: TestingFramework) -> &'static str {
    match framework {
        TestingFramework::Vitest => "vitest",
        TestingFramework::Mocha => "mocha",
        TestingFramework::Jasmine => "jasmine",
        _ => "jest",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_test_script_uses_npm_test() {
        assert_eq!(npm_command("test"), "npm test");
        assert_eq!(npm_command("test:unit"), "npm run test:unit");
    }

    #[test]
    fn dotnet_frameworks_share_the_dotnet_runner() {
        assert_eq!(runner_hint(TestingFramework::NUnit), "dotnet test");
        assert_eq!(runner_hint(TestingFramework::MsTest), "dotnet test");
        assert_eq!(runner_hint(TestingFramework::Jest), "npx jest");
    }
}
