//! `testgen prompt`: print a test-generation prompt.

use serde::Serialize;
use tracing::{info, instrument, warn};

use testgen_core::application::PromptService;
use testgen_core::domain::{PromptKey, PromptRequest, ResolvedConfig, TestTarget};

use crate::{
    cli::{OutputFormat, PromptArgs},
    commands::{ProjectContext, prompt_catalog},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct PromptReport<'a> {
    key: &'static str,
    framework: &'static str,
    project_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    test_type: Option<&'static str>,
    prompt: &'a str,
}

#[instrument(skip_all, fields(root = %args.root.root.display()))]
pub fn execute(args: PromptArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = PromptService::new(prompt_catalog(&config)?);

    if args.list {
        return list(&service, &output);
    }

    let name = args.framework.as_deref().unwrap_or(&config.defaults.prompt);
    let request = parse_request(name);

    let ctx = ProjectContext::open(&args.root.root)?;
    let resolver = ctx.config_resolver();
    let resolved = resolver.get_config();

    if request == PromptRequest::Auto && !resolved.testing_framework.is_known() {
        return Err(CliError::FrameworkNotDetected {
            project_type: resolved.project_type,
        });
    }

    let target = args.target();
    let rendered = service.render_request(request, resolved, &target)?;
    let key = rendered.key;
    info!(key = %key, source = %resolver.source(), "Prompt selected");

    match output.format() {
        OutputFormat::Json => output.json(&PromptReport {
            key: key.as_str(),
            framework: key.framework().as_str(),
            project_type: resolved.project_type.as_str(),
            test_type: target
                .test_type
                .or(key.default_test_type())
                .map(|t| t.as_str()),
            prompt: &rendered.text,
        })?,
        OutputFormat::Human => {
            print_framed(request, key, resolved, &target, &rendered.text, &output)?
        }
        OutputFormat::Plain | OutputFormat::Auto => output.emit(&rendered.text)?,
    }
    Ok(())
}

/// A name we do not know means auto-detect, with a warning.
fn parse_request(name: &str) -> PromptRequest {
    let request = PromptRequest::parse_lenient(name);
    if request == PromptRequest::Auto && !name.eq_ignore_ascii_case("auto") {
        warn!(name, "Unrecognised framework name, auto-detecting instead");
    }
    request
}

fn print_framed(
    request: PromptRequest,
    key: PromptKey,
    config: &ResolvedConfig,
    target: &TestTarget,
    text: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if request == PromptRequest::Auto {
        output.info(&format!(
            "Auto-detected: {} ({})",
            config.testing_framework, config.project_type
        ))?;
        output.print("")?;
    }

    output.header("Unit Test Generation Prompt")?;
    output.rule()?;
    output.emit(text)?;
    output.rule()?;
    output.print("")?;
    output.print("Copy this prompt into your AI assistant, then ask:")?;
    let subject = target.name.as_deref().unwrap_or("ComponentName");
    output.print(&format!("  \"Using this prompt, generate unit tests for {subject}\""))?;
    output.print("")?;
    output.field("Template", key.as_str())?;
    output.field("Framework", key.framework().as_str())?;
    output.field("Project", config.project_type.as_str())?;
    Ok(())
}

fn list(service: &PromptService, output: &OutputManager) -> CliResult<()> {
    let keys = service.available();

    if output.format() == OutputFormat::Json {
        let names: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        output.json(&names)?;
        return Ok(());
    }

    output.header("Available prompts:")?;
    for key in keys {
        output.emit(&format!("  {:<14} {}", key.as_str(), key.framework()))?;
    }
    Ok(())
}
