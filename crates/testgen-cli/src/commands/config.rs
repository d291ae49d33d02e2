//! `testgen config`: inspect or write `testgen.config.toml`.

use serde::Serialize;
use tracing::instrument;

use testgen_core::domain::ResolvedConfig;

use crate::{
    cli::{ConfigCommands, GenerateArgs, OutputFormat},
    commands::ProjectContext,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct ShowReport<'a> {
    source: String,
    config: &'a ResolvedConfig,
}

pub fn execute(cmd: ConfigCommands, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show { root } => show(ProjectContext::open(&root.root)?, &output),
        ConfigCommands::Path { root } => {
            let ctx = ProjectContext::open(&root.root)?;
            output.emit(&ctx.config_resolver().config_path().display().to_string())?;
            Ok(())
        }
        ConfigCommands::Generate(args) => generate(args, &output),
    }
}

fn show(ctx: ProjectContext, output: &OutputManager) -> CliResult<()> {
    let resolver = ctx.config_resolver();
    let config = resolver.get_config();

    if output.format() == OutputFormat::Json {
        output.json(&ShowReport {
            source: resolver.source().to_string(),
            config,
        })?;
        return Ok(());
    }

    output.header("Resolved configuration")?;
    output.field("Source", &resolver.source().to_string())?;
    if !resolver.source().is_file() && resolver.has_config_file() {
        output.warning(&format!(
            "{} exists but was rejected; run with -v to see why",
            resolver.config_path().display()
        ))?;
    }
    output.print("")?;
    output.emit(resolver.render_config_file(&Default::default())?.trim_end())?;
    Ok(())
}

#[instrument(skip_all, fields(root = %args.root.root.display(), force = args.force))]
fn generate(args: GenerateArgs, output: &OutputManager) -> CliResult<()> {
    let ctx = ProjectContext::open(&args.root.root)?;
    let resolver = ctx.config_resolver();
    let path = resolver.generate_config_file(&args.overrides(), args.force)?;

    output.success(&format!("Config file written to {}", path.display()))?;
    output.print("  Edit it to pin settings; delete it to return to auto-detection.")?;
    Ok(())
}
