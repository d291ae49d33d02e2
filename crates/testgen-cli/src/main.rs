//! `testgen`: find out how a project tests, then print a prompt that asks
//! an AI assistant for tests in that style.
//!
//! `main` owns process concerns only. Arguments are parsed, logging and the
//! application config are set up, and the chosen handler in [`commands`]
//! runs. A failure is turned into stderr text and an exit code by
//! [`CliError`]: 2 for bad input, 3 when a root or framework is not found,
//! 4 for configuration problems and 1 for anything else.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and must exit 0.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }
    debug!(format = %cli.global.output_format, verbose = cli.global.verbose, "Arguments parsed");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Application config rejected");
            eprintln!("error: failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color || config.output.no_color;

    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Prompt(cmd) => commands::prompt::execute(cmd, config, output),
        Commands::Detect(cmd) => commands::detect::execute(cmd, output),
        Commands::Run(cmd) => commands::run::execute(cmd, output),
        Commands::Config(cmd) => commands::config::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();
    let colored = !no_color && std::io::stderr().is_terminal();
    eprint!("{}", err.render(verbose, colored));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_command_accepts_root() {
        let cmd = Cli::command();
        for name in ["init", "prompt", "detect", "run"] {
            let sub = cmd.find_subcommand(name).unwrap();
            assert!(sub.get_arguments().any(|a| a.get_id() == "root"), "{name}");
        }
    }
}
