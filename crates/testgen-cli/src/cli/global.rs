//! Options accepted before or after any subcommand.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

const HEADING: &str = "Global options";

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv every probe, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = HEADING)]
    pub verbose: u8,

    /// Only print errors and the requested payload
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help_heading = HEADING
    )]
    pub quiet: bool,

    /// Never emit ANSI colour
    #[arg(long, global = true, env = "NO_COLOR", help_heading = HEADING)]
    pub no_color: bool,

    /// Read application settings from FILE instead of the per-user location
    #[arg(short, long, global = true, value_name = "FILE", help_heading = HEADING)]
    pub config: Option<PathBuf>,

    /// Rendering of command output
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help_heading = HEADING
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Headers, colour and hints
    Human,
    /// Bare text, suitable for pipes
    Plain,
    /// One pretty-printed JSON document on stdout
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Human => "human",
            Self::Plain => "plain",
            Self::Json => "json",
        })
    }
}
