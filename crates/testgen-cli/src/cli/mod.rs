//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value enums live here and nowhere else.
//! No detection logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use testgen_core::domain::{ConfigOverrides, ProjectType, TestTarget, TestType, TestingFramework};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "testgen",
    bin_name = "testgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9ea} Zero-config test framework detection and test prompts",
    long_about = "testgen inspects a project's files and package manifest, works out \
                  which testing framework it uses, and prints a ready-made prompt for \
                  generating unit tests with an AI assistant.",
    after_help = "EXAMPLES:\n\
        \x20 testgen detect\n\
        \x20 testgen prompt            # auto-detect the framework\n\
        \x20 testgen prompt jest-react\n\
        \x20 testgen init --root ./my-app\n\
        \x20 testgen completions bash > /usr/share/bash-completion/completions/testgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the project and prepare its test directory.
    #[command(
        about = "Detect the project and create its test directory",
        after_help = "EXAMPLES:\n\
            \x20 testgen init\n\
            \x20 testgen init --dry-run\n\
            \x20 testgen init --root ../api --yes"
    )]
    Init(InitArgs),

    /// Print the test-generation prompt for a framework.
    #[command(
        visible_alias = "generate",
        about = "Print a test-generation prompt",
        after_help = "EXAMPLES:\n\
            \x20 testgen prompt\n\
            \x20 testgen prompt vitest\n\
            \x20 testgen prompt xunit --root ./MyService\n\
            \x20 testgen prompt --source-file src/Cart.tsx --name Cart --test-type component\n\
            \x20 testgen prompt --scenario 'empty cart' --scenario 'coupon applied'\n\
            \x20 testgen prompt --list"
    )]
    Prompt(PromptArgs),

    /// Show what detection found.
    #[command(
        about = "Show detected project type and testing framework",
        after_help = "EXAMPLES:\n\
            \x20 testgen detect\n\
            \x20 testgen detect --format json | jq .framework"
    )]
    Detect(DetectArgs),

    /// Show how to run the project's tests.
    #[command(
        about = "Show how to run the project's tests",
        after_help = "EXAMPLES:\n\
            \x20 testgen run\n\
            \x20 testgen run --root ./web"
    )]
    Run(RunArgs),

    /// Inspect or write the project config file.
    #[command(
        about = "Project configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 testgen config show\n\
            \x20 testgen config path\n\
            \x20 testgen config generate --framework vitest --force"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 testgen completions bash > ~/.local/share/bash-completion/completions/testgen\n\
            \x20 testgen completions zsh  > ~/.zfunc/_testgen\n\
            \x20 testgen completions fish > ~/.config/fish/completions/testgen.fish"
    )]
    Completions(CompletionsArgs),
}

/// Project root shared by every project-facing command.
#[derive(Debug, Clone, Args)]
pub struct RootArg {
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub root: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[command(flatten)]
    pub root: RootArg,

    /// Report what would be created without touching the tree.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip the confirmation prompt"
    )]
    pub yes: bool,
}

// ── prompt ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Framework name or `auto`. Unrecognised names fall back to auto.
    #[arg(
        value_name = "FRAMEWORK",
        help = "jest, jest-react, jest-node, vitest, mocha, jasmine, xunit, nunit, mstest or auto"
    )]
    pub framework: Option<String>,

    #[command(flatten)]
    pub root: RootArg,

    #[arg(long = "list", help = "List available prompt templates")]
    pub list: bool,

    #[arg(long = "source-file", value_name = "FILE", help = "File the tests are for")]
    pub source_file: Option<String>,

    #[arg(long = "name", value_name = "NAME", help = "Component, function, class or hook name")]
    pub name: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "What the code under test does")]
    pub description: Option<String>,

    #[arg(
        long = "test-type",
        value_name = "TYPE",
        help = "component, function, class, hook or utility"
    )]
    pub test_type: Option<TestType>,

    /// Repeatable. Replaces the default scenarios for the test type.
    #[arg(long = "scenario", value_name = "TEXT", help = "Scenario to cover (repeatable)")]
    pub scenarios: Vec<String>,
}

impl PromptArgs {
    pub fn target(&self) -> TestTarget {
        TestTarget {
            source_file: self.source_file.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            test_type: self.test_type,
            scenarios: self.scenarios.clone(),
        }
    }
}

// ── detect ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DetectArgs {
    #[command(flatten)]
    pub root: RootArg,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: DetectFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DetectFormat {
    Human,
    Json,
}

// ── run ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub root: RootArg,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration and where it came from.
    Show {
        #[command(flatten)]
        root: RootArg,
    },
    /// Print the path of the project config file.
    Path {
        #[command(flatten)]
        root: RootArg,
    },
    /// Write the resolved configuration to `testgen.config.toml`.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub root: RootArg,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing config file")]
    pub force: bool,

    #[arg(long = "project-type", value_name = "TYPE", help = "Override the project type")]
    pub project_type: Option<ProjectType>,

    #[arg(long = "framework", value_name = "FRAMEWORK", help = "Override the testing framework")]
    pub framework: Option<TestingFramework>,

    #[arg(long = "test-dir", value_name = "DIR", help = "Override the test directory")]
    pub test_directory: Option<String>,

    #[arg(long = "source-dir", value_name = "DIR", help = "Override the source directory")]
    pub source_directory: Option<String>,
}

impl GenerateArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project_type: self.project_type,
            testing_framework: self.framework,
            test_directory: self.test_directory.clone(),
            source_directory: self.source_directory.clone(),
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
