use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clarity-mock")]
#[command(about = "A mock runtime for testing Clarity smart contracts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Only print errors and results
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print internal details and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call a contract function against the mock runtime
    Call(CallArgs),

    /// Check a Clarity contract source for required definitions
    Validate(ValidateArgs),

    /// Run a TOML scenario of calls, resetting the session before each step
    Scenario(ScenarioArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct CallArgs {
    /// Contract name
    #[arg(short, long, default_value = "property-verification")]
    pub contract: String,

    /// Function name to call
    #[arg(short, long)]
    pub function: String,

    /// Function arguments as JSON array (e.g., '["123 Main St", 1]')
    #[arg(short, long)]
    pub args: Option<String>,

    /// Principal to use as tx-sender
    #[arg(long)]
    pub sender: Option<String>,

    /// Block height to run at (not below the reset height)
    #[arg(long)]
    pub block_height: Option<u64>,

    /// Extra canned response, CONTRACT.function=value (repeatable)
    #[arg(long, value_name = "SPEC")]
    pub mock: Vec<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the Clarity contract source
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Path to the scenario TOML file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Extra canned response, CONTRACT.function=value (repeatable)
    #[arg(long, value_name = "SPEC")]
    pub mock: Vec<String>,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }
}
