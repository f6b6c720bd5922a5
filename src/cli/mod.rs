pub mod args;
pub mod commands;
pub mod output;

pub use args::{CallArgs, Cli, Commands, CompletionsArgs, ScenarioArgs, ValidateArgs, Verbosity};
