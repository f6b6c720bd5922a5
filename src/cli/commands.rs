use crate::cli::args::{CallArgs, ValidateArgs};
use crate::cli::output::CommandOutput;
use crate::config::Config;
use crate::logging;
use crate::runtime::{MockDispatcher, Outcome};
use crate::ui::formatter::Formatter;
use crate::validator::ValidationReport;
use crate::{MockError, Result};
use miette::{IntoDiagnostic, WrapErr};
use serde::Serialize;
use serde_json::Value;

fn print_info(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::info(message));
    }
}

fn print_success(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::success(message));
    }
}

fn print_json<T: Serialize>(output: &CommandOutput<T>) -> Result<()> {
    let json = serde_json::to_string_pretty(output)
        .into_diagnostic()
        .wrap_err("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Execute the call command
pub fn call(args: CallArgs, config: &Config) -> Result<()> {
    let mut session = config.session()?;
    if let Some(sender) = &args.sender {
        session.set_tx_sender(sender.clone());
    }
    if let Some(height) = args.block_height {
        session.set_block_height(height)?;
    }

    let dispatcher = MockDispatcher::property_verification().with_cli_specs(&args.mock)?;
    let parsed_args = match &args.args {
        Some(json) => parse_args(json)?,
        None => Vec::new(),
    };

    let json = args.json || config.wants_json();
    let rendered_args = args.args.as_deref().map(str::trim);
    if !json {
        print_info(format!(
            "Calling {} as {} at block {}",
            Formatter::format_function_call(&args.contract, &args.function, rendered_args),
            session.tx_sender(),
            session.block_height()
        ));
        if Formatter::is_verbose() {
            for (i, arg) in parsed_args.iter().enumerate() {
                print_info(format!("  arg {}: {}", i, arg));
            }
        }
    }
    logging::log_call_start(&args.contract, &args.function, rendered_args);

    let outcome = dispatcher.dispatch(&session, &args.contract, &args.function, &parsed_args);
    logging::log_call_complete(&outcome.to_string());

    if json {
        return print_json(&CommandOutput::<Outcome>::success(outcome));
    }

    if Formatter::is_quiet() {
        println!("{}", outcome);
    } else {
        println!("Result: {}", Formatter::format_outcome(&outcome));
    }
    Ok(())
}

/// Execute the validate command
pub fn validate(args: ValidateArgs, config: &Config) -> Result<()> {
    let path = args.source.unwrap_or_else(|| config.source_path());
    let validator = config.source_validator();
    let json = args.json || config.wants_json();

    if !json {
        print_info(format!("Validating contract source: {:?}", path));
    }

    let report = match validator.read_report(&path) {
        Ok(report) => report,
        Err(err) => {
            if json {
                print_json(&CommandOutput::<ValidationReport>::failure(
                    None,
                    vec![err.to_string()],
                ))?;
            }
            return Err(err);
        }
    };
    let first_missing = report.first_missing().map(str::to_string);

    if json {
        let output = match &first_missing {
            None => CommandOutput::success(&report),
            Some(marker) => {
                CommandOutput::failure(Some(&report), vec![format!("missing marker {marker:?}")])
            }
        };
        print_json(&output)?;
    } else if !Formatter::is_quiet() {
        println!("{}", Formatter::format_validation_report(&report));
    }

    match first_missing {
        Some(marker) => Err(MockError::MissingMarker(marker).into()),
        None => {
            if !json {
                print_success(format!("All {} markers present.", report.found.len()));
            }
            Ok(())
        }
    }
}

/// Parse a JSON array of call arguments.
///
/// The values are opaque to the dispatcher; only the outer shape is checked.
pub fn parse_args(json: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json).map_err(|e| {
        MockError::InvalidArguments(format!("Failed to parse JSON arguments: {}", e))
    })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(MockError::InvalidArguments(format!(
            "Arguments must be a JSON array, got: {}",
            other
        ))
        .into()),
    }
}
