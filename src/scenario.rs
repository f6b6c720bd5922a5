use crate::cli::args::ScenarioArgs;
use crate::cli::commands::parse_args;
use crate::logging;
use crate::runtime::{MockDispatcher, Outcome, SessionContext, PROPERTY_VERIFICATION};
use crate::ui::formatter::Formatter;
use crate::{MockError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioStep {
    pub name: Option<String>,
    #[serde(default = "default_contract")]
    pub contract: String,
    pub function: String,
    /// JSON array of arguments
    pub args: Option<String>,
    /// JSON the outcome must match; objects match on the keys they list
    pub expected: Option<String>,
    /// `tx-sender` for this step, applied after the reset
    pub sender: Option<String>,
    /// Block height for this step, applied after the reset
    pub block_height: Option<u64>,
}

fn default_contract() -> String {
    PROPERTY_VERIFICATION.to_string()
}

impl ScenarioStep {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.function)
    }
}

impl Scenario {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            MockError::FileError(format!("Failed to parse scenario TOML: {}", e)).into()
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub label: String,
    pub outcome: Outcome,
    pub passed: bool,
    pub failure: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct ScenarioReport {
    pub steps: Vec<StepReport>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.passed)
    }
}

/// Run every step against a freshly reset session, stopping at the first
/// failing step.
pub fn run_steps(scenario: &Scenario, dispatcher: &MockDispatcher) -> Result<ScenarioReport> {
    let mut session = SessionContext::new();
    let mut report = ScenarioReport::default();

    for (i, step) in scenario.steps.iter().enumerate() {
        session.reset();
        if let Some(sender) = &step.sender {
            session.set_tx_sender(sender.clone());
        }
        if let Some(height) = step.block_height {
            session.set_block_height(height)?;
        }

        let args = match &step.args {
            Some(json) => parse_args(json)?,
            None => Vec::new(),
        };
        let outcome = dispatcher.dispatch(&session, &step.contract, &step.function, &args);

        let failure = match &step.expected {
            Some(expected) => {
                let expected: Value = serde_json::from_str(expected).map_err(|e| {
                    MockError::InvalidArguments(format!(
                        "Step '{}' has invalid expected JSON: {}",
                        step.label(),
                        e
                    ))
                })?;
                let actual = outcome.to_json()?;
                if json_matches(&actual, &expected) {
                    None
                } else {
                    Some(format!("Expected '{}', got '{}'", expected, actual))
                }
            }
            None => None,
        };

        let passed = failure.is_none();
        logging::log_scenario_step(i + 1, step.label(), passed);
        report.steps.push(StepReport {
            label: step.label().to_string(),
            outcome,
            passed,
            failure,
        });
        if !passed {
            break;
        }
    }

    Ok(report)
}

/// `expected` objects only constrain the keys they name; everything else
/// must be equal.
fn json_matches(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => expected
            .iter()
            .all(|(key, want)| actual.get(key).is_some_and(|got| json_matches(got, want))),
        _ => actual == expected,
    }
}

pub fn run_scenario(args: ScenarioArgs) -> Result<()> {
    if !Formatter::is_quiet() {
        println!(
            "{}",
            Formatter::info(format!("Loading scenario file: {:?}", args.file))
        );
    }
    logging::log_loading_scenario(&args.file.to_string_lossy());

    let content = fs::read_to_string(&args.file).map_err(|e| {
        MockError::FileError(format!(
            "Failed to read scenario file {:?}: {}",
            args.file, e
        ))
    })?;
    let scenario = Scenario::from_toml(&content)?;
    let dispatcher = MockDispatcher::property_verification().with_cli_specs(&args.mock)?;

    if !Formatter::is_quiet() {
        println!(
            "{}",
            Formatter::success(format!(
                "Running {} scenario steps...\n",
                scenario.steps.len()
            ))
        );
    }

    let report = run_steps(&scenario, &dispatcher)?;

    for (i, step) in report.steps.iter().enumerate() {
        if Formatter::is_quiet() && step.passed {
            continue;
        }
        println!(
            "{}",
            Formatter::info(format!("Step {}: {}", i + 1, step.label))
        );
        println!("  Result: {}", Formatter::format_outcome(&step.outcome));
        match &step.failure {
            None => println!("{}", Formatter::success(format!("Step {} passed.\n", i + 1))),
            Some(reason) => {
                println!("  {}", Formatter::error(format!("✗ {}", reason)));
                println!("{}", Formatter::warning(format!("Step {} failed.\n", i + 1)));
            }
        }
    }

    if report.passed() {
        println!(
            "{}",
            Formatter::success("All scenario steps passed successfully!")
        );
        Ok(())
    } else {
        Err(MockError::ScenarioFailed(format!(
            "{} of {} steps ran, last one failed",
            report.steps.len(),
            scenario.steps.len()
        ))
        .into())
    }
}
