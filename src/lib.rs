pub mod cli;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod scenario;
pub mod ui;
pub mod validator;
use miette::Diagnostic;

pub use runtime::dispatcher::MockDispatcher;
pub use runtime::session::SessionContext;
pub use validator::SourceValidator;

/// Result type alias for the mock runtime
pub type Result<T> = miette::Result<T>;

/// Error types for the mock runtime
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("Contract source is missing required marker: {0:?}")]
    #[diagnostic(
        code(clarity_mock::missing_marker),
        help("The validator does a plain, case-sensitive substring search. Check the spelling and spacing of the definition in the contract source.")
    )]
    MissingMarker(String),

    #[error("Invalid mock: {0}")]
    #[diagnostic(
        code(clarity_mock::invalid_mock),
        help("Mocks use the form CONTRACT.function=value, e.g. --mock 'token.get-balance=u100'.")
    )]
    InvalidMock(String),

    #[error("Invalid arguments: {0}")]
    #[diagnostic(
        code(clarity_mock::invalid_arguments),
        help("Ensure arguments are provided as a JSON array. Example: --args '[\"123 Main St\", 1]'.")
    )]
    InvalidArguments(String),

    #[error("Session error: {0}")]
    #[diagnostic(
        code(clarity_mock::session_error),
        help("Block height only moves forward between resets.")
    )]
    SessionError(String),

    #[error("Scenario failed: {0}")]
    #[diagnostic(
        code(clarity_mock::scenario_failed),
        help("Run with --verbose to see every step's outcome.")
    )]
    ScenarioFailed(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(clarity_mock::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
