//! Structured logging helpers for the mock runtime.
//!
//! Events go through the `tracing` crate; the binary decides where they end
//! up (plain or JSON on stderr).

/// Log a call routed through the dispatcher.
pub fn log_dispatch(contract: &str, function: &str, args: usize, recognized: bool) {
    if recognized {
        tracing::debug!(contract, function, args, "Dispatched mocked call");
    } else {
        tracing::debug!(
            contract,
            function,
            args,
            "No mock for call, answering with unknown-operation error"
        );
    }
}

pub fn log_call_start(contract: &str, function: &str, arguments: Option<&str>) {
    if let Some(args) = arguments {
        tracing::info!(contract, function, arguments = args, "Starting call");
    } else {
        tracing::info!(contract, function, "Starting call");
    }
}

pub fn log_call_complete(result: &str) {
    tracing::info!(result, "Call completed");
}

/// Log contract source loading.
pub fn log_loading_source(path: &str) {
    tracing::info!(source = path, "Loading contract source");
}

pub fn log_marker_missing(marker: &str) {
    tracing::warn!(marker, "Required marker not found in contract source");
}

pub fn log_validation_complete(found: usize, missing: usize) {
    tracing::info!(found, missing, "Contract source validation completed");
}

pub fn log_loading_scenario(path: &str) {
    tracing::info!(scenario = path, "Loading scenario");
}

pub fn log_scenario_step(index: usize, label: &str, passed: bool) {
    tracing::debug!(step = index, label, passed, "Scenario step finished");
}
