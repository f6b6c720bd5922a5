use super::outcome::{Outcome, PropertyRecord, Response};
use super::session::SessionContext;
use super::value::ClarityValue;
use crate::logging;
use crate::{MockError, Result};
use serde_json::Value;
use std::collections::HashMap;

pub const PROPERTY_VERIFICATION: &str = "property-verification";

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MockKey {
    pub contract: String,
    pub function: String,
}

impl MockKey {
    pub fn new(contract: &str, function: &str) -> Self {
        Self {
            contract: contract.to_string(),
            function: function.to_string(),
        }
    }
}

/// How a recognized call is answered.
#[derive(Clone, Debug, PartialEq)]
pub enum MockBehavior {
    /// Always the same response, whatever the arguments.
    Fixed(Response),
    /// The canned `get-property` record, owned by the current `tx-sender`.
    PropertyRecord,
}

impl MockBehavior {
    fn resolve(&self, session: &SessionContext) -> Outcome {
        match self {
            MockBehavior::Fixed(response) => Outcome::Response(response.clone()),
            MockBehavior::PropertyRecord => Outcome::Record(PropertyRecord {
                owner: session.tx_sender().to_string(),
                address: "123 Main St".to_string(),
                verified: true,
                last_inspection_date: 100,
                condition_score: 8,
                property_details: "Commercial office space".to_string(),
            }),
        }
    }
}

/// Stand-in for the Clarity VM: answers calls from a fixed table.
///
/// Arguments are accepted but never looked at, so every recognized
/// (contract, function) pair is deterministic. Anything else is
/// `(err u999)`.
#[derive(Clone, Debug)]
pub struct MockDispatcher {
    entries: HashMap<MockKey, MockBehavior>,
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::property_verification()
    }
}

impl MockDispatcher {
    /// A dispatcher that knows nothing and rejects every call.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The canned table for the `property-verification` contract.
    pub fn property_verification() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.insert(
            PROPERTY_VERIFICATION,
            "register-property",
            MockBehavior::Fixed(Response::Ok(ClarityValue::UInt(1))),
        );
        dispatcher.insert(
            PROPERTY_VERIFICATION,
            "verify-property",
            MockBehavior::Fixed(Response::Ok(ClarityValue::Bool(true))),
        );
        dispatcher.insert(
            PROPERTY_VERIFICATION,
            "get-property",
            MockBehavior::PropertyRecord,
        );
        dispatcher
    }

    /// Add `CONTRACT.function=value` mocks on top of the current table.
    pub fn with_cli_specs(mut self, specs: &[String]) -> Result<Self> {
        for spec in specs {
            let (key, response) = Self::parse_spec(spec)?;
            self.entries.insert(key, MockBehavior::Fixed(response));
        }
        Ok(self)
    }

    /// Register a fixed response, replacing any existing entry for the pair.
    pub fn register(&mut self, contract: &str, function: &str, response: Response) {
        self.insert(contract, function, MockBehavior::Fixed(response));
    }

    fn insert(&mut self, contract: &str, function: &str, behavior: MockBehavior) {
        self.entries.insert(MockKey::new(contract, function), behavior);
    }

    pub fn is_recognized(&self, contract: &str, function: &str) -> bool {
        self.entries.contains_key(&MockKey::new(contract, function))
    }

    pub fn dispatch(
        &self,
        session: &SessionContext,
        contract: &str,
        function: &str,
        args: &[Value],
    ) -> Outcome {
        let key = MockKey::new(contract, function);
        match self.entries.get(&key) {
            Some(behavior) => {
                logging::log_dispatch(contract, function, args.len(), true);
                behavior.resolve(session)
            }
            None => {
                logging::log_dispatch(contract, function, args.len(), false);
                Outcome::Response(Response::unknown_operation())
            }
        }
    }

    fn parse_spec(spec: &str) -> Result<(MockKey, Response)> {
        let (signature, return_raw) = spec.split_once('=').ok_or_else(|| {
            MockError::InvalidMock(format!(
                "'{spec}'. Expected CONTRACT.function=return_value"
            ))
        })?;
        let (contract, function) = signature.rsplit_once('.').ok_or_else(|| {
            MockError::InvalidMock(format!(
                "signature '{signature}'. Expected CONTRACT.function"
            ))
        })?;
        let contract = contract.trim();
        let function = function.trim();
        let return_raw = return_raw.trim();
        if contract.is_empty() || function.is_empty() || return_raw.is_empty() {
            return Err(MockError::InvalidMock(format!(
                "'{spec}'. CONTRACT, function and return_value are required"
            ))
            .into());
        }

        let response = Response::parse(return_raw)?;
        Ok((MockKey::new(contract, function), response))
    }
}
