use super::value::ClarityValue;
use crate::{MockError, Result};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Error code returned for every (contract, function) pair the dispatcher
/// does not know about.
pub const ERR_UNKNOWN_OPERATION: u128 = 999;

/// A Clarity `response`: the result shape of public (write-style) functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok(ClarityValue),
    Err(u128),
}

impl Response {
    pub fn unknown_operation() -> Self {
        Response::Err(ERR_UNKNOWN_OPERATION)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }

    /// Parse `(ok X)`, `(err uN)` or a bare value, which is taken as `(ok X)`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Some(inner) = raw.strip_prefix("(ok ").and_then(|r| r.strip_suffix(')')) {
            return Ok(Response::Ok(ClarityValue::parse(inner)?));
        }
        if let Some(inner) = raw.strip_prefix("(err ").and_then(|r| r.strip_suffix(')')) {
            let code = match ClarityValue::parse(inner)? {
                ClarityValue::UInt(code) => code,
                ClarityValue::Int(code) if code >= 0 => code as u128,
                other => {
                    return Err(MockError::InvalidMock(format!(
                        "error code must be a non-negative integer, got {other}"
                    ))
                    .into())
                }
            };
            return Ok(Response::Err(code));
        }
        Ok(Response::Ok(ClarityValue::parse(raw)?))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok(value) => write!(f, "(ok {value})"),
            Response::Err(code) => write!(f, "(err u{code})"),
        }
    }
}

// `{"type": "ok"|"err", "value": ..}`. Error codes go through the same
// uint encoding as values, so codes past u64 become strings instead of
// failing.
impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Response", 2)?;
        match self {
            Response::Ok(value) => {
                state.serialize_field("type", "ok")?;
                state.serialize_field("value", value)?;
            }
            Response::Err(code) => {
                state.serialize_field("type", "err")?;
                state.serialize_field("value", &ClarityValue::UInt(*code))?;
            }
        }
        state.end()
    }
}

/// The record returned by the read-only `get-property` function.
///
/// Field names serialize with the kebab-case keys of the `properties` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PropertyRecord {
    pub owner: String,
    pub address: String,
    pub verified: bool,
    pub last_inspection_date: u64,
    pub condition_score: u32,
    pub property_details: String,
}

impl fmt::Display for PropertyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ owner: '{}, address: {:?}, verified: {}, last-inspection-date: u{}, condition-score: u{}, property-details: {:?} }}",
            self.owner,
            self.address,
            self.verified,
            self.last_inspection_date,
            self.condition_score,
            self.property_details
        )
    }
}

/// What a dispatched call produced.
///
/// Write-style calls answer with a [`Response`]; the read-style
/// `get-property` answers with a bare [`PropertyRecord`]. The two shapes are
/// kept apart on purpose so tests see the same asymmetry the contract has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Response(Response),
    Record(PropertyRecord),
}

impl Outcome {
    pub fn as_response(&self) -> Option<&Response> {
        match self {
            Outcome::Response(response) => Some(response),
            Outcome::Record(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&PropertyRecord> {
        match self {
            Outcome::Record(record) => Some(record),
            Outcome::Response(_) => None,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            MockError::InvalidArguments(format!("Failed to serialize outcome {self}: {e}")).into()
        })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Response(response) => response.fmt(f),
            Outcome::Record(record) => record.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_serializes_like_a_tagged_result() {
        let ok = serde_json::to_value(Response::Ok(ClarityValue::UInt(1))).unwrap();
        assert_eq!(ok, json!({"type": "ok", "value": 1}));

        let err = serde_json::to_value(Response::unknown_operation()).unwrap();
        assert_eq!(err, json!({"type": "err", "value": 999}));
    }

    #[test]
    fn record_serializes_with_kebab_keys() {
        let record = PropertyRecord {
            owner: "ST1".to_string(),
            address: "123 Main St".to_string(),
            verified: true,
            last_inspection_date: 100,
            condition_score: 8,
            property_details: "Commercial office space".to_string(),
        };
        let value = Outcome::Record(record).to_json().unwrap();
        assert_eq!(value["condition-score"], json!(8));
        assert_eq!(value["last-inspection-date"], json!(100));
        assert!(value.get("type").is_none());
    }

    #[test]
    fn oversized_error_code_serializes_as_string() {
        let outcome = Outcome::Response(Response::parse("(err u18446744073709551616)").unwrap());
        assert_eq!(
            outcome.to_json().unwrap(),
            json!({"type": "err", "value": "18446744073709551616"})
        );
        let text = serde_json::to_string(&outcome).unwrap();
        assert!(text.contains("18446744073709551616"));
    }

    #[test]
    fn parses_responses() {
        assert_eq!(
            Response::parse("(ok true)").unwrap(),
            Response::Ok(ClarityValue::Bool(true))
        );
        assert_eq!(Response::parse("(err u404)").unwrap(), Response::Err(404));
        assert_eq!(
            Response::parse("u42").unwrap(),
            Response::Ok(ClarityValue::UInt(42))
        );
        assert!(Response::parse("(err true)").is_err());
    }

    #[test]
    fn display_matches_clarity_repl() {
        assert_eq!(Response::Ok(ClarityValue::UInt(1)).to_string(), "(ok u1)");
        assert_eq!(Response::unknown_operation().to_string(), "(err u999)");
    }
}
