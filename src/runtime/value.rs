use crate::{MockError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A Clarity value as produced by the mock runtime.
///
/// Only the shapes the canned results need are modelled; lists, tuples and
/// buffers are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    Int(i128),
    UInt(u128),
    Bool(bool),
    Principal(String),
    StringAscii(String),
    None,
    Some(Box<ClarityValue>),
}

impl ClarityValue {
    pub fn ascii(value: impl Into<String>) -> Self {
        ClarityValue::StringAscii(value.into())
    }

    pub fn principal(value: impl Into<String>) -> Self {
        ClarityValue::Principal(value.into())
    }

    /// Parse a value written in Clarity literal syntax.
    ///
    /// Accepts `true`, `false`, `none`, `(some X)`, `u42`, `-7`, `'ST..`
    /// and `"text"`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(MockError::InvalidMock("empty value".to_string()).into());
        }

        match raw {
            "true" => return Ok(ClarityValue::Bool(true)),
            "false" => return Ok(ClarityValue::Bool(false)),
            "none" => return Ok(ClarityValue::None),
            _ => {}
        }

        if let Some(inner) = raw
            .strip_prefix("(some ")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Ok(ClarityValue::Some(Box::new(Self::parse(inner)?)));
        }

        if let Some(principal) = raw.strip_prefix('\'') {
            if principal.is_empty() {
                return Err(MockError::InvalidMock("empty principal".to_string()).into());
            }
            return Ok(ClarityValue::Principal(principal.to_string()));
        }

        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Ok(ClarityValue::StringAscii(raw[1..raw.len() - 1].to_string()));
        }

        if let Some(digits) = raw.strip_prefix('u') {
            return digits.parse::<u128>().map(ClarityValue::UInt).map_err(|e| {
                MockError::InvalidMock(format!("invalid uint literal '{raw}': {e}")).into()
            });
        }

        raw.parse::<i128>().map(ClarityValue::Int).map_err(|_| {
            MockError::InvalidMock(format!("unrecognized Clarity literal '{raw}'")).into()
        })
    }
}

impl fmt::Display for ClarityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClarityValue::Int(v) => write!(f, "{v}"),
            ClarityValue::UInt(v) => write!(f, "u{v}"),
            ClarityValue::Bool(v) => write!(f, "{v}"),
            ClarityValue::Principal(p) => write!(f, "'{p}"),
            ClarityValue::StringAscii(s) => write!(f, "{s:?}"),
            ClarityValue::None => write!(f, "none"),
            ClarityValue::Some(inner) => write!(f, "(some {inner})"),
        }
    }
}

// Serialized as plain JSON so outputs line up with what contract test
// suites assert against: integers as numbers, principals as strings.
impl Serialize for ClarityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ClarityValue::Int(v) => match i64::try_from(*v) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.serialize_str(&v.to_string()),
            },
            ClarityValue::UInt(v) => match u64::try_from(*v) {
                Ok(small) => serializer.serialize_u64(small),
                Err(_) => serializer.serialize_str(&v.to_string()),
            },
            ClarityValue::Bool(v) => serializer.serialize_bool(*v),
            ClarityValue::Principal(s) | ClarityValue::StringAscii(s) => {
                serializer.serialize_str(s)
            }
            ClarityValue::None => serializer.serialize_none(),
            ClarityValue::Some(inner) => serializer.serialize_some(inner.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literals() {
        assert_eq!(ClarityValue::parse("u1").unwrap(), ClarityValue::UInt(1));
        assert_eq!(ClarityValue::parse("-7").unwrap(), ClarityValue::Int(-7));
        assert_eq!(
            ClarityValue::parse("true").unwrap(),
            ClarityValue::Bool(true)
        );
        assert_eq!(
            ClarityValue::parse("\"123 Main St\"").unwrap(),
            ClarityValue::ascii("123 Main St")
        );
        assert_eq!(
            ClarityValue::parse("'ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM").unwrap(),
            ClarityValue::principal("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
        );
        assert_eq!(
            ClarityValue::parse("(some u8)").unwrap(),
            ClarityValue::Some(Box::new(ClarityValue::UInt(8)))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(ClarityValue::parse("").is_err());
        assert!(ClarityValue::parse("uabc").is_err());
        assert!(ClarityValue::parse("hello").is_err());
        assert!(ClarityValue::parse("'").is_err());
    }

    #[test]
    fn display_uses_clarity_syntax() {
        assert_eq!(ClarityValue::UInt(1).to_string(), "u1");
        assert_eq!(ClarityValue::ascii("x").to_string(), "\"x\"");
        assert_eq!(ClarityValue::principal("ST1").to_string(), "'ST1");
        assert_eq!(
            ClarityValue::Some(Box::new(ClarityValue::None)).to_string(),
            "(some none)"
        );
    }

    #[test]
    fn serializes_to_plain_json() {
        let json = serde_json::to_value(ClarityValue::UInt(8)).unwrap();
        assert_eq!(json, serde_json::json!(8));
        let json = serde_json::to_value(ClarityValue::None).unwrap();
        assert_eq!(json, serde_json::Value::Null);
    }
}
