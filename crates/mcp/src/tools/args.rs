// Argument extraction shared by the market data tools

use crate::error::ToolError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::str::FromStr;

pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::InvalidArguments(format!("{} for {}", e, tool)))
}

/// A present, non-blank `symbol` string, returned as given.
pub(crate) fn require_symbol(symbol: Option<&Value>) -> Result<String, ToolError> {
    match symbol {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(ToolError::InvalidArguments(
            "symbol must not be empty".to_string(),
        )),
        None | Some(Value::Null) => Err(ToolError::InvalidArguments(
            "missing required field `symbol`".to_string(),
        )),
        Some(other) => Err(ToolError::InvalidArguments(format!(
            "symbol must be a string, got {}",
            other
        ))),
    }
}

/// Parse an optional enumerated string argument.
///
/// Missing, `null` and empty values take the default. Any other non-string
/// value is rejected with its JSON rendering.
pub(crate) fn optional_choice<T>(value: Option<&Value>) -> Result<T, String>
where
    T: FromStr + Default,
{
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(Value::String(s)) if s.is_empty() => Ok(T::default()),
        Some(Value::String(s)) => s.parse().map_err(|_| s.clone()),
        Some(other) => Err(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findata_sdk::{Interval, OutputSize};
    use serde_json::json;

    #[test]
    fn test_require_symbol() {
        assert_eq!(require_symbol(Some(&json!("AAPL"))).unwrap(), "AAPL");
        assert_eq!(require_symbol(Some(&json!(" msft "))).unwrap(), " msft ");
        assert_eq!(require_symbol(Some(&json!("brk.b"))).unwrap(), "brk.b");

        for bad in [None, Some(json!(null)), Some(json!("")), Some(json!("  ")), Some(json!(42))] {
            assert!(matches!(
                require_symbol(bad.as_ref()),
                Err(ToolError::InvalidArguments(_))
            ));
        }
    }

    #[test]
    fn test_optional_choice_defaults() {
        assert_eq!(optional_choice::<Interval>(None).unwrap(), Interval::Daily);
        assert_eq!(optional_choice::<Interval>(Some(&json!(null))).unwrap(), Interval::Daily);
        assert_eq!(optional_choice::<OutputSize>(Some(&json!(""))).unwrap(), OutputSize::Compact);
    }

    #[test]
    fn test_optional_choice_values() {
        assert_eq!(
            optional_choice::<Interval>(Some(&json!("monthly"))).unwrap(),
            Interval::Monthly
        );
        assert_eq!(
            optional_choice::<Interval>(Some(&json!("yearly"))).unwrap_err(),
            "yearly"
        );
        assert_eq!(optional_choice::<Interval>(Some(&json!(7))).unwrap_err(), "7");
    }
}
