//! Intent ingestion: JSON text to a typed intent.

use gateora_domain::model::TransactionIntent;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("invalid input: intent is not valid JSON")]
    NotJson(#[source] serde_json::Error),

    #[error("invalid input: intent must be a JSON object, found {found}")]
    NotObject { found: &'static str },

    #[error("invalid input: intent could not be read")]
    Shape(#[source] serde_json::Error),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse an intent from JSON text.
///
/// Only the outer shape is checked: the document must be an object. Fields with an unexpected
/// shape are read as absent.
pub fn parse_intent(text: &str) -> Result<TransactionIntent, IntentError> {
    let value: Value = serde_json::from_str(text).map_err(IntentError::NotJson)?;
    intent_from_value(value)
}

pub(crate) fn intent_from_value(value: Value) -> Result<TransactionIntent, IntentError> {
    if !value.is_object() {
        return Err(IntentError::NotObject {
            found: kind_of(&value),
        });
    }
    serde_json::from_value(value).map_err(IntentError::Shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateora_domain::model::{Allowance, TxType};

    #[test]
    fn parses_object() {
        let intent = parse_intent(r#"{"type":"approve","allowance":"MAX_UINT","token":"USDC"}"#)
            .expect("parse");
        assert_eq!(intent.kind, TxType::Approve);
        assert_eq!(intent.allowance, Some(Allowance::Unlimited));
        assert_eq!(intent.token.as_deref(), Some("USDC"));
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_intent("{type: approve").unwrap_err();
        assert!(matches!(err, IntentError::NotJson(_)));
        assert!(err.to_string().starts_with("invalid input"));
    }

    #[test]
    fn rejects_non_objects() {
        for (text, found) in [("[]", "an array"), ("null", "null"), ("\"sign\"", "a string")] {
            match parse_intent(text) {
                Err(IntentError::NotObject { found: f }) => assert_eq!(f, found),
                other => panic!("expected NotObject for {text}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_object_is_a_generic_intent() {
        let intent = parse_intent("{}").expect("parse");
        assert_eq!(intent, TransactionIntent::default());
    }
}
