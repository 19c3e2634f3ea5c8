//! Declarative automaton descriptions in JSON.
//!
//! A description is a tree of operands:
//!
//! | JSON                          | Fragment                        |
//! |-------------------------------|---------------------------------|
//! | `"text"`                      | `from_string` of the UTF-8 bytes |
//! | `{"symbol": 97}`              | `literal(97)`                   |
//! | `{"empty": null}`             | `empty()`                       |
//! | `{"concat": [..]}`            | variadic `concat`               |
//! | `{"union": [..]}`             | variadic `union`                |
//! | `{"repeat": operand}`         | `repeat`                        |
//!
//! Any other value is rejected as an invalid operand.

use crate::builder::error::BuildError;
use crate::builder::operand::Operand;
use crate::builder::{concat_all, union_all};
use crate::core::{Nfa, Symbol};
use serde_json::{Map, Value};

/// Build a fragment from a parsed description.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use valgen::builder::from_value;
///
/// let pattern = from_value(&json!({
///     "concat": ["foo", {"union": ["bar", "foo"]}]
/// }))
/// .unwrap();
///
/// assert!(pattern.matches("foobar"));
/// assert!(pattern.matches("foofoo"));
/// assert!(!pattern.matches("foobaz"));
/// ```
pub fn from_value(value: &Value) -> Result<Nfa, BuildError> {
    Ok(operand_from_value(value)?.into_fragment())
}

/// Parse and build a description given as JSON text.
pub fn from_json(text: &str) -> Result<Nfa, BuildError> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

pub(crate) fn operand_from_value(value: &Value) -> Result<Operand, BuildError> {
    match value {
        Value::String(text) => Ok(Operand::Sequence(text.as_bytes().to_vec())),
        Value::Object(map) => operand_from_object(map),
        other => Err(invalid(kind_of(other))),
    }
}

fn operand_from_object(map: &Map<String, Value>) -> Result<Operand, BuildError> {
    let mut entries = map.iter();
    let (Some((key, body)), None) = (entries.next(), entries.next()) else {
        return Err(invalid(format!("object with {} keys", map.len())));
    };

    let nfa = match key.as_str() {
        "symbol" => return symbol_from_value(body).map(Operand::Symbol),
        "empty" if body.is_null() => Nfa::empty(),
        "empty" => return Err(invalid(format!("`empty` with {}", kind_of(body)))),
        "repeat" => from_value(body)?.repeat(),
        "concat" => concat_all(operand_list(key, body)?.iter().map(operand_from_value))?,
        "union" => union_all(operand_list(key, body)?.iter().map(operand_from_value))?,
        unknown => return Err(invalid(format!("object with unknown key `{unknown}`"))),
    };
    Ok(Operand::Fragment(nfa))
}

fn operand_list<'a>(key: &str, body: &'a Value) -> Result<&'a Vec<Value>, BuildError> {
    body.as_array()
        .ok_or_else(|| invalid(format!("`{key}` with {} instead of an array", kind_of(body))))
}

fn symbol_from_value(body: &Value) -> Result<Symbol, BuildError> {
    let value = body
        .as_u64()
        .ok_or_else(|| invalid(format!("`symbol` with {}", kind_of(body))))?;
    Symbol::try_from(value).map_err(|_| BuildError::SymbolOutOfRange { value })
}

fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}

fn invalid(found: impl Into<String>) -> BuildError {
    BuildError::InvalidOperand {
        found: found.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_is_a_literal_sequence() {
        let nfa = from_value(&json!("abc")).unwrap();

        assert!(nfa.matches("abc"));
        assert!(!nfa.matches("ab"));
    }

    #[test]
    fn symbol_object_is_a_literal() {
        let nfa = from_value(&json!({"symbol": 0})).unwrap();

        assert!(nfa.matches([0u8]));
        assert!(!nfa.matches("0"));
    }

    #[test]
    fn symbol_above_alphabet_is_rejected() {
        let result = from_value(&json!({"symbol": 256}));
        assert!(matches!(
            result,
            Err(BuildError::SymbolOutOfRange { value: 256 })
        ));
    }

    #[test]
    fn negative_symbol_is_invalid() {
        let result = from_value(&json!({"symbol": -1}));
        assert!(matches!(result, Err(BuildError::InvalidOperand { .. })));
    }

    #[test]
    fn empty_object_matches_empty_input() {
        let nfa = from_value(&json!({"empty": null})).unwrap();

        assert!(nfa.matches(""));
        assert!(!nfa.matches("a"));
    }

    #[test]
    fn empty_object_rejects_a_body() {
        for body in [json!("abc"), json!(5), json!(["a"]), json!({"symbol": 97})] {
            let result = from_value(&json!({ "empty": body }));

            match result {
                Err(BuildError::InvalidOperand { found }) => {
                    assert!(found.starts_with("`empty` with "), "found {found:?}")
                }
                other => panic!("Expected InvalidOperand for {body}, got {other:?}"),
            }
        }
    }

    #[test]
    fn nested_description_builds() {
        let nfa = from_value(&json!({
            "concat": [
                {"repeat": {"union": ["foo", "bar"]}},
                ""
            ]
        }))
        .unwrap();

        assert!(nfa.matches("foofoobarfoo"));
        assert!(!nfa.matches("farboo"));
    }

    #[test]
    fn scalar_operands_are_invalid() {
        for value in [json!(42), json!(true), json!(null), json!(1.5)] {
            let result = from_value(&value);
            assert!(
                matches!(result, Err(BuildError::InvalidOperand { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_operand_inside_concat_aborts() {
        let result = from_value(&json!({"concat": [42, "x"]}));

        match result {
            Err(BuildError::InvalidOperand { found }) => assert_eq!(found, "number"),
            other => panic!("Expected InvalidOperand, got {other:?}"),
        }
    }

    #[test]
    fn unknown_and_ambiguous_objects_are_invalid() {
        let unknown = from_value(&json!({"star": "a"}));
        let ambiguous = from_value(&json!({"concat": ["a"], "union": ["b"]}));
        let bare_array = from_value(&json!(["a", "b"]));

        assert!(matches!(unknown, Err(BuildError::InvalidOperand { .. })));
        assert!(matches!(ambiguous, Err(BuildError::InvalidOperand { .. })));
        assert!(matches!(bare_array, Err(BuildError::InvalidOperand { .. })));
    }

    #[test]
    fn union_needs_operands() {
        let result = from_value(&json!({"union": []}));
        assert!(matches!(result, Err(BuildError::NoOperands)));
    }

    #[test]
    fn malformed_text_is_a_json_error() {
        let result = from_json("{\"concat\": [");
        assert!(matches!(result, Err(BuildError::Json(_))));
    }

    #[test]
    fn json_text_round_trips_through_builder() {
        let nfa = from_json(r#"{"union": ["yes", {"repeat": "no"}]}"#).unwrap();

        assert!(nfa.matches("yes"));
        assert!(nfa.matches("nono"));
        assert!(nfa.matches(""));
        assert!(!nfa.matches("yesno"));
    }
}
