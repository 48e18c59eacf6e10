//! Typed access to fields of the JSON documents returned by the node's
//! JSON-RPC interface. A field that is missing, or present with the wrong type,
//! is reported as [`GatewayError::SchemaMismatch`] naming the full path.
use crate::endpoints::{GatewayError, GatewayResult};
use serde_json::Value;

/// A dotted path into a JSON document, e.g., `result.response.version`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldPath<'a>(pub &'a [&'a str]);

impl std::fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Look up the value at `path`. `null` counts as absent.
fn lookup<'a>(document: &'a Value, path: FieldPath) -> Option<&'a Value> {
    path.0
        .iter()
        .try_fold(document, |value, key| value.get(key))
        .filter(|v| !v.is_null())
}

fn wrong_type(path: FieldPath, expected: &str, found: &Value) -> GatewayError {
    GatewayError::SchemaMismatch(format!(
        "field `{path}` should be {expected}, found {found}"
    ))
}

/// The value at `path`, which must be present.
pub(crate) fn required<'a>(document: &'a Value, path: FieldPath) -> GatewayResult<&'a Value> {
    lookup(document, path)
        .ok_or_else(|| GatewayError::SchemaMismatch(format!("missing field `{path}`")))
}

/// The string at `path`, which must be present. Integers are accepted and
/// rendered in decimal, since nodes disagree on whether 64-bit values are
/// quoted.
pub(crate) fn required_string(document: &Value, path: FieldPath) -> GatewayResult<String> {
    string_of(required(document, path)?, path)
}

/// The string at `path`, or `None` if the field is absent.
pub(crate) fn optional_string(document: &Value, path: FieldPath) -> GatewayResult<Option<String>> {
    lookup(document, path).map(|v| string_of(v, path)).transpose()
}

/// The 32-bit integer at `path`, or `None` if the field is absent.
pub(crate) fn optional_i32(document: &Value, path: FieldPath) -> GatewayResult<Option<i32>> {
    let Some(value) = lookup(document, path) else {
        return Ok(None);
    };
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| wrong_type(path, "a 32-bit integer", value))
}

fn string_of(value: &Value, path: FieldPath) -> GatewayResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(wrong_type(path, "a string", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VERSION: FieldPath = FieldPath(&["result", "response", "version"]);
    const ID: FieldPath = FieldPath(&["id"]);

    #[test]
    fn test_required_string() {
        let doc = json!({"result": {"response": {"version": "0.37.2"}}});
        assert_eq!(required_string(&doc, VERSION).unwrap(), "0.37.2");

        let doc = json!({"result": {"response": {}}});
        let err = required_string(&doc, VERSION).unwrap_err();
        assert!(
            matches!(&err, GatewayError::SchemaMismatch(m) if m.contains("result.response.version")),
            "{err}"
        );

        let doc = json!({"result": {"response": {"version": {"major": 0}}}});
        assert!(matches!(
            required_string(&doc, VERSION),
            Err(GatewayError::SchemaMismatch(_))
        ));

        // An intermediate value of the wrong type is the same as a missing field.
        let doc = json!({"result": "oops"});
        assert!(matches!(
            required_string(&doc, VERSION),
            Err(GatewayError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_integers_render_as_strings() {
        let doc = json!({"result": {"response": {"version": 7}}});
        assert_eq!(required_string(&doc, VERSION).unwrap(), "7");
    }

    #[test]
    fn test_optional_fields() {
        let doc = json!({"id": -1});
        assert_eq!(optional_i32(&doc, ID).unwrap(), Some(-1));
        assert_eq!(optional_i32(&json!({}), ID).unwrap(), None);
        assert_eq!(optional_i32(&json!({"id": null}), ID).unwrap(), None);
        assert!(optional_i32(&json!({"id": "abc"}), ID).is_err());
        assert!(optional_i32(&json!({"id": 1u64 << 40}), ID).is_err());
        assert_eq!(optional_string(&doc, VERSION).unwrap(), None);
    }
}
