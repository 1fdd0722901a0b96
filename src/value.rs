use serde_json::Value;

/// Returns whether a JSON value counts as "set".
///
/// `null`, `false`, any zero number and the empty string are falsy; every
/// other value, including empty arrays and objects, is truthy.
///
/// ```
/// use keyed_collection::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("x")));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Maps falsy values (and a missing value) to `null`, cloning the rest
pub(crate) fn or_null(value: Option<&Value>) -> Value {
    match value {
        Some(v) if is_truthy(v) => v.clone(),
        _ => Value::Null,
    }
}

/// Reads a non-empty string `key` out of a JSON value, if it has one
pub(crate) fn non_empty_key(value: &Value) -> Option<&str> {
    value
        .get(crate::item::KEY_FIELD)
        .and_then(Value::as_str)
        .filter(|k| !k.is_empty())
}
