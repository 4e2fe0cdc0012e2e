//! Raw geometry input: JSON text or a structured value.

use crate::error::GeoJsonError;
use serde_json::Value;

/// A geometry operand as handed over by a caller.
///
/// Transport layers usually hold a parsed [`Value`]; programmatic callers
/// often hold JSON text. A `Value::String` is treated as JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryInput {
    /// JSON text still to be parsed.
    Text(String),
    /// An already-deserialized JSON value.
    Value(Value),
}

impl GeometryInput {
    /// Normalizes the input into one parsed JSON value.
    ///
    /// Fails with [`GeoJsonError::Empty`] for empty or falsy input and with
    /// [`GeoJsonError::NotJson`] when text does not parse.
    pub fn into_value(self) -> Result<Value, GeoJsonError> {
        match self {
            GeometryInput::Text(text) => parse_text(&text),
            GeometryInput::Value(Value::String(text)) => parse_text(&text),
            GeometryInput::Value(value) if is_falsy(&value) => Err(GeoJsonError::Empty),
            GeometryInput::Value(value) => Ok(value),
        }
    }
}

fn parse_text(text: &str) -> Result<Value, GeoJsonError> {
    if text.is_empty() {
        return Err(GeoJsonError::Empty);
    }
    let value: Value =
        serde_json::from_str(text).map_err(|e| GeoJsonError::NotJson(e.to_string()))?;
    if is_falsy(&value) {
        return Err(GeoJsonError::Empty);
    }
    Ok(value)
}

/// JSON values that carry no geometry at all.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl From<String> for GeometryInput {
    fn from(text: String) -> Self {
        GeometryInput::Text(text)
    }
}

impl From<&str> for GeometryInput {
    fn from(text: &str) -> Self {
        GeometryInput::Text(text.to_owned())
    }
}

impl From<Value> for GeometryInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => GeometryInput::Text(text),
            other => GeometryInput::Value(other),
        }
    }
}

impl From<&Value> for GeometryInput {
    fn from(value: &Value) -> Self {
        GeometryInput::from(value.clone())
    }
}
