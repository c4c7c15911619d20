use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

///
/// Value
///
/// Dynamically typed property value carried across the name-keyed
/// get/set/with surface. Kinds mirror the schema type vocabulary, so a
/// stored `Null` is an ordinary value and never doubles as "not found".
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// The schema-facing kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Int(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::String,
            Self::List(_) => ValueKind::Array,
            Self::Map(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::List(v) => write!(f, "[{} items]", v.len()),
            Self::Map(v) => write!(f, "{{{} entries}}", v.len()),
        }
    }
}

///
/// ValueKind
///
/// Schema type names, used verbatim in diagnostics.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ValueKind {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Null => "null",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_every_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::Int(1).kind(), ValueKind::Integer);
        assert_eq!(Value::Float(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::Text("x".to_string()).kind(), ValueKind::String);
        assert_eq!(Value::List(vec![]).kind(), ValueKind::Array);
        assert_eq!(Value::Map(BTreeMap::new()).kind(), ValueKind::Object);
    }

    #[test]
    fn kind_displays_schema_names() {
        assert_eq!(ValueKind::Integer.to_string(), "integer");
        assert_eq!(ValueKind::String.to_string(), "string");
        assert_eq!(ValueKind::Null.to_string(), "null");
    }

    #[test]
    fn default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn serde_round_trip() {
        let value = Value::Map(BTreeMap::from([
            ("name".to_string(), Value::Text("alpha".to_string())),
            ("count".to_string(), Value::Int(7)),
            ("tags".to_string(), Value::List(vec![Value::Null, Value::Bool(true)])),
        ]));

        let json = serde_json::to_string(&value).expect("serializes");
        let back: Value = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(back, value);
    }
}
