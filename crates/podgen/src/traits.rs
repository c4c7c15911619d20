use crate::{
    access::AccessError,
    value::Value,
};
use std::collections::BTreeMap;

///
/// FieldValue
///
/// Conversion between a declared property's Rust type and the dynamic
/// `Value` model. `from_value` returning `None` is the type-compatibility
/// check on the dynamic set path; generated code turns it into a
/// `TypeMismatch` error without touching the stored value.
///

pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    // Integers widen into the number kind; the reverse never holds.
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as Self),
            _ => None,
        }
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

// Nullable equivalence: Null round-trips as None, anything else must
// convert as the inner type.
impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(values) = value else {
            return None;
        };

        let mut out = Self::with_capacity(values.len());
        for value in values {
            out.push(T::from_value(value)?);
        }

        Some(out)
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::Map(entries) = value else {
            return None;
        };

        let mut out = Self::new();
        for (key, value) in entries {
            out.insert(key.clone(), T::from_value(value)?);
        }

        Some(out)
    }
}

///
/// DynamicAccess
///
/// Name-keyed get/set over declared properties plus the class's own
/// additional-properties store, if any. Implemented by generated code; the
/// declared-property dispatch chain behind it is an inherent method pair, not
/// part of this surface.
///

pub trait DynamicAccess {
    fn get(&self, name: &str) -> Result<Value, AccessError>;

    fn set(&mut self, name: &str, value: Value) -> Result<(), AccessError>;
}

///
/// DynamicBuild
///
/// Fluent variant of the dynamic setter: identical matching, fallback, and
/// type-check semantics, but returns the receiver for call chaining.
///

pub trait DynamicBuild: Sized {
    fn with(self, name: &str, value: Value) -> Result<Self, AccessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_round_trips() {
        assert_eq!(bool::from_value(&true.to_value()), Some(true));
        assert_eq!(i64::from_value(&7_i64.to_value()), Some(7));
        assert_eq!(
            String::from_value(&"alpha".to_string().to_value()),
            Some("alpha".to_string())
        );
    }

    #[test]
    fn integer_widens_to_number_but_not_back() {
        assert_eq!(f64::from_value(&Value::Int(3)), Some(3.0));
        assert_eq!(i64::from_value(&Value::Float(3.0)), None);
    }

    #[test]
    fn incompatible_kinds_do_not_convert() {
        assert_eq!(i64::from_value(&Value::Text("not-a-number".into())), None);
        assert_eq!(bool::from_value(&Value::Int(1)), None);
        assert_eq!(String::from_value(&Value::Null), None);
    }

    #[test]
    fn option_accepts_null_and_inner_kind() {
        assert_eq!(Option::<String>::from_value(&Value::Null), Some(None));
        assert_eq!(
            Option::<String>::from_value(&Value::Text("x".into())),
            Some(Some("x".to_string()))
        );
        assert_eq!(Option::<String>::from_value(&Value::Int(1)), None);
        assert_eq!(None::<i64>.to_value(), Value::Null);
    }

    #[test]
    fn list_conversion_is_all_or_nothing() {
        let list = Value::List(vec![Value::Int(1), Value::Text("x".into())]);
        assert_eq!(Vec::<i64>::from_value(&list), None);
        assert_eq!(
            Vec::<Value>::from_value(&list),
            Some(vec![Value::Int(1), Value::Text("x".into())])
        );
    }
}
