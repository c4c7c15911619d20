use crate::value::{Value, ValueKind};
use thiserror::Error as ThisError;

///
/// Lookup
///
/// Two-state result of walking a class's declared-property dispatch chain.
/// `NotFound` is distinct from `Found(Value::Null)`: a declared property may
/// legitimately hold null, while an unmatched name falls through to the
/// additional-properties store or to an `AccessError`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Found(Value),
    NotFound,
}

///
/// AccessError
///
/// Runtime failures raised by generated dynamic accessors. Never recovered
/// internally; surfaced to the instance's caller.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("property \"{property}\" of {class} is of type \"{expected}\", but got {actual}")]
    TypeMismatch {
        class: String,
        property: String,
        expected: String,
        actual: ValueKind,
    },

    #[error("property \"{property}\" is not defined on {class}")]
    UnknownProperty { class: String, property: String },
}

impl AccessError {
    pub fn unknown_property(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            class: class.into(),
            property: property.into(),
        }
    }

    pub fn type_mismatch(
        class: impl Into<String>,
        property: impl Into<String>,
        expected: impl Into<String>,
        actual: ValueKind,
    ) -> Self {
        Self::TypeMismatch {
            class: class.into(),
            property: property.into(),
            expected: expected.into(),
            actual,
        }
    }
}
