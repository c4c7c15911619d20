use darling::{Error as DarlingError, FromMeta};
use proc_macro2::TokenStream;
use quote::quote;
use std::fmt;

///
/// Primitive
///
/// Declared schema types and their Rust renditions. Schema names are the
/// strings callers see in `TypeMismatch` diagnostics.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Primitive {
    Any,
    Array,
    Boolean,
    Integer,
    Number,
    Object,
    String,
}

impl Primitive {
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
        }
    }

    /// The Rust type generated fields and accessors use for this primitive.
    #[must_use]
    pub fn type_expr(self) -> TokenStream {
        match self {
            Self::Any => quote!(::podgen::value::Value),
            Self::Array => quote!(::std::vec::Vec<::podgen::value::Value>),
            Self::Boolean => quote!(bool),
            Self::Integer => quote!(i64),
            Self::Number => quote!(f64),
            Self::Object => quote!(
                ::std::collections::BTreeMap<::std::string::String, ::podgen::value::Value>
            ),
            Self::String => quote!(::std::string::String),
        }
    }
}

impl FromMeta for Primitive {
    fn from_string(value: &str) -> Result<Self, DarlingError> {
        match value {
            "any" => Ok(Self::Any),
            "array" => Ok(Self::Array),
            "boolean" => Ok(Self::Boolean),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "object" => Ok(Self::Object),
            "string" => Ok(Self::String),
            other => Err(DarlingError::unknown_value(other)),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

///
/// Cardinality
///
/// `Opt` properties accept null on the dynamic set path and store `None`;
/// `One` properties reject it as a type mismatch.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cardinality {
    One,
    Opt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_parses_schema_names() {
        assert_eq!(Primitive::from_string("integer").unwrap(), Primitive::Integer);
        assert_eq!(Primitive::from_string("string").unwrap(), Primitive::String);
        assert!(Primitive::from_string("tuple").is_err());
    }

    #[test]
    fn primitive_displays_schema_names() {
        assert_eq!(Primitive::Integer.to_string(), "integer");
        assert_eq!(Primitive::Any.to_string(), "any");
    }

    #[test]
    fn integer_maps_to_i64() {
        assert_eq!(Primitive::Integer.type_expr().to_string(), "i64");
    }
}
