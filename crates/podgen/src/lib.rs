pub mod access;
pub mod traits;
pub mod value;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        access::{AccessError, Lookup},
        traits::{DynamicAccess, DynamicBuild, FieldValue},
        value::{Value, ValueKind},
    };
}
