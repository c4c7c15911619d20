//! Fixture classes expanded through `#[class_model]` and the behavioral
//! test suite for the generated dynamic accessor surface.

pub mod chain;
pub mod dispatch;
pub mod flags;
pub mod widget;

///
/// Prelude
///

pub mod prelude {
    pub use podgen::prelude::*;
    pub use podgen_derive::class_model;
}
