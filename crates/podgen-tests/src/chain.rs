use crate::prelude::*;

///
/// Base
///

#[class_model(fields(
    field(ident = "q", ty = "integer"),
    field(ident = "r", ty = "string"),
))]
pub struct Base;

///
/// Shadow
///
/// Redeclares `q` with a different type. Dispatch is derived-first, so
/// the redeclaration wins over the inherited one.
///

#[class_model(
    extends(ty = "Base", field = "base"),
    fields(field(ident = "q", ty = "string"))
)]
pub struct Shadow;

///
/// Leaf
///

#[class_model(
    extends(ty = "Shadow"),
    fields(field(ident = "s", ty = "boolean"))
)]
pub struct Leaf;

///
/// TESTS
///
