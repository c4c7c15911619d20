use crate::prelude::*;

///
/// Widget
///
/// Closed class: two declared properties, no parent, no additional store.
///

#[class_model(fields(
    field(ident = "name", ty = "string"),
    field(ident = "count", ty = "integer"),
))]
pub struct Widget;

///
/// ExtendedWidget
///
/// Derived from Widget, adds one property and an additional-properties
/// store.
///

#[class_model(
    extends(ty = "Widget"),
    additional(),
    fields(field(ident = "label", ty = "string"))
)]
pub struct ExtendedWidget;

///
/// Profile
///
/// Closed class with a nullable property.
///

#[class_model(fields(
    field(ident = "nickname", ty = "string", opt),
    field(ident = "age", ty = "integer"),
    field(ident = "score", ty = "number"),
))]
pub struct Profile;

///
/// TESTS
///
