use crate::prelude::*;

///
/// BuilderOnly
///
/// Builders without accessors: `with` is the only dynamic surface.
///

#[class_model(
    opts(accessors = false),
    fields(field(ident = "name", ty = "string"))
)]
pub struct BuilderOnly;

///
/// StaticOnly
///
/// Dynamic surface disabled entirely; only the static accessors exist.
///

#[class_model(
    opts(dynamic = false),
    fields(field(ident = "name", ty = "string"))
)]
pub struct StaticOnly;

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_only_class_supports_with() {
        let built = BuilderOnly::default()
            .with("name", Value::Text("solo".to_string()))
            .expect("declared");

        assert_eq!(built.name().as_str(), "solo");
    }

    #[test]
    fn builder_only_with_still_validates() {
        assert!(BuilderOnly::default().with("missing", Value::Null).is_err());
        assert!(
            BuilderOnly::default()
                .with("name", Value::Int(1))
                .is_err()
        );
    }

    #[test]
    fn static_accessors_work_without_the_dynamic_surface() {
        let mut class = StaticOnly::default();

        class.set_name("fixed".to_string());
        assert_eq!(class.name().as_str(), "fixed");
    }
}
