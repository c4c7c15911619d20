use crate::prelude::*;

///
/// ChainWidget
///
/// Same shape as Widget, compiled with the if-chain dispatch body
/// instead of a match. Behavior must be indistinguishable.
///

#[class_model(
    opts(branch_dispatch = false),
    fields(
        field(ident = "name", ty = "string"),
        field(ident = "count", ty = "integer"),
    )
)]
pub struct ChainWidget;

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_dispatch_round_trips() {
        let mut widget = ChainWidget::default();

        widget
            .set("name", Value::Text("alpha".to_string()))
            .expect("declared");
        widget.set("count", Value::Int(3)).expect("declared");

        assert_eq!(
            widget.get("name").expect("declared"),
            Value::Text("alpha".to_string())
        );
        assert_eq!(widget.get("count").expect("declared"), Value::Int(3));
    }

    #[test]
    fn chain_dispatch_rejects_unknown_names() {
        let mut widget = ChainWidget::default();

        assert_eq!(
            widget.get("color").expect_err("undeclared"),
            AccessError::UnknownProperty {
                class: "ChainWidget".to_string(),
                property: "color".to_string(),
            }
        );
        assert!(widget.set("color", Value::Int(1)).is_err());
    }

    #[test]
    fn chain_dispatch_enforces_types() {
        let mut widget = ChainWidget::default();
        widget.set("count", Value::Int(9)).expect("compatible");

        let err = widget
            .set("count", Value::Bool(true))
            .expect_err("incompatible");
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                class: "ChainWidget".to_string(),
                property: "count".to_string(),
                expected: "integer".to_string(),
                actual: ValueKind::Boolean,
            }
        );
        assert_eq!(*widget.count(), 9);
    }

    #[test]
    fn chain_dispatch_supports_with() {
        let widget = ChainWidget::default()
            .with("count", Value::Int(4))
            .expect("declared");

        assert_eq!(*widget.count(), 4);
    }
}
