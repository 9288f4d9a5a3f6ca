use pretty_assertions::assert_eq;

use super::*;

fn captures(n: i32) -> Vec<Capture> {
    (1..=n).map(|i| Capture::Value(Value::from(i))).collect()
}

#[test]
fn test_literal_is_not_invocable() {
    let action = 7i32.into_action();
    assert!(!action.is_invocable());
    assert_eq!(action.declared_arity(), 0);
    assert_eq!(action.invoke(captures(2)), Value::from(7));
}

#[test]
fn test_closure_arities() {
    let zero = (|| "zero").into_action();
    let one = (|a: Capture| a.into_value()).into_action();
    let two = (|_: Capture, b: Capture| b.into_value()).into_action();
    let three = (|_: Capture, _: Capture, c: Capture| c.into_value()).into_action();

    assert_eq!(zero.declared_arity(), 0);
    assert_eq!(one.declared_arity(), 1);
    assert_eq!(two.declared_arity(), 2);
    assert_eq!(three.declared_arity(), 3);

    assert_eq!(zero.invoke(vec![]), Value::from("zero"));
    assert_eq!(one.invoke(captures(1)), Value::from(1));
    assert_eq!(two.invoke(captures(2)), Value::from(2));
    assert_eq!(three.invoke(captures(3)), Value::from(3));
}

#[test]
fn test_missing_arguments_arrive_empty() {
    let three = (|_: Capture, b: Capture, c: Capture| b.is_empty_capture() && c.is_empty_capture())
        .into_action();
    assert_eq!(three.invoke(captures(1)), Value::from(true));
}

#[test]
fn test_variadic() {
    let sum = Action::variadic(4, |args: Vec<Capture>| {
        assert_eq!(args.len(), 4);
        args.iter()
            .filter_map(|c| c.as_value().and_then(Value::as_scalar))
            .count()
    });
    assert_eq!(sum.declared_arity(), 4);
    assert_eq!(sum.invoke(captures(2)), Value::from(2usize));
}

#[test]
fn test_action_passes_through() {
    let action = Action::literal("x").into_action();
    assert_eq!(action.invoke(vec![]), Value::from("x"));
    assert_eq!(format!("{action:?}"), "Literal(Str(\"x\"))");
    assert_eq!(
        format!("{:?}", (|| ()).into_action()),
        "Callable(arity = 0)"
    );
}
