use super::*;

#[test]
fn success_passes_through_untouched() {
    let result = with_error_handling("op", Fallback::None, || Ok::<_, String>(7));
    assert_eq!(result, Some(7));
}

#[test]
fn fallback_is_ignored_on_success() {
    let result = with_error_handling("op", Fallback::Compute(|| unreachable!()), || {
        Ok::<i32, String>(1)
    });
    assert_eq!(result, Some(1));
}

#[test]
fn default_fallback_yields_nothing() {
    let result: Option<i32> =
        with_error_handling("op", Fallback::default(), || Err("boom".to_owned()));
    assert_eq!(result, None);
}

#[test]
fn value_fallback_substitutes_on_error() {
    let result = with_error_handling("op", Fallback::Value(42), || Err::<i32, _>("boom"));
    assert_eq!(result, Some(42));
}

#[test]
fn computed_fallback_runs_on_error() {
    let result = with_error_handling("op", Fallback::Compute(|| 9), || Err::<i32, _>("boom"));
    assert_eq!(result, Some(9));
}
