//! Catch-and-substitute error handling.
//!
//! The page never surfaces errors to the user; this wrapper logs them and
//! substitutes a caller-chosen fallback instead of propagating.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

/// What to substitute when the wrapped operation fails.
#[derive(Default)]
pub enum Fallback<T> {
    /// Yield nothing (the default).
    #[default]
    None,
    /// Yield a ready-made value.
    Value(T),
    /// Yield the result of calling a function.
    Compute(fn() -> T),
}

/// Run `f`, passing its success through as `Some`.
///
/// On error, log it under `label` and substitute `fallback`. Errors are
/// never re-raised.
pub fn with_error_handling<T, E: std::fmt::Display>(
    label: &str,
    fallback: Fallback<T>,
    f: impl FnOnce() -> Result<T, E>,
) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("{label}: {err}");
            match fallback {
                Fallback::None => None,
                Fallback::Value(value) => Some(value),
                Fallback::Compute(make) => Some(make()),
            }
        }
    }
}
