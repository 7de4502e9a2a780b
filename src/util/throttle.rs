//! Leading-edge throttling.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Gate for leading-edge throttling: the first call passes immediately,
/// later calls are rejected until `limit_ms` has elapsed. There is no
/// trailing call.
#[derive(Clone, Copy, Debug)]
pub struct ThrottleGate {
    limit_ms: f64,
    reopen_at: Option<f64>,
}

impl ThrottleGate {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms: limit_ms.max(0.0),
            reopen_at: None,
        }
    }

    /// Try to pass the gate at `now_ms`. Passing closes it for `limit_ms`.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if self.reopen_at.is_some_and(|t| now_ms < t) {
            return false;
        }
        self.reopen_at = Some(now_ms + self.limit_ms);
        true
    }
}

/// Browser throttle wrapper around a callback, clocked by `Date.now()`.
/// Each wrapper owns its own gate.
#[cfg(feature = "web")]
pub struct Throttle {
    gate: ThrottleGate,
    callback: Box<dyn Fn()>,
}

#[cfg(feature = "web")]
impl Throttle {
    pub fn new(limit_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            gate: ThrottleGate::new(f64::from(limit_ms)),
            callback: Box::new(callback),
        }
    }

    /// Invoke the callback if the gate is open.
    pub fn call(&mut self) {
        if self.gate.try_fire(js_sys::Date::now()) {
            (self.callback)();
        }
    }
}
