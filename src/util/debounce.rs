//! Trailing-edge debouncing.
//!
//! DESIGN
//! ======
//! The timing decision lives in [`DebounceState`], a plain deadline
//! tracker that tests drive with an explicit clock. The browser wrapper
//! [`Debounce`] owns a `gloo` timeout whose drop cancels the pending run,
//! so every wrapper instance carries its own timer handle rather than
//! sharing module-level state.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Deadline tracker for trailing-edge debounce: the wrapped call is due
/// only once `wait_ms` has elapsed since the most recent [`arm`].
///
/// [`arm`]: DebounceState::arm
#[derive(Clone, Copy, Debug)]
pub struct DebounceState {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl DebounceState {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms: wait_ms.max(0.0),
            deadline: None,
        }
    }

    /// Record a call attempt at `now_ms`, superseding any pending deadline.
    pub fn arm(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// Whether the pending call is due at `now_ms`. A due call clears the
    /// deadline, so at most one run happens per quiescent period.
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Browser debounce wrapper around a callback.
#[cfg(feature = "web")]
pub struct Debounce {
    state: std::rc::Rc<std::cell::RefCell<DebounceState>>,
    callback: std::rc::Rc<dyn Fn()>,
    timer: Option<gloo_timers::callback::Timeout>,
    wait_ms: u32,
}

#[cfg(feature = "web")]
impl Debounce {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            state: std::rc::Rc::new(std::cell::RefCell::new(DebounceState::new(f64::from(
                wait_ms,
            )))),
            callback: std::rc::Rc::new(callback),
            timer: None,
            wait_ms,
        }
    }

    /// Schedule the wrapped callback, cancelling any pending run.
    pub fn call(&mut self) {
        self.state.borrow_mut().arm(js_sys::Date::now());
        // Dropping the previous timeout cancels it.
        self.timer = None;
        let state = std::rc::Rc::clone(&self.state);
        let callback = std::rc::Rc::clone(&self.callback);
        self.timer = Some(gloo_timers::callback::Timeout::new(
            self.wait_ms,
            move || {
                if state.borrow_mut().fire_if_due(js_sys::Date::now()) {
                    callback();
                }
            },
        ));
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&mut self) {
        self.state.borrow_mut().cancel();
        self.timer = None;
    }
}
