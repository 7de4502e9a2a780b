//! Scroll-triggered entrance animations.
//!
//! Elements tagged `data-animate` start invisible and receive a one-shot
//! CSS animation the first time they cross the visibility threshold. On
//! engines without `IntersectionObserver` nothing is touched, so elements
//! simply keep their authored styles.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Attribute that requests an entrance animation; its value, when
/// non-empty, names the animation.
pub const ANIMATE_ATTR: &str = "data-animate";
/// Marker set once an element has animated, so the effect never re-fires.
pub const ANIMATED_ATTR: &str = "data-animated";
/// Animation used when `data-animate` carries no name.
pub const DEFAULT_ANIMATION: &str = "fadeInUp";
/// Fraction of the element that must be visible before it animates.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Lifecycle of one tagged element. The transition is one-way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Pending,
    Animated,
}

impl RevealPhase {
    /// Advance on a visibility report. Returns the next phase and whether
    /// the animation should be applied now (true exactly once).
    #[must_use]
    pub fn advance(self, visible: bool) -> (Self, bool) {
        match (self, visible) {
            (Self::Pending, true) => (Self::Animated, true),
            (phase, _) => (phase, false),
        }
    }
}

/// Inline `animation` shorthand for an element's requested animation.
#[must_use]
pub fn entrance_style(name: Option<&str>) -> String {
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_ANIMATION,
    };
    format!("{name} 0.6s ease forwards")
}

/// Hide tagged elements and arm the visibility observer.
pub fn init() {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::{JsCast, JsValue, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let supported = js_sys::Reflect::has(
            window.as_ref(),
            &JsValue::from_str("IntersectionObserver"),
        )
        .unwrap_or(false);
        if !supported {
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        let Ok(targets) = document.query_selector_all(&format!("[{ANIMATE_ATTR}]")) else {
            return;
        };
        if targets.length() == 0 {
            return;
        }

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let phase = if target.has_attribute(ANIMATED_ATTR) {
                        RevealPhase::Animated
                    } else {
                        RevealPhase::Pending
                    };
                    let (_, fire) = phase.advance(entry.is_intersecting());
                    if !fire {
                        continue;
                    }
                    if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
                        let name = el.get_attribute(ANIMATE_ATTR);
                        let _ = el
                            .style()
                            .set_property("animation", &entrance_style(name.as_deref()));
                    }
                    let _ = target.set_attribute(ANIMATED_ATTR, "");
                    observer.unobserve(&target);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };
        on_intersect.forget();

        for i in 0..targets.length() {
            let Some(el) = targets
                .get(i)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };
            let _ = el.style().set_property("opacity", "0");
            observer.observe(&el);
        }
    }
}
