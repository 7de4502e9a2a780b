//! Smooth scrolling with a fixed-header offset.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed site header, subtracted from every scroll target.
pub const HEADER_OFFSET: f64 = 80.0;

/// Absolute document position to scroll to for an element whose viewport
/// top is `rect_top` while the page is already scrolled by `scroll_y`.
#[must_use]
pub fn scroll_target(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - HEADER_OFFSET
}

/// Smoothly scroll the first element matching `selector` into view,
/// leaving room for the fixed header. No-op when nothing matches.
pub fn smooth_scroll_to(selector: &str) {
    #[cfg(feature = "web")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Ok(Some(el)) = document.query_selector(selector) else {
            return;
        };
        let top = scroll_target(
            el.get_bounding_client_rect().top(),
            window.scroll_y().unwrap_or(0.0),
        );
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = selector;
    }
}
