use super::*;

#[test]
fn target_accounts_for_the_fixed_header() {
    let target = scroll_target(500.0, 0.0);
    assert!((target - 420.0).abs() < f64::EPSILON);
}

#[test]
fn target_adds_the_current_scroll_position() {
    let target = scroll_target(100.0, 300.0);
    assert!((target - 320.0).abs() < f64::EPSILON);
}

#[test]
fn element_near_the_top_can_yield_a_negative_target() {
    // The browser clamps negative positions to zero on scroll.
    assert!(scroll_target(10.0, 0.0) < 0.0);
}

#[cfg(not(feature = "web"))]
#[test]
fn scrolling_is_noop_without_browser() {
    smooth_scroll_to("#missing");
}
