use super::*;

// =============================================================
// RevealPhase
// =============================================================

#[test]
fn default_phase_is_pending() {
    assert_eq!(RevealPhase::default(), RevealPhase::Pending);
}

#[test]
fn pending_element_stays_pending_while_hidden() {
    let (phase, fire) = RevealPhase::Pending.advance(false);
    assert_eq!(phase, RevealPhase::Pending);
    assert!(!fire);
}

#[test]
fn first_visibility_fires_exactly_once() {
    let (phase, fire) = RevealPhase::Pending.advance(true);
    assert_eq!(phase, RevealPhase::Animated);
    assert!(fire);
}

#[test]
fn never_refires_after_leaving_and_reentering_view() {
    let (phase, fire) = RevealPhase::Pending.advance(true);
    assert!(fire);
    let (phase, fire) = phase.advance(false);
    assert!(!fire);
    let (phase, fire) = phase.advance(true);
    assert_eq!(phase, RevealPhase::Animated);
    assert!(!fire);
}

// =============================================================
// entrance_style
// =============================================================

#[test]
fn style_uses_requested_animation_name() {
    assert_eq!(entrance_style(Some("slideIn")), "slideIn 0.6s ease forwards");
}

#[test]
fn style_defaults_when_no_name_given() {
    assert_eq!(entrance_style(None), "fadeInUp 0.6s ease forwards");
}

#[test]
fn style_defaults_on_blank_attribute_value() {
    assert_eq!(entrance_style(Some("")), "fadeInUp 0.6s ease forwards");
    assert_eq!(entrance_style(Some("   ")), "fadeInUp 0.6s ease forwards");
}

#[test]
fn style_trims_surrounding_whitespace() {
    assert_eq!(entrance_style(Some(" pulse ")), "pulse 0.6s ease forwards");
}

// =============================================================
// Web no-ops
// =============================================================

#[cfg(not(feature = "web"))]
#[test]
fn init_is_noop_without_browser() {
    init();
}
