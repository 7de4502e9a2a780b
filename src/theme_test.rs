use super::*;

// =============================================================
// Theme::from_stored
// =============================================================

#[test]
fn absent_value_means_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn stored_light_means_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_dark_means_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn unrecognized_value_falls_back_to_dark() {
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
}

// =============================================================
// Toggle round trip
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn one_toggle_from_default_reaches_light() {
    assert_eq!(Theme::default().toggled(), Theme::Light);
}

#[test]
fn two_toggles_return_to_dark() {
    assert_eq!(Theme::default().toggled().toggled(), Theme::Dark);
}

#[test]
fn stored_value_survives_a_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.stored_value())), theme);
    }
}

// =============================================================
// Icon
// =============================================================

#[test]
fn light_theme_shows_the_moon() {
    assert_eq!(Theme::Light.icon(), "\u{1f319}");
}

#[test]
fn dark_theme_shows_the_sun() {
    assert_eq!(Theme::Dark.icon(), "\u{2600}\u{fe0f}");
}

// =============================================================
// Web no-ops
// =============================================================

#[cfg(not(feature = "web"))]
#[test]
fn browser_entry_points_are_inert_natively() {
    init();
    apply(Theme::Light);
    assert_eq!(toggle(), Theme::Dark);
}
