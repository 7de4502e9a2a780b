//! Light/dark theme management persisted in `localStorage`.
//!
//! The site is dark by default; the stored value `"light"` switches the
//! body to the light palette. Every load and toggle keeps the stored
//! value and the body class in agreement.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted choice.
pub const STORAGE_KEY: &str = "theme";
/// Body class carrying the light palette.
pub const LIGHT_CLASS: &str = "light-theme";
/// Id of the button the toggle handler binds to.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Active color theme. Dark is the default when nothing is stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference; anything but `"light"` is dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written back to storage.
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle button: the moon offers dark mode while
    /// the light palette is active, the sun offers light mode.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1f319}",
            Self::Dark => "\u{2600}\u{fe0f}",
        }
    }
}

/// Restore the persisted theme and wire the toggle button.
///
/// Inert when the page has no `#theme-toggle` button and no stored value.
pub fn init() {
    #[cfg(feature = "web")]
    {
        let theme = Theme::from_stored(read_stored().as_deref());
        apply(theme);
        wire_toggle();
    }
}

/// Apply the body class and toggle icon for `theme`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "web")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = document.body() {
            let class_list = body.class_list();
            let _ = match theme {
                Theme::Light => class_list.add_1(LIGHT_CLASS),
                Theme::Dark => class_list.remove_1(LIGHT_CLASS),
            };
        }
        if let Ok(Some(button)) = document.query_selector(&format!("#{TOGGLE_ID}")) {
            button.set_text_content(Some(theme.icon()));
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// Flip the current theme, persist the choice, and update the page.
/// Returns the theme now in effect.
pub fn toggle() -> Theme {
    #[cfg(feature = "web")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Theme::Dark;
        };
        let next = current(&document).toggled();
        apply(next);
        persist(next);
        next
    }
    #[cfg(not(feature = "web"))]
    {
        Theme::Dark
    }
}

#[cfg(feature = "web")]
fn current(document: &web_sys::Document) -> Theme {
    document.body().map_or(Theme::Dark, |body| {
        if body.class_list().contains(LIGHT_CLASS) {
            Theme::Light
        } else {
            Theme::Dark
        }
    })
}

#[cfg(feature = "web")]
fn persist(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.stored_value());
    }
}

#[cfg(feature = "web")]
fn read_stored() -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    storage.get_item(STORAGE_KEY).ok().flatten()
}

#[cfg(feature = "web")]
fn wire_toggle() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(Some(button)) = document.query_selector(&format!("#{TOGGLE_ID}")) else {
        return;
    };
    let on_click = Closure::<dyn FnMut()>::new(|| {
        toggle();
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
