//! Navigation highlighting and the mobile menu toggle.
//!
//! Marks the nav link matching the current location as `active` and, when
//! the hamburger button exists, wires it to open and close the link list.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Selector for highlightable navigation links.
pub const LINK_SELECTOR: &str = "a.nav-link";
/// Class applied to the link matching the current page.
pub const ACTIVE_CLASS: &str = "active";
/// Class toggled on the link container while the mobile menu is open.
pub const MOBILE_OPEN_CLASS: &str = "mobile-active";

/// Extract the page name from a location path.
///
/// The empty path, or a path ending in `/`, maps to `index.html`, which is
/// how static hosts serve the site root.
#[must_use]
pub fn page_name(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() {
        "index.html".to_owned()
    } else {
        name.to_owned()
    }
}

/// Whether a link carrying `href` targets the current page.
#[must_use]
pub fn is_active(current_page: &str, href: &str) -> bool {
    href == current_page
}

/// Highlight the active link and wire the mobile menu toggle.
pub fn init() {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let current = document
            .location()
            .and_then(|loc| loc.pathname().ok())
            .map_or_else(|| "index.html".to_owned(), |path| page_name(&path));

        if let Ok(links) = document.query_selector_all(LINK_SELECTOR) {
            for i in 0..links.length() {
                let Some(el) = links.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                else {
                    continue;
                };
                let matched = el
                    .get_attribute("href")
                    .is_some_and(|href| is_active(&current, &href));
                if matched {
                    let _ = el.class_list().add_1(ACTIVE_CLASS);
                } else {
                    let _ = el.class_list().remove_1(ACTIVE_CLASS);
                }
            }
        }

        wire_mobile_toggle(&document);
    }
}

#[cfg(feature = "web")]
fn wire_mobile_toggle(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(Some(toggle)) = document.query_selector("#mobile-nav-toggle") else {
        return;
    };
    let Ok(Some(container)) = document.query_selector(".nav-links") else {
        return;
    };
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let _ = container.class_list().toggle(MOBILE_OPEN_CLASS);
    });
    let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
