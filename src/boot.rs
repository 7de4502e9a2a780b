//! Page bootstrap: one-time initialization once the DOM is ready.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// WASM entry point. Installs panic reporting and console logging, then
/// runs the page initializers as soon as the document structure exists.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    run_when_ready();
}

#[cfg(feature = "web")]
fn run_when_ready() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == web_sys::DocumentReadyState::Loading {
        let once = Closure::<dyn FnMut()>::new(init_page);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref());
        once.forget();
    } else {
        // Script loaded deferred or late; the DOM is already parsed.
        init_page();
    }
}

/// Run the three page initializers in fixed order. Each one is a silent
/// no-op when its markup is absent.
pub fn init_page() {
    crate::nav::init();
    crate::reveal::init();
    crate::theme::init();
}
