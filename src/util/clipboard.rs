//! Clipboard copy with a legacy fallback.
//!
//! The async clipboard API is tried first; engines that refuse or lack it
//! fall back to a hidden `<input>` plus `execCommand("copy")`. Both paths
//! report success as a plain boolean, so callers never see an error.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Copy `text` to the clipboard.
///
/// Returns `true` if either the async API or the legacy fallback
/// succeeded, `false` only when both fail (or outside a browser).
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "web")]
    {
        if copy_via_clipboard_api(text).await {
            return true;
        }
        copy_via_hidden_input(text)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = text;
        false
    }
}

#[cfg(feature = "web")]
async fn copy_via_clipboard_api(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .is_ok()
}

#[cfg(feature = "web")]
fn copy_via_hidden_input(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(input) = document.create_element("input") else {
        return false;
    };
    let Ok(input) = input.dyn_into::<web_sys::HtmlInputElement>() else {
        return false;
    };
    input.set_value(text);
    let _ = input.style().set_property("position", "fixed");
    let _ = input.style().set_property("opacity", "0");
    if body.append_child(&input).is_err() {
        return false;
    }
    input.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&input);
    copied
}
