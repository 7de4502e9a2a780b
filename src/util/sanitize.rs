//! HTML escaping for untrusted text.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Escape `&`, `<`, and `>` so `input` is safe to insert as markup.
///
/// This is the same character set a text-node/`innerHTML` round trip
/// escapes, so the output renders as the original text.
#[must_use]
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
