use super::*;

#[test]
fn script_tag_becomes_inert_text() {
    assert_eq!(sanitize_html("<script>"), "&lt;script&gt;");
}

#[test]
fn full_element_is_escaped() {
    assert_eq!(
        sanitize_html("<img src=x onerror=alert(1)>"),
        "&lt;img src=x onerror=alert(1)&gt;"
    );
}

#[test]
fn ampersands_are_escaped_first_class() {
    // Already-escaped input is escaped again rather than passed through.
    assert_eq!(sanitize_html("&lt;"), "&amp;lt;");
    assert_eq!(sanitize_html("a & b"), "a &amp; b");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(sanitize_html("hello, world"), "hello, world");
    assert_eq!(sanitize_html(""), "");
}

#[test]
fn quotes_are_left_alone() {
    assert_eq!(sanitize_html(r#"say "hi""#), r#"say "hi""#);
}

#[test]
fn non_ascii_text_is_preserved() {
    assert_eq!(sanitize_html("naïve <b>café</b>"), "naïve &lt;b&gt;café&lt;/b&gt;");
}
