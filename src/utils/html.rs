//! HTML sanitizing for third-party markup.

/// Clean an API-provided HTML fragment before it is rendered with `inner_html`.
///
/// Formatting tags survive; scripts, event handlers and `javascript:` URLs do
/// not. The `class` attribute is kept on `span` so search-match highlighting
/// still applies.
pub fn sanitize_fragment(html: &str) -> String {
    ammonia::Builder::default()
        .add_tag_attributes("span", &["class"])
        .clean(html)
        .to_string()
}
