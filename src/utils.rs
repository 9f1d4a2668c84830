// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small helpers shared across components.

/// Strip anything from a candidate href that could be interpreted as markup
/// once the value lands in an `href` attribute: ASCII control characters and
/// the characters that can open or close markup. Well-formed URLs pass
/// through unchanged.
pub fn purify_href(href: &str) -> String {
    href.chars()
        .filter(|c| !c.is_ascii_control() && !matches!(c, '<' | '>' | '"' | '\'' | '`'))
        .collect()
}

/// The raw query string of the current page (`location.search`), empty when
/// the page has none.
pub fn current_query_string() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
