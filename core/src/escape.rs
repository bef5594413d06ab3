//! HTML escaping for values echoed back into a page.

use std::borrow::Cow;

/// Characters replaced by [`escape_html`] and their entity forms.
pub const HTML_ESCAPES: [(char, &str); 6] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
    ('/', "&#x2F;"),
];

fn entity_for(c: char) -> Option<&'static str> {
    HTML_ESCAPES
        .iter()
        .find(|(reserved, _)| *reserved == c)
        .map(|(_, entity)| *entity)
}

/// Escapes the reserved characters of [`HTML_ESCAPES`].
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    let Some(first) = value.find(|c: char| entity_for(c).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut escaped = String::with_capacity(value.len() + 8);
    escaped.push_str(&value[..first]);
    for c in value[first..].chars() {
        match entity_for(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
