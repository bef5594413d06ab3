//! Turning HTML markup back into plain text.
//!
//! Decoding is a capability: [`EntityDecoder`] implementations decide how much of
//! HTML they understand. [`FragmentDecoder`] behaves like assigning the value as
//! the inner HTML of a detached element and reading back its text content.

use scraper::Html;

pub trait EntityDecoder {
    fn decode(&self, value: &str) -> String;
}

/// Parses the value as an HTML fragment and returns its text content.
///
/// Tags are dropped, named, decimal and hex entities are resolved. Malformed
/// markup is recovered the way a browser would, so decoding never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentDecoder;

impl EntityDecoder for FragmentDecoder {
    fn decode(&self, value: &str) -> String {
        if !value.contains(['<', '&']) {
            return value.to_string();
        }
        let fragment = Html::parse_fragment(value);
        fragment.root_element().text().collect()
    }
}

/// Resolves character references only; tag-like text is kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityOnlyDecoder;

impl EntityDecoder for EntityOnlyDecoder {
    fn decode(&self, value: &str) -> String {
        html_escape::decode_html_entities(value).into_owned()
    }
}

pub fn html_decode(value: &str) -> String {
    FragmentDecoder.decode(value)
}
