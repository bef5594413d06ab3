//! Query string parameter lookup.

use crate::error::{DecodeError, Error};
use crate::escape::escape_html;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use tracing::debug;
use url::Url;

/// The raw text after `?` in a page URL, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString<'a> {
    raw: Cow<'a, str>,
}

impl<'a> QueryString<'a> {
    /// Wraps an already extracted query string. A leading `?` is ignored.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw: Cow::Borrowed(raw.strip_prefix('?').unwrap_or(raw)),
        }
    }

    pub fn from_url(url: &'a Url) -> Self {
        Self::new(url.query().unwrap_or(""))
    }

    /// Parses an absolute URL and keeps its query component.
    pub fn parse_url(url: &str) -> Result<QueryString<'static>, Error> {
        let url = Url::parse(url)?;
        Ok(QueryString {
            raw: Cow::Owned(url.query().unwrap_or("").to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Iterates `key=value` tokens in order, split on the first `=`.
    ///
    /// Tokens without `=` are skipped. Keys and values are returned undecoded.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.raw.split('&').filter_map(|token| token.split_once('='))
    }

    /// Returns the first value whose raw key equals `name`, percent-decoded and HTML-escaped.
    pub fn get(&self, name: &str) -> Result<Option<String>, DecodeError> {
        let Some((_, value)) = self.params().find(|(key, _)| *key == name) else {
            debug!(name, "query parameter absent");
            return Ok(None);
        };

        let decoded = decode_component(value).inspect_err(|err| {
            debug!(name, %err, "query parameter failed to decode");
        })?;
        debug!(name, "query parameter found");
        Ok(Some(escape_html(&decoded).into_owned()))
    }
}

/// Looks up `name` in `query`. See [`QueryString::get`].
pub fn get_param(query: &QueryString<'_>, name: &str) -> Result<Option<String>, DecodeError> {
    query.get(name)
}

/// Decodes a form-encoded component: `+` is a space, `%XX` escapes must be well formed
/// and the decoded bytes must be UTF-8.
pub fn decode_component(value: &str) -> Result<String, DecodeError> {
    check_escapes(value)?;
    let spaced = value.replace('+', "%20");
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(decoded.into_owned())
}

fn check_escapes(value: &str) -> Result<(), DecodeError> {
    let bytes = value.as_bytes();
    let mut from = 0;
    while let Some(offset) = bytes[from..].iter().position(|&b| b == b'%') {
        let position = from + offset;
        match bytes.get(position + 1..position + 3) {
            Some(&[hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {}
            _ => return Err(DecodeError::MalformedEscape { position }),
        }
        from = position + 3;
    }
    Ok(())
}
