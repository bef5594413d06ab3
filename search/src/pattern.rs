//! Search pattern types.

use crate::error::ExcerptError;
use regex::{Regex, RegexBuilder};
use serpkit_core::types::CaseMatching;

/// A compiled pattern used both to locate the first match and to highlight.
///
/// Literal patterns match their text exactly (subject to [`CaseMatching`]);
/// regex patterns use `regex` syntax, including inline flags like `(?i)`.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    matcher: Regex,
}

impl SearchPattern {
    /// Case-sensitive literal pattern.
    pub fn literal(text: &str) -> Result<Self, ExcerptError> {
        Self::literal_with(text, CaseMatching::Sensitive)
    }

    /// Literal pattern compared according to `case_matching`.
    pub fn literal_with(text: &str, case_matching: CaseMatching) -> Result<Self, ExcerptError> {
        if text.is_empty() {
            return Err(ExcerptError::EmptyPattern);
        }
        let matcher = RegexBuilder::new(&regex::escape(text))
            .case_insensitive(case_matching.is_insensitive_for(text))
            .build()?;
        Ok(Self { matcher })
    }

    /// Pattern in `regex` syntax.
    pub fn regex(pattern: &str) -> Result<Self, ExcerptError> {
        if pattern.is_empty() {
            return Err(ExcerptError::EmptyPattern);
        }
        Ok(Self {
            matcher: Regex::new(pattern)?,
        })
    }

    /// Byte offset where the first match starts.
    pub fn find_first(&self, text: &str) -> Option<usize> {
        self.matcher.find(text).map(|m| m.start())
    }

    /// The compiled matcher, used for highlighting.
    pub fn as_regex(&self) -> &Regex {
        &self.matcher
    }
}

impl From<Regex> for SearchPattern {
    fn from(matcher: Regex) -> Self {
        Self { matcher }
    }
}
