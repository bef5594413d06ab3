mod window;

use crate::error::ExcerptError;
use crate::pattern::SearchPattern;
use regex::Captures;
use serpkit_core::types::{CaseMatching, ExcerptConfig, ExcerptLength};
use tracing::debug;
use window::Window;

pub const LEADING_ELLIPSIS: &str = "... ";
pub const TRAILING_ELLIPSIS: &str = " ...";

/// Builds highlighted excerpts around the first match of a pattern.
///
/// The window starts `lead_in` chars before the match, snapped back to a
/// space, and spans roughly the requested length, snapped forward to a space.
/// Every match inside the window is wrapped in the highlight tags.
#[derive(Debug, Clone)]
pub struct ExcerptBuilder {
    lead_in: usize,
    end_backoff: usize,
    highlight_open: String,
    highlight_close: String,
    case_matching: CaseMatching,
}

impl Default for ExcerptBuilder {
    fn default() -> Self {
        Self::from(&ExcerptConfig::default())
    }
}

impl From<&ExcerptConfig> for ExcerptBuilder {
    fn from(config: &ExcerptConfig) -> Self {
        Self {
            lead_in: config.lead_in,
            end_backoff: config.end_backoff,
            highlight_open: config.highlight_open.clone(),
            highlight_close: config.highlight_close.clone(),
            case_matching: config.case_matching,
        }
    }
}

impl ExcerptBuilder {
    pub fn with_highlight(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.highlight_open = open.into();
        self.highlight_close = close.into();
        self
    }

    pub fn with_lead_in(mut self, lead_in: usize) -> Self {
        self.lead_in = lead_in;
        self
    }

    /// Literal pattern for user-typed search terms, using the configured case matching.
    pub fn literal(&self, terms: &str) -> Result<SearchPattern, ExcerptError> {
        SearchPattern::literal_with(terms, self.case_matching)
    }

    pub fn build(
        &self,
        text: &str,
        pattern: &SearchPattern,
        excerpt_length: ExcerptLength,
    ) -> Result<String, ExcerptError> {
        let Some(match_start) = pattern.find_first(text) else {
            debug!(text_len = text.len(), "no match for excerpt");
            return Err(ExcerptError::NoMatch);
        };

        let window = Window::around(
            text,
            match_start,
            excerpt_length.get(),
            self.lead_in,
            self.end_backoff,
        );
        let truncated_left = window.truncated_left();
        let truncated_right = window.truncated_right(text);
        debug!(
            match_start,
            start = window.start,
            end = window.end,
            truncated_left,
            truncated_right,
            "excerpt window"
        );

        let highlighted = pattern
            .as_regex()
            .replace_all(window.slice(text), |caps: &Captures<'_>| {
                let matched = &caps[0];
                if matched.is_empty() {
                    String::new()
                } else {
                    format!("{}{}{}", self.highlight_open, matched, self.highlight_close)
                }
            });

        let mut excerpt = String::with_capacity(
            highlighted.len() + LEADING_ELLIPSIS.len() + TRAILING_ELLIPSIS.len(),
        );
        if truncated_left {
            excerpt.push_str(LEADING_ELLIPSIS);
        }
        excerpt.push_str(&highlighted);
        if truncated_right {
            excerpt.push_str(TRAILING_ELLIPSIS);
        }
        Ok(excerpt)
    }
}

/// Builds an excerpt with the default settings. See [`ExcerptBuilder::build`].
pub fn build_excerpt(
    text: &str,
    pattern: &SearchPattern,
    excerpt_length: ExcerptLength,
) -> Result<String, ExcerptError> {
    ExcerptBuilder::default().build(text, pattern, excerpt_length)
}
