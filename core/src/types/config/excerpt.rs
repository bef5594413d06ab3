use crate::error::ValidationError;
use crate::types::{CaseMatching, ExcerptLength};
use serde::{Deserialize, Serialize};

/// Excerpt window and highlight settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptConfig {
    #[serde(default = "default_length")]
    pub length: usize,
    /// Characters kept before the first match.
    #[serde(default = "default_lead_in")]
    pub lead_in: usize,
    /// Characters backed off from the window start when the window is clamped to the text end.
    #[serde(default = "default_end_backoff")]
    pub end_backoff: usize,
    #[serde(default = "default_highlight_open")]
    pub highlight_open: String,
    #[serde(default = "default_highlight_close")]
    pub highlight_close: String,
    #[serde(default)]
    pub case_matching: CaseMatching,
}

impl ExcerptConfig {
    pub fn excerpt_length(&self) -> Result<ExcerptLength, ValidationError> {
        Ok(ExcerptLength::try_new(self.length)?)
    }
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            lead_in: default_lead_in(),
            end_backoff: default_end_backoff(),
            highlight_open: default_highlight_open(),
            highlight_close: default_highlight_close(),
            case_matching: CaseMatching::default(),
        }
    }
}

fn default_length() -> usize {
    200
}

fn default_lead_in() -> usize {
    10
}

fn default_end_backoff() -> usize {
    2
}

fn default_highlight_open() -> String {
    "<b>".to_string()
}

fn default_highlight_close() -> String {
    "</b>".to_string()
}
