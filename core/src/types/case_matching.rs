use serde::{Deserialize, Serialize};
use std::fmt;

/// How literal search patterns compare letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    #[default]
    Sensitive,
    Insensitive,
    /// Case-insensitive unless the pattern contains uppercase.
    Smart,
}

impl CaseMatching {
    /// Resolves the mode against a concrete pattern.
    pub fn is_insensitive_for(self, pattern: &str) -> bool {
        match self {
            CaseMatching::Sensitive => false,
            CaseMatching::Insensitive => true,
            CaseMatching::Smart => !pattern.chars().any(char::is_uppercase),
        }
    }
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}
