use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExcerptError {
    #[error("pattern does not occur in the text")]
    NoMatch,

    #[error("search pattern is empty")]
    EmptyPattern,

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
