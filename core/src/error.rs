use std::str::Utf8Error;
use thiserror::Error;

use crate::types::ExcerptLengthError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Failure to percent-decode a query parameter value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed percent escape at byte {position}")]
    MalformedEscape { position: usize },

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid excerpt length: {0}")]
    ExcerptLength(#[from] ExcerptLengthError),
}
