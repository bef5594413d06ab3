pub(crate) mod case_matching;
pub use case_matching::CaseMatching;

pub(crate) mod config;
pub use config::{ConfigError, ExcerptConfig, PageConfig, QueryConfig};

pub(crate) mod excerpt_length;
pub use excerpt_length::{ExcerptLength, ExcerptLengthError};
