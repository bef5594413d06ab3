mod excerpt;
mod page;

pub use excerpt::ExcerptConfig;
pub use page::{ConfigError, PageConfig, QueryConfig};
