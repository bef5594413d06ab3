//! Text utilities for a search-results page.
//!
//! - [`query`]: read a named parameter from a URL query string, decoded and HTML-escaped.
//! - [`escape`]: the fixed HTML escape table.
//! - [`html`]: decode HTML markup and entities back into plain text.
//! - [`types`]: validated lengths, case matching, and the persisted page config.

pub mod error;
pub mod escape;
pub mod html;
pub mod query;
pub mod types;

pub use error::{DecodeError, Error, Result, ValidationError};
pub use escape::escape_html;
pub use html::{EntityDecoder, EntityOnlyDecoder, FragmentDecoder, html_decode};
pub use query::{QueryString, get_param};
